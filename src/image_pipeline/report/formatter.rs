use std::fmt;
use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::report::payload::encode_payload;
use crate::image_pipeline::symbols::Symbol;

/// One report line for a symbol, without the trailing newline.
///
/// `type:<name> quality:<int> points:<x,y;x,y...> data:<base64>`
pub struct ReportLine<'a>(pub &'a Symbol);

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.0;
        write!(f, "type:{} quality:{} points:", symbol.symbol_type, symbol.quality)?;
        for (i, point) in symbol.points.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{},{}", point.x, point.y)?;
        }
        write!(f, " data:{}", encode_payload(&symbol.data))
    }
}

/// Renders every symbol, one newline-terminated line each.
pub fn format_report(symbols: &[Symbol]) -> String {
    let mut report = String::new();
    for symbol in symbols {
        report.push_str(&ReportLine(symbol).to_string());
        report.push('\n');
    }
    report
}

/// Writes the full report in a single call, so nothing reaches `output`
/// unless the whole report was rendered.
pub fn write_report(symbols: &[Symbol], output: &mut dyn Write) -> Result<()> {
    let report = format_report(symbols);
    debug!("Writing {} report lines", symbols.len());
    output.write_all(report.as_bytes())?;
    output.flush()?;
    Ok(())
}

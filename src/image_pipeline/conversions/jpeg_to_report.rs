use tracing::{debug, info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ScanError, Result},
    common::timing::{PipelineTimings, Timer},
    jpeg::{JpegImageReader, JpegDecoderReader},
    luminance::LuminanceConverter,
    report::write_report,
    symbols::{ScanConfig, Symbol, SymbolScanner, ZedbarScanner},
};

pub struct ScanPipeline<R: JpegImageReader, S: SymbolScanner> {
    reader: R,
    scanner: S,
    converter: LuminanceConverter,
    config: ScanConfig,
}

impl ScanPipeline<JpegDecoderReader, ZedbarScanner> {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            reader: JpegDecoderReader,
            scanner: ZedbarScanner::new(),
            converter: LuminanceConverter::new(),
            config,
        }
    }
}

impl<R: JpegImageReader, S: SymbolScanner> ScanPipeline<R, S> {
    pub fn with_custom(reader: R, scanner: S, config: ScanConfig) -> Self {
        Self {
            reader,
            scanner,
            converter: LuminanceConverter::new(),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ScanError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ScanError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input` as JPEG and returns the symbols found in it.
    pub fn scan(&self, input: &[u8]) -> Result<Vec<Symbol>> {
        self.scan_timed(input).map(|(symbols, _)| symbols)
    }

    #[instrument(skip(self, input), fields(input_size = input.len()))]
    pub fn scan_timed(&self, input: &[u8]) -> Result<(Vec<Symbol>, PipelineTimings)> {
        info!("Starting JPEG symbol scan");
        let mut timings = PipelineTimings::new();

        let pixels = {
            let _span = tracing::info_span!("decode_jpeg").entered();
            let timer = Timer::start("decode_jpeg");
            let pixels = self.reader.read_jpeg(input)?;
            timings.record(timer);
            pixels
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = pixels.width,
                height = pixels.height
            ).entered();
            self.validate_dimensions(pixels.width, pixels.height)?;
        }

        let luma = {
            let _span = tracing::info_span!("convert_luminance").entered();
            let timer = Timer::start("convert_luminance");
            let luma = self.converter.process(&pixels)?;
            timings.record(timer);
            luma
        };
        // Only the luminance buffer is needed from here on.
        drop(pixels);

        let symbols = {
            let _span = tracing::info_span!("scan_symbols").entered();
            let timer = Timer::start("scan_symbols");
            // Always scanned; backends can report `Other(..)` types.
            let found = self.scanner.scan(&luma)?;
            let total = found.len();
            let symbols: Vec<Symbol> = found
                .into_iter()
                .filter(|s| self.config.symbologies.is_enabled(&s.symbol_type))
                .collect();
            debug!("Kept {} of {} symbols", symbols.len(), total);
            timings.record(timer);
            symbols
        };

        info!(
            width = luma.width,
            height = luma.height,
            symbols = symbols.len(),
            "Scan complete"
        );
        Ok((symbols, timings))
    }

    /// Scans `input` and writes the text report to `output`.
    pub fn report(&self, input: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        let (symbols, mut timings) = self.scan_timed(input)?;
        self.write_timed(&symbols, output, &mut timings)?;
        Ok(timings)
    }

    pub fn scan_file<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<Symbol>> {
        self.scan_file_timed(input_path).map(|(symbols, _)| symbols)
    }

    #[instrument(skip(self, input_path))]
    pub fn scan_file_timed<P: AsRef<Path>>(
        &self,
        input_path: P,
    ) -> Result<(Vec<Symbol>, PipelineTimings)> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Scanning file");

        let mut timings = PipelineTimings::new();
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            let timer = Timer::start("read_input_file");
            let data = std::fs::read(input_path).map_err(|e| {
                ScanError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?;
            timings.record(timer);
            data
        };

        let (symbols, scan_timings) = self.scan_timed(&input_data)?;
        for step in scan_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        Ok((symbols, timings))
    }

    /// Scans the file at `input_path` and writes the text report to `output`.
    pub fn report_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let (symbols, mut timings) = self.scan_file_timed(input_path)?;
        self.write_timed(&symbols, output, &mut timings)?;
        Ok(timings)
    }

    fn write_timed(
        &self,
        symbols: &[Symbol],
        output: &mut dyn Write,
        timings: &mut PipelineTimings,
    ) -> Result<()> {
        let _span = tracing::info_span!("format_report").entered();
        let timer = Timer::start("format_report");
        write_report(symbols, output)?;
        timings.record(timer);
        Ok(())
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}

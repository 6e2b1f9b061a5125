use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use barscan::image_pipeline::{ScanConfig, ScanPipeline};
use barscan::logger;
use clap::Parser;

use tracing::{debug, info};

/// Scan a JPEG image for barcodes and QR codes
#[derive(Parser)]
#[command(name = "barscan")]
#[command(version)]
#[command(about = "Scan a JPEG image for barcodes and print one line per symbol", long_about = None)]
struct Args {
    /// Print a per-stage timing summary to stderr
    #[arg(long)]
    timings: bool,

    /// JPEG file to scan
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    let pipeline = ScanPipeline::new(ScanConfig::default());
    info!("Scanning {}", args.file.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let timings = pipeline
        .report_file(&args.file, &mut out)
        .with_context(|| format!("failed to scan {}", args.file.display()))?;

    debug!("Total pipeline time: {:?}", timings.total_duration());
    if args.timings {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        timings.write_summary(&mut err)?;
        err.flush()?;
    }

    Ok(())
}

//! Image processing pipeline module
//!
//! This module provides a structured approach to scanning JPEG images for
//! barcodes, with separate modules for JPEG reading, luminance conversion,
//! symbol detection, report formatting and orchestration.

pub mod jpeg;
pub mod luminance;
pub mod symbols;
pub mod report;
pub mod conversions;
pub mod common;

pub use common::{
    ScanError,
    Result,
    PipelineTimings,
};

pub use jpeg::{
    PixelBuffer,
    JpegImageReader,
    JpegDecoderReader,
};

pub use luminance::{
    LuminanceBuffer,
    LuminanceConverter,
};

pub use symbols::{
    Point,
    Symbol,
    SymbolType,
    SymbolScanner,
    ZedbarScanner,
    ScanConfig,
    ScanConfigBuilder,
    SymbologySet,
};

pub use report::{
    EncodedPayload,
    ReportLine,
    encode_payload,
    format_report,
    write_report,
};

pub use conversions::{
    ScanPipeline,
};

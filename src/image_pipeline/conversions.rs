//! Pipeline conversions module
//!
//! This module contains orchestration logic that runs a JPEG through
//! decoding, luminance conversion, symbol scanning and reporting.

mod jpeg_to_report;


pub use jpeg_to_report::ScanPipeline;

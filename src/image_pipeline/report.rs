//! Text report module
//!
//! Renders scanned symbols as one line of text each, with payloads base64
//! encoded so arbitrary bytes survive a line-oriented stream.

mod formatter;
pub mod payload;

pub use formatter::{ReportLine, format_report, write_report};
pub use payload::{EncodedPayload, encode_payload};

//! Symbol detection module
//!
//! This module wraps barcode/QR detection backends behind a common trait and
//! defines the symbol records and scan configuration they share.

mod scanner;
mod zedbar_scanner;
pub mod config;
pub mod types;

pub use scanner::SymbolScanner;
pub use zedbar_scanner::ZedbarScanner;
pub use config::{ScanConfig, ScanConfigBuilder, SymbologySet};
pub use types::{Point, Symbol, SymbolType};

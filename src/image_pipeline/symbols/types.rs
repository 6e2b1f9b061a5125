//! Detected symbol types

use std::fmt;

/// Barcode symbology reported by a scanner backend.
///
/// Names follow the zbar conventions so reports stay comparable with
/// zbarimg output. Backends can report families this enum has no tag for
/// through [`SymbolType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SymbolType {
    Ean2,
    Ean5,
    Ean8,
    Upce,
    Isbn10,
    Upca,
    Ean13,
    Isbn13,
    Composite,
    I25,
    Databar,
    DatabarExp,
    Codabar,
    Code39,
    QrCode,
    SqCode,
    Code93,
    Code128,
    Other(String),
}

impl SymbolType {
    /// Every symbology with a dedicated tag.
    pub const KNOWN: [SymbolType; 18] = [
        SymbolType::Ean2,
        SymbolType::Ean5,
        SymbolType::Ean8,
        SymbolType::Upce,
        SymbolType::Isbn10,
        SymbolType::Upca,
        SymbolType::Ean13,
        SymbolType::Isbn13,
        SymbolType::Composite,
        SymbolType::I25,
        SymbolType::Databar,
        SymbolType::DatabarExp,
        SymbolType::Codabar,
        SymbolType::Code39,
        SymbolType::QrCode,
        SymbolType::SqCode,
        SymbolType::Code93,
        SymbolType::Code128,
    ];

    pub fn name(&self) -> &str {
        match self {
            Self::Ean2 => "EAN-2",
            Self::Ean5 => "EAN-5",
            Self::Ean8 => "EAN-8",
            Self::Upce => "UPC-E",
            Self::Isbn10 => "ISBN-10",
            Self::Upca => "UPC-A",
            Self::Ean13 => "EAN-13",
            Self::Isbn13 => "ISBN-13",
            Self::Composite => "COMPOSITE",
            Self::I25 => "I2/5",
            Self::Databar => "DataBar",
            Self::DatabarExp => "DataBar-Exp",
            Self::Codabar => "Codabar",
            Self::Code39 => "CODE-39",
            Self::QrCode => "QR-Code",
            Self::SqCode => "SQ-Code",
            Self::Code93 => "CODE-93",
            Self::Code128 => "CODE-128",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer image coordinate of a symbol boundary vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A decoded symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Symbology the payload was decoded from
    pub symbol_type: SymbolType,
    /// Relative confidence; higher is better
    pub quality: i32,
    /// Boundary polygon, in scanner order. May be empty.
    pub points: Vec<Point>,
    /// Raw payload bytes. Not necessarily text.
    pub data: Vec<u8>,
}

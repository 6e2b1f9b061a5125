//! Symbol scanner implementation using the zedbar library.
//!
//! zedbar runs the zbar family of decoders over a grayscale image: the linear
//! symbologies (EAN/UPC, Code 39/93/128, Codabar, I2/5, DataBar) and the 2D
//! QR and SQ codes. Every symbology it can decode is enabled.

use tracing::debug;
use zedbar::{DecoderConfig, Image, Scanner};
use zedbar::SymbolType as ZedbarType;
use crate::image_pipeline::common::error::{Result, ScanError};
use crate::image_pipeline::luminance::LuminanceBuffer;
use crate::image_pipeline::symbols::scanner::SymbolScanner;
use crate::image_pipeline::symbols::types::{Point, Symbol, SymbolType};

/// Score of a symbol seen once. 2D symbols are decoded once per image and
/// always report it.
const BASE_QUALITY: i32 = 1;

/// Barcode and QR scanner backed by zedbar.
#[derive(Debug, Clone)]
pub struct ZedbarScanner {
    config: DecoderConfig,
}

impl ZedbarScanner {
    /// Scanner with every zedbar symbology enabled, including the UPC and
    /// ISBN labels that zedbar leaves off by default.
    pub fn new() -> Self {
        let config = [
            ZedbarType::Upca,
            ZedbarType::Upce,
            ZedbarType::Isbn10,
            ZedbarType::Isbn13,
        ]
        .into_iter()
        .fold(DecoderConfig::all(), DecoderConfig::enable_type);

        Self { config }
    }
}

impl Default for ZedbarScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolScanner for ZedbarScanner {
    fn scan(&self, image: &LuminanceBuffer) -> Result<Vec<Symbol>> {
        if image.width == 0 || image.height == 0 {
            return Ok(Vec::new());
        }

        let width = u32::try_from(image.width)
            .map_err(|_| ScanError::InvalidDimensions(image.width, image.height))?;
        let height = u32::try_from(image.height)
            .map_err(|_| ScanError::InvalidDimensions(image.width, image.height))?;

        let mut gray = Image::from_gray(&image.data, width, height).map_err(|e| {
            ScanError::ScannerError(format!(
                "{}x{} image with {} luminance bytes: {}",
                image.width,
                image.height,
                image.data.len(),
                e
            ))
        })?;

        // `Scanner` keeps per-pass state, so each call gets a fresh one.
        let mut scanner = Scanner::with_config(self.config.clone());
        let found = scanner.scan(&mut gray);
        debug!("zedbar decoded {} symbols", found.len());

        Ok(found
            .into_iter()
            .map(|symbol| {
                let symbol_type = symbol_type(symbol.symbol_type());
                let points: Vec<Point> =
                    symbol.points().iter().map(|p| Point::new(p.x, p.y)).collect();
                Symbol {
                    quality: quality(&symbol_type, points.len()),
                    symbol_type,
                    points,
                    // QR payloads come back charset-converted in `data()`;
                    // the bytes as encoded live in `raw_data()`.
                    data: symbol.raw_data().unwrap_or(symbol.data()).to_vec(),
                }
            })
            .collect())
    }
}

/// zbar's quality score for a decoded symbol.
///
/// zedbar keeps the score private. With position tracking on (the default)
/// each scanline that decodes a linear symbol bumps its score by one and
/// records one point, so the point count is the score.
fn quality(symbol_type: &SymbolType, point_count: usize) -> i32 {
    match symbol_type {
        SymbolType::QrCode | SymbolType::SqCode => BASE_QUALITY,
        _ => i32::try_from(point_count).unwrap_or(i32::MAX).max(BASE_QUALITY),
    }
}

fn symbol_type(kind: ZedbarType) -> SymbolType {
    match kind {
        ZedbarType::Ean2 => SymbolType::Ean2,
        ZedbarType::Ean5 => SymbolType::Ean5,
        ZedbarType::Ean8 => SymbolType::Ean8,
        ZedbarType::Upce => SymbolType::Upce,
        ZedbarType::Isbn10 => SymbolType::Isbn10,
        ZedbarType::Upca => SymbolType::Upca,
        ZedbarType::Ean13 => SymbolType::Ean13,
        ZedbarType::Isbn13 => SymbolType::Isbn13,
        ZedbarType::Composite => SymbolType::Composite,
        ZedbarType::I25 => SymbolType::I25,
        ZedbarType::Databar => SymbolType::Databar,
        ZedbarType::DatabarExp => SymbolType::DatabarExp,
        ZedbarType::Codabar => SymbolType::Codabar,
        ZedbarType::Code39 => SymbolType::Code39,
        ZedbarType::QrCode => SymbolType::QrCode,
        ZedbarType::SqCode => SymbolType::SqCode,
        ZedbarType::Code93 => SymbolType::Code93,
        ZedbarType::Code128 => SymbolType::Code128,
        other => SymbolType::Other(other.to_string()),
    }
}

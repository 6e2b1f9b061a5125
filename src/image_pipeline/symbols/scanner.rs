use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::luminance::LuminanceBuffer;
use crate::image_pipeline::symbols::types::Symbol;

pub trait SymbolScanner {
    /// Symbols found in `image`, in the backend's reporting order.
    fn scan(&self, image: &LuminanceBuffer) -> Result<Vec<Symbol>>;
}

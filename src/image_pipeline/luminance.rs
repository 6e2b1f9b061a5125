//! Luminance module for converting interleaved RGB pixels to 8-bit grayscale

pub mod cpu_luminance;
pub mod types;

pub use cpu_luminance::{LuminanceConverter, luma};
pub use types::LuminanceBuffer;

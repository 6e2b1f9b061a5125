//! JPEG image reading module
//!
//! This module turns JPEG file bytes into an interleaved pixel buffer.

mod reader;
mod jpeg_decoder_reader;
pub mod types;

pub use reader::JpegImageReader;
pub use jpeg_decoder_reader::JpegDecoderReader;
pub use types::PixelBuffer;

//! JPEG reader implementation using the jpeg-decoder library.
//!
//! This module decodes baseline and progressive JPEG files into interleaved
//! 8-bit samples. The header is parsed separately from the entropy-coded
//! data so that "not a JPEG" and "broken JPEG" surface as different errors.

use tracing::debug;
use jpeg_decoder::{Decoder, PixelFormat};
use crate::image_pipeline::common::error::{Result, ScanError};
use crate::image_pipeline::jpeg::types::PixelBuffer;
use crate::image_pipeline::jpeg::reader::JpegImageReader;

/// JPEG reader that uses the jpeg-decoder library for decoding.
///
/// Grayscale files decode to one channel, colour files to three and
/// Adobe CMYK files to four. Only the three-channel layout is accepted by
/// the luminance stage; the channel count is reported as-is so the
/// rejection happens there with a precise error.
pub struct JpegDecoderReader;

impl JpegImageReader for JpegDecoderReader {
    /// Reads and decodes JPEG image data from a byte array.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the JPEG file
    ///
    /// # Returns
    ///
    /// * `Ok(PixelBuffer)` - Decoded interleaved pixels with dimensions
    /// * `Err(ScanError::HeaderError)` - The bytes do not start a valid JPEG stream
    /// * `Err(ScanError::DecodeError)` - The header parsed but the image data did not
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use barscan::image_pipeline::{JpegDecoderReader, JpegImageReader};
    ///
    /// let reader = JpegDecoderReader;
    /// let jpeg_bytes = std::fs::read("image.jpg").unwrap();
    /// let pixels = reader.read_jpeg(&jpeg_bytes).unwrap();
    /// ```
    fn read_jpeg(&self, data: &[u8]) -> Result<PixelBuffer> {
        debug!("Decoding JPEG image, {} bytes", data.len());

        let mut decoder = Decoder::new(data);

        decoder
            .read_info()
            .map_err(|e| ScanError::HeaderError(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| ScanError::HeaderError("missing frame header".to_string()))?;

        let width = info.width as usize;
        let height = info.height as usize;
        let channels = channel_count(info.pixel_format);

        debug!(
            "JPEG header: {}x{}, {:?}, {:?}",
            width, height, info.pixel_format, info.coding_process
        );

        let pixels = decoder
            .decode()
            .map_err(|e| ScanError::DecodeError(e.to_string()))?;

        debug!("Decoded {} bytes of pixel data", pixels.len());

        Ok(PixelBuffer {
            width,
            height,
            channels,
            data: pixels,
        })
    }
}

// 16-bit grayscale reports two bytes per pixel and is rejected downstream
// like any other non-RGB layout.
fn channel_count(format: PixelFormat) -> usize {
    format.pixel_bytes()
}

use tracing::debug;
use crate::image_pipeline::common::error::{Result, ScanError};
use crate::image_pipeline::jpeg::PixelBuffer;
use crate::image_pipeline::luminance::LuminanceBuffer;

/// Fixed-point luma weights, scaled by 256.
const WEIGHT_R: u32 = 66;
const WEIGHT_G: u32 = 129;
const WEIGHT_B: u32 = 25;
const ROUNDING: u32 = 128;
const BLACK_OFFSET: u32 = 16;

/// Number of interleaved components the converter accepts.
pub const RGB_CHANNELS: usize = 3;

/// Luma of one RGB pixel.
///
/// The sum is stored into a byte without saturation, so a result above 255
/// would wrap. With 8-bit inputs the maximum is 235.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32 + ROUNDING;
    ((weighted >> 8) + BLACK_OFFSET) as u8
}

pub struct LuminanceConverter;

impl LuminanceConverter {
    pub fn new() -> Self {
        Self
    }

    /// Converts an interleaved RGB buffer scanline by scanline.
    ///
    /// The buffer must hold exactly `width * height * 3` bytes. Every one of
    /// the `height` scanlines must be present in full. The first missing or
    /// short row aborts the conversion with [`ScanError::ScanlineError`];
    /// rows are never skipped. Trailing bytes past the last row are rejected
    /// with [`ScanError::BufferSizeMismatch`].
    pub fn process(&self, pixels: &PixelBuffer) -> Result<LuminanceBuffer> {
        if pixels.channels != RGB_CHANNELS {
            return Err(ScanError::UnsupportedChannels(pixels.channels));
        }

        let width = pixels.width;
        let height = pixels.height;
        let stride = pixels.row_stride();
        let expected = stride
            .checked_mul(height)
            .ok_or(ScanError::InvalidDimensions(width, height))?;
        if pixels.data.len() > expected {
            return Err(ScanError::BufferSizeMismatch {
                expected,
                actual: pixels.data.len(),
            });
        }
        debug!("Converting {}x{} RGB image to luminance", width, height);

        let mut data = Vec::with_capacity(width * height);
        let mut scanlines = pixels.scanlines();

        for row in 0..height {
            let scanline = scanlines.next().unwrap_or(&[]);
            if scanline.len() != stride {
                return Err(ScanError::ScanlineError {
                    row,
                    expected: stride,
                    actual: scanline.len(),
                });
            }

            data.extend(
                scanline
                    .chunks_exact(RGB_CHANNELS)
                    .map(|px| luma(px[0], px[1], px[2])),
            );
        }

        Ok(LuminanceBuffer {
            width,
            height,
            data,
        })
    }
}

impl Default for LuminanceConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(r: u32, g: u32, b: u32) -> u8 {
        ((((66 * r + 129 * g + 25 * b + 128) >> 8) + 16) % 256) as u8
    }

    fn rgb(width: usize, height: usize, data: Vec<u8>) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            channels: 3,
            data,
        }
    }

    #[test]
    fn test_luma_matches_formula_for_every_triple() {
        for r in 0..=255u32 {
            for g in (0..=255u32).step_by(3) {
                for b in (0..=255u32).step_by(5) {
                    assert_eq!(
                        luma(r as u8, g as u8, b as u8),
                        reference(r, g, b),
                        "rgb({r},{g},{b})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 16);
        assert_eq!(luma(255, 255, 255), 235);
        assert_eq!(luma(255, 0, 0), 82);
        assert_eq!(luma(0, 255, 0), 144);
        assert_eq!(luma(0, 0, 255), 41);
    }

    #[test]
    fn test_process_preserves_layout() {
        let pixels = rgb(
            2,
            2,
            vec![
                0, 0, 0, 255, 255, 255, //
                255, 0, 0, 0, 0, 255,
            ],
        );

        let luma = LuminanceConverter::new().process(&pixels).unwrap();

        assert_eq!(luma.width, 2);
        assert_eq!(luma.height, 2);
        assert_eq!(luma.data, vec![16, 235, 82, 41]);
        assert_eq!(luma.data[luma.width], 82);
    }

    #[test]
    fn test_process_is_pure() {
        let pixels = rgb(3, 1, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
        let converter = LuminanceConverter::new();

        let first = converter.process(&pixels).unwrap();
        let second = converter.process(&pixels).unwrap();

        assert_eq!(first, second);
        assert_eq!(pixels.data, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn test_rejects_non_rgb_channel_counts() {
        for channels in [1usize, 2, 4] {
            let pixels = PixelBuffer {
                width: 1,
                height: 1,
                channels,
                data: vec![0; channels],
            };
            let result = LuminanceConverter::new().process(&pixels);
            assert!(matches!(result, Err(ScanError::UnsupportedChannels(c)) if c == channels));
        }
    }

    #[test]
    fn test_short_scanline_is_fatal() {
        let pixels = rgb(2, 2, vec![0; 9]);
        let result = LuminanceConverter::new().process(&pixels);
        assert!(matches!(
            result,
            Err(ScanError::ScanlineError { row: 1, expected: 6, actual: 3 })
        ));
    }

    #[test]
    fn test_missing_scanline_is_fatal() {
        let pixels = rgb(1, 3, vec![0; 3]);
        let result = LuminanceConverter::new().process(&pixels);
        assert!(matches!(
            result,
            Err(ScanError::ScanlineError { row: 1, expected: 3, actual: 0 })
        ));
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let pixels = rgb(2, 1, vec![0; 7]);
        let result = LuminanceConverter::new().process(&pixels);
        assert!(matches!(
            result,
            Err(ScanError::BufferSizeMismatch { expected: 6, actual: 7 })
        ));
    }

    #[test]
    fn test_data_for_an_empty_image_is_rejected() {
        let pixels = rgb(0, 0, vec![1, 2, 3]);
        let result = LuminanceConverter::new().process(&pixels);
        assert!(matches!(
            result,
            Err(ScanError::BufferSizeMismatch { expected: 0, actual: 3 })
        ));
    }

    #[test]
    fn test_empty_image() {
        let pixels = rgb(0, 0, Vec::new());
        let luma = LuminanceConverter::new().process(&pixels).unwrap();
        assert!(luma.data.is_empty());
    }
}

//! Types for luminance conversion

/// Single-channel 8-bit image ready for symbol scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// One byte per pixel, row-major
    pub data: Vec<u8>,
}

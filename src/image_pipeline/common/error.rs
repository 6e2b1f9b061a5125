use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Not a valid JPEG header: {0}")]
    HeaderError(String),

    #[error("Failed to decode JPEG image: {0}")]
    DecodeError(String),

    #[error("Failed to read scanline {row}: expected {expected} bytes, got {actual}")]
    ScanlineError {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch {
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported channel count: {0} (expected 3 interleaved RGB channels)")]
    UnsupportedChannels(usize),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Symbol scanner failed: {0}")]
    ScannerError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;

//! Decoded pixel data types

/// Interleaved pixel data as produced by the JPEG decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved components per pixel (3 for RGB)
    pub channels: usize,
    /// Row-major pixel data, `channels` bytes per pixel
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Number of bytes in one full scanline.
    pub fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// Yields one row of interleaved bytes at a time, top to bottom.
    ///
    /// The final chunk is short when `data` does not hold a whole number of
    /// rows; callers are expected to check each scanline's length.
    pub fn scanlines(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.row_stride().max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanlines_split_rows() {
        let buffer = PixelBuffer {
            width: 2,
            height: 2,
            channels: 3,
            data: (0u8..12).collect(),
        };

        let rows: Vec<&[u8]> = buffer.scanlines().collect();
        assert_eq!(buffer.row_stride(), 6);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[0, 1, 2, 3, 4, 5]);
        assert_eq!(rows[1], &[6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_truncated_buffer_has_short_last_scanline() {
        let buffer = PixelBuffer {
            width: 2,
            height: 2,
            channels: 3,
            data: vec![0u8; 8],
        };

        let rows: Vec<&[u8]> = buffer.scanlines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 2);
    }
}

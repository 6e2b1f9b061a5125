use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::jpeg::types::PixelBuffer;

pub trait JpegImageReader {
    fn read_jpeg(&self, data: &[u8]) -> Result<PixelBuffer>;
}

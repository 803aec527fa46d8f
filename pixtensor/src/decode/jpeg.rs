//! JPEG adapter

use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;
use image::DynamicImage;

use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// JPEG carries no alpha; the RGBA conversion fills the channel with 255.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let decoder = JpegDecoder::new(Cursor::new(bytes)).map_err(PixelError::decode)?;
    let img = DynamicImage::from_decoder(decoder).map_err(PixelError::decode)?;
    PixelTensor::from_rgba_image(img.into_rgba8())
}

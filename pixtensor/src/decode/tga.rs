//! TGA adapter

use std::io::Cursor;

use image::codecs::tga::TgaDecoder;
use image::DynamicImage;

use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// TGA has no magic bytes, so this adapter is only ever reached through a
/// MIME hint.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let decoder = TgaDecoder::new(Cursor::new(bytes)).map_err(PixelError::decode)?;
    let img = DynamicImage::from_decoder(decoder).map_err(PixelError::decode)?;
    PixelTensor::from_rgba_image(img.into_rgba8())
}

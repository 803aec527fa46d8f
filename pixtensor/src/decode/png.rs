//! PNG adapter

use std::io::Cursor;

use image::codecs::png::PngDecoder;
use image::DynamicImage;

use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// PNG decodes straight to RGBA scanlines; wrapping them is the whole job.
/// Opaque color types (RGB, grayscale) pick up a 255 alpha channel in the
/// RGBA conversion.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let decoder = PngDecoder::new(Cursor::new(bytes)).map_err(PixelError::decode)?;
    let img = DynamicImage::from_decoder(decoder).map_err(PixelError::decode)?;
    PixelTensor::from_rgba_image(img.into_rgba8())
}

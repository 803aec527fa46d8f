//! BMP adapter

use std::io::Cursor;

use image::codecs::bmp::BmpDecoder;
use image::DynamicImage;

use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// The codec resolves BMP's stored B,G,R[,A] order to RGB(A) while
/// decoding. Files without an alpha indicator (no alpha flag, not 32 bpp)
/// come out as plain RGB, so the RGBA conversion writes an all-opaque
/// alpha plane for them.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let decoder = BmpDecoder::new(Cursor::new(bytes)).map_err(PixelError::decode)?;
    let img = DynamicImage::from_decoder(decoder).map_err(PixelError::decode)?;
    PixelTensor::from_rgba_image(img.into_rgba8())
}

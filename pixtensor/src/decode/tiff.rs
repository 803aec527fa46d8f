//! TIFF adapter

use std::io::Cursor;

use image::codecs::tiff::TiffDecoder;
use image::DynamicImage;

use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// Multi-page TIFFs are decoded as their first page only; later IFDs are
/// never consulted. This is a documented limitation, not an oversight.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let decoder = TiffDecoder::new(Cursor::new(bytes)).map_err(PixelError::decode)?;
    let img = DynamicImage::from_decoder(decoder).map_err(PixelError::decode)?;
    PixelTensor::from_rgba_image(img.into_rgba8())
}

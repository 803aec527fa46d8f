//! PSD adapter

use psd::Psd;

use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// Only the flattened composite image is used; the document's layer
/// structure is ignored.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let document = Psd::from_bytes(bytes).map_err(PixelError::decode)?;
    let data = document.rgba();
    PixelTensor::from_scanlines(document.width() as usize, document.height() as usize, data)
}

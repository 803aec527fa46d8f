//! Canonical RGBA pixel tensor

use image::RgbaImage;
use ndarray::{Array3, Array4, ShapeBuilder};

use crate::error::PixelError;

/// Trailing axis length, always R,G,B,A.
pub const CHANNELS: usize = 4;

/// The canonical output of every decode: one contiguous 8-bit buffer
/// viewed with axis order `(width, height, channel)`, or
/// `(frame, width, height, channel)` for multi-frame GIFs.
///
/// Width comes before height. This is deliberate and load-bearing: every
/// adapter emits the same order, and downstream consumers index tensors
/// as `[x, y, c]`. The decoders themselves produce row-major scanlines
/// (height outer), so the width-major view is expressed through strides
/// rather than by shuffling bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelTensor {
    /// Single image, shape `(width, height, 4)`.
    Static(Array3<u8>),
    /// Animation, shape `(frames, width, height, 4)`. Always >= 2 frames;
    /// single-frame sources decode to `Static`.
    Animated(Array4<u8>),
}

impl PixelTensor {
    /// Wrap a decoded RGBA image without copying its buffer.
    pub(crate) fn from_rgba_image(img: RgbaImage) -> Result<Self, PixelError> {
        let (width, height) = img.dimensions();
        Self::from_scanlines(width as usize, height as usize, img.into_raw())
    }

    /// Wrap a row-major RGBA scanline buffer in a `(width, height, 4)` view.
    pub(crate) fn from_scanlines(
        width: usize,
        height: usize,
        data: Vec<u8>,
    ) -> Result<Self, PixelError> {
        let shape = (width, height, CHANNELS).strides((CHANNELS, width * CHANNELS, 1));
        Array3::from_shape_vec(shape, data)
            .map(PixelTensor::Static)
            .map_err(|_| PixelError::Decode("pixel buffer does not match reported dimensions".into()))
    }

    /// Wrap `frames` concatenated row-major RGBA buffers in a
    /// `(frames, width, height, 4)` view.
    pub(crate) fn from_frame_scanlines(
        frames: usize,
        width: usize,
        height: usize,
        data: Vec<u8>,
    ) -> Result<Self, PixelError> {
        let frame_len = width * height * CHANNELS;
        let shape = (frames, width, height, CHANNELS)
            .strides((frame_len, CHANNELS, width * CHANNELS, 1));
        Array4::from_shape_vec(shape, data)
            .map(PixelTensor::Animated)
            .map_err(|_| PixelError::Decode("frame buffer does not match reported dimensions".into()))
    }

    pub fn width(&self) -> usize {
        match self {
            PixelTensor::Static(a) => a.shape()[0],
            PixelTensor::Animated(a) => a.shape()[1],
        }
    }

    pub fn height(&self) -> usize {
        match self {
            PixelTensor::Static(a) => a.shape()[1],
            PixelTensor::Animated(a) => a.shape()[2],
        }
    }

    /// Number of frames; 1 for static images.
    pub fn frame_count(&self) -> usize {
        match self {
            PixelTensor::Static(_) => 1,
            PixelTensor::Animated(a) => a.shape()[0],
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, PixelTensor::Animated(_))
    }

    /// RGBA value at `(x, y)` of the given frame.
    pub fn pixel(&self, frame: usize, x: usize, y: usize) -> [u8; 4] {
        match self {
            PixelTensor::Static(a) => {
                [a[[x, y, 0]], a[[x, y, 1]], a[[x, y, 2]], a[[x, y, 3]]]
            }
            PixelTensor::Animated(a) => [
                a[[frame, x, y, 0]],
                a[[frame, x, y, 1]],
                a[[frame, x, y, 2]],
                a[[frame, x, y, 3]],
            ],
        }
    }
}

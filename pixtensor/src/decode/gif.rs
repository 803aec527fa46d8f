//! GIF adapter

use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageDecoder};

use crate::error::PixelError;
use crate::tensor::{PixelTensor, CHANNELS};

/// Frames are composited strictly in ascending index order: a frame may be
/// a delta blit, and its canvas depends on everything that came before it.
/// `collect_frames` performs that compositing and hands back full-canvas
/// RGBA frames.
///
/// A single-frame file decodes to a static tensor; anything longer gets a
/// leading frame axis, with one buffer for all frames allocated up front.
pub(super) fn decode(bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(PixelError::decode)?;
    let (width, height) = decoder.dimensions();
    let (width, height) = (width as usize, height as usize);
    let mut frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(PixelError::decode)?;

    match frames.len() {
        0 => Err(PixelError::Decode("gif contains no frames".into())),
        1 => PixelTensor::from_rgba_image(frames.remove(0).into_buffer()),
        count => {
            let mut data = Vec::with_capacity(count * width * height * CHANNELS);
            for (index, frame) in frames.into_iter().enumerate() {
                let buffer = frame.into_buffer();
                if buffer.dimensions() != (width as u32, height as u32) {
                    return Err(PixelError::Decode(format!(
                        "gif frame {index} does not match the {width}x{height} canvas"
                    )));
                }
                data.extend_from_slice(buffer.as_raw());
            }
            PixelTensor::from_frame_scanlines(count, width, height, data)
        }
    }
}

//! Error taxonomy for acquisition and decoding

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixelError {
    /// File/network read failed or the data URI was malformed.
    /// Raised before any codec sees the bytes.
    #[error("failed to acquire image bytes: {0}")]
    Acquisition(String),

    /// No MIME hint was available and content sniffing was inconclusive.
    #[error("invalid file type: no MIME hint and unrecognized content")]
    MissingType,

    /// The hint named a MIME type outside the supported set.
    /// Carries the literal hint string.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The selected codec rejected the bytes. Carries the codec's diagnostic.
    #[error("failed to decode image: {0}")]
    Decode(String),
}

impl PixelError {
    pub(crate) fn decode(err: impl std::fmt::Display) -> Self {
        PixelError::Decode(err.to_string())
    }

    pub(crate) fn acquisition(err: impl std::fmt::Display) -> Self {
        PixelError::Acquisition(err.to_string())
    }
}

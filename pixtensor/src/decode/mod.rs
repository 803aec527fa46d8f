//! Format dispatch and the seven per-format decode adapters

mod bmp;
mod gif;
mod jpeg;
mod png;
mod psd;
mod tga;
mod tiff;

use crate::error::PixelError;
use crate::format::PixelFormat;
use crate::sniff::{FormatSniffer, MagicSniffer};
use crate::tensor::PixelTensor;

/// Decode encoded image bytes into the canonical RGBA tensor.
///
/// The content is sniffed first; a recognized signature wins over the
/// hint. Only when sniffing is inconclusive does the MIME hint decide.
/// With neither, the call fails with `MissingType`.
pub fn decode(hint: Option<&str>, bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    decode_with_sniffer(&MagicSniffer, hint, bytes)
}

/// Same as [`decode`], with a caller-supplied sniffer.
pub fn decode_with_sniffer(
    sniffer: &dyn FormatSniffer,
    hint: Option<&str>,
    bytes: &[u8],
) -> Result<PixelTensor, PixelError> {
    let format = match sniffer.sniff(bytes) {
        Some(format) => {
            if let Some(hint) = hint {
                if PixelFormat::from_mime(hint) != Some(format) {
                    log::debug!("sniffed {format:?} overrides hint {hint:?}");
                }
            }
            format
        }
        None => resolve_hint(hint)?,
    };
    log::debug!("decoding {} bytes as {format:?}", bytes.len());
    decode_format(format, bytes)
}

/// Decode bytes known to be of `format`, bypassing sniffing and hint
/// resolution.
pub fn decode_format(format: PixelFormat, bytes: &[u8]) -> Result<PixelTensor, PixelError> {
    match format {
        PixelFormat::Png => png::decode(bytes),
        PixelFormat::Jpeg => jpeg::decode(bytes),
        PixelFormat::Gif => gif::decode(bytes),
        PixelFormat::Bmp => bmp::decode(bytes),
        PixelFormat::Tga => tga::decode(bytes),
        PixelFormat::Tiff => tiff::decode(bytes),
        PixelFormat::Psd => psd::decode(bytes),
    }
}

fn resolve_hint(hint: Option<&str>) -> Result<PixelFormat, PixelError> {
    match hint {
        None => Err(PixelError::MissingType),
        Some(hint) if hint.trim().is_empty() => Err(PixelError::MissingType),
        Some(hint) => {
            PixelFormat::from_mime(hint).ok_or_else(|| PixelError::UnsupportedFormat(hint.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inconclusive;

    impl FormatSniffer for Inconclusive {
        fn sniff(&self, _bytes: &[u8]) -> Option<PixelFormat> {
            None
        }
    }

    struct Fixed(PixelFormat);

    impl FormatSniffer for Fixed {
        fn sniff(&self, _bytes: &[u8]) -> Option<PixelFormat> {
            Some(self.0)
        }
    }

    #[test]
    fn missing_hint_with_inconclusive_sniff_fails_closed() {
        let err = decode_with_sniffer(&Inconclusive, None, b"garbage").unwrap_err();
        assert!(matches!(err, PixelError::MissingType));

        let err = decode_with_sniffer(&Inconclusive, Some("  "), b"garbage").unwrap_err();
        assert!(matches!(err, PixelError::MissingType));
    }

    #[test]
    fn unrecognized_hint_names_the_offending_string() {
        let err = decode_with_sniffer(&Inconclusive, Some("image/webp"), b"garbage").unwrap_err();
        match err {
            PixelError::UnsupportedFormat(mime) => assert_eq!(mime, "image/webp"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn sniffed_format_wins_over_contradicting_hint() {
        // A stub that insists the bytes are PNG; the JPEG hint must lose,
        // so the PNG adapter runs and rejects the garbage bytes.
        let err = decode_with_sniffer(&Fixed(PixelFormat::Png), Some("image/jpeg"), b"garbage")
            .unwrap_err();
        assert!(matches!(err, PixelError::Decode(_)));
    }

    #[test]
    fn malformed_bytes_become_decode_errors_for_every_format() {
        let garbage = [0xABu8; 32];
        for format in [
            PixelFormat::Png,
            PixelFormat::Jpeg,
            PixelFormat::Gif,
            PixelFormat::Bmp,
            PixelFormat::Tga,
            PixelFormat::Tiff,
            PixelFormat::Psd,
        ] {
            let err = decode_format(format, &garbage).unwrap_err();
            assert!(
                matches!(err, PixelError::Decode(_)),
                "{format:?} should reject garbage with a decode error, got {err:?}"
            );
        }
    }
}

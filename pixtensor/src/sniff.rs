//! Content sniffing via magic-byte signatures

use crate::format::PixelFormat;

/// Identifies the true encoded format from the leading bytes of a buffer,
/// independent of any caller-supplied hint.
///
/// The trait seam exists so tests can substitute a deterministic stub for
/// the magic-byte implementation.
pub trait FormatSniffer {
    /// Inspect a bounded prefix of `bytes`. Returns `None` when no known
    /// signature matches; that is not an error, it just means the hint
    /// becomes authoritative.
    fn sniff(&self, bytes: &[u8]) -> Option<PixelFormat>;
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];
const TIFF_LE_SIGNATURE: &[u8] = &[b'I', b'I', 0x2A, 0x00];
const TIFF_BE_SIGNATURE: &[u8] = &[b'M', b'M', 0x00, 0x2A];

/// Default sniffer backed by the fixed signature table.
///
/// TGA carries no signature and is never sniffed; TGA inputs rely on the
/// MIME hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct MagicSniffer;

impl FormatSniffer for MagicSniffer {
    fn sniff(&self, bytes: &[u8]) -> Option<PixelFormat> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(PixelFormat::Png)
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            Some(PixelFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(PixelFormat::Gif)
        } else if bytes.starts_with(TIFF_LE_SIGNATURE) || bytes.starts_with(TIFF_BE_SIGNATURE) {
            Some(PixelFormat::Tiff)
        } else if bytes.starts_with(b"8BPS") {
            Some(PixelFormat::Psd)
        } else if bytes.starts_with(b"BM") {
            Some(PixelFormat::Bmp)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_signatures() {
        let cases: [(&[u8], PixelFormat); 8] = [
            (&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00], PixelFormat::Png),
            (&[0xFF, 0xD8, 0xFF, 0xE0], PixelFormat::Jpeg),
            (b"GIF87a\x01\x00", PixelFormat::Gif),
            (b"GIF89a\x01\x00", PixelFormat::Gif),
            (b"II\x2A\x00\x08", PixelFormat::Tiff),
            (b"MM\x00\x2A\x08", PixelFormat::Tiff),
            (b"8BPS\x00\x01", PixelFormat::Psd),
            (b"BM\x3A\x00", PixelFormat::Bmp),
        ];
        for (bytes, expected) in cases {
            assert_eq!(
                MagicSniffer.sniff(bytes),
                Some(expected),
                "signature for {expected:?} should be recognized"
            );
        }
    }

    #[test]
    fn unknown_bytes_sniff_to_none() {
        assert_eq!(MagicSniffer.sniff(b"not an image"), None);
        assert_eq!(MagicSniffer.sniff(&[]), None);
        // truncated PNG signature
        assert_eq!(MagicSniffer.sniff(&[0x89, b'P', b'N']), None);
    }
}

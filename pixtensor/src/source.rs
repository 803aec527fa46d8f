//! Input acquisition: raw bytes, data URIs, URLs, and file paths

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::decode::decode;
use crate::error::PixelError;
use crate::tensor::PixelTensor;

/// Resolve `input` to bytes plus a MIME hint, then decode.
///
/// The input kind is detected from the string itself: a `data:` URI, an
/// `http(s)://` URL, or otherwise a local file path. An explicit `hint`
/// always takes priority over the transport-derived one (data-URI media
/// type, Content-Type header, or file extension).
///
/// A missing hint is not fatal here: content sniffing may still identify
/// the format. Decoding raw in-memory bytes needs no acquisition step;
/// call [`decode`](crate::decode::decode) directly for that.
pub fn get_pixels(input: &str, hint: Option<&str>) -> Result<PixelTensor, PixelError> {
    let (bytes, derived) = if input.starts_with("data:") {
        from_data_uri(input)?
    } else if input.starts_with("http://") || input.starts_with("https://") {
        from_url(input)?
    } else {
        from_path(Path::new(input))?
    };

    let hint = hint.filter(|h| !h.trim().is_empty()).map(str::to_owned);
    decode(hint.or(derived).as_deref(), &bytes)
}

/// Parse a `data:[<mediatype>][;base64],<payload>` URI.
///
/// Any parse failure surfaces as an acquisition error before the decode
/// pipeline sees a single byte.
fn from_data_uri(uri: &str) -> Result<(Vec<u8>, Option<String>), PixelError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| PixelError::Acquisition("not a data URI".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| PixelError::Acquisition("malformed data URI: missing comma".into()))?;

    let mut mime = None;
    let mut is_base64 = false;
    for (index, part) in meta.split(';').enumerate() {
        if part.eq_ignore_ascii_case("base64") {
            is_base64 = true;
        } else if index == 0 && !part.is_empty() {
            mime = Some(part.to_owned());
        }
    }

    let bytes = if is_base64 {
        BASE64
            .decode(payload)
            .map_err(|e| PixelError::Acquisition(format!("malformed data URI payload: {e}")))?
    } else {
        payload.as_bytes().to_vec()
    };

    log::debug!("parsed data URI: {} bytes, media type {mime:?}", bytes.len());
    Ok((bytes, mime))
}

/// Fetch bytes over HTTP(S); the Content-Type header becomes the hint.
fn from_url(url: &str) -> Result<(Vec<u8>, Option<String>), PixelError> {
    log::debug!("fetching {url}");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(PixelError::acquisition)?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let bytes = response.bytes().map_err(PixelError::acquisition)?;
    Ok((bytes.to_vec(), content_type))
}

/// Read a local file; the extension's MIME type becomes the hint.
fn from_path(path: &Path) -> Result<(Vec<u8>, Option<String>), PixelError> {
    log::debug!("reading {}", path.display());
    let bytes = std::fs::read(path)
        .map_err(|e| PixelError::Acquisition(format!("{}: {e}", path.display())))?;
    let mime = mime_guess::from_path(path).first_raw().map(str::to_owned);
    Ok((bytes, mime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_parses_media_type_and_base64_payload() {
        let (bytes, mime) = from_data_uri("data:image/png;base64,AAEC").unwrap();
        assert_eq!(bytes, vec![0, 1, 2]);
        assert_eq!(mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn data_uri_without_base64_flag_is_taken_literally() {
        let (bytes, mime) = from_data_uri("data:,hello").unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(mime, None);
    }

    #[test]
    fn malformed_data_uri_is_an_acquisition_error() {
        assert!(matches!(
            from_data_uri("data:image/png;base64"),
            Err(PixelError::Acquisition(_))
        ));
        assert!(matches!(
            from_data_uri("data:image/png;base64,not-base64!!!"),
            Err(PixelError::Acquisition(_))
        ));
    }

    #[test]
    fn missing_file_is_an_acquisition_error() {
        let err = get_pixels("/definitely/not/here.png", None).unwrap_err();
        assert!(matches!(err, PixelError::Acquisition(_)));
    }
}

//! The closed set of supported image formats

/// Every format the decoder knows how to handle. The set is closed:
/// dispatch is an exhaustive match over this enum, so adding a variant
/// forces every call site to pick it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tga,
    Tiff,
    Psd,
}

impl PixelFormat {
    /// Resolve a MIME-type hint to a format.
    ///
    /// Matching is case-insensitive and tolerant of the alias spellings
    /// seen in the wild (`image/jpg`, `image/x-targa`, ...). Content-type
    /// parameters (`; charset=...`) are ignored. Returns `None` for
    /// anything outside the supported set.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Some(PixelFormat::Png),
            "image/jpg" | "image/jpeg" => Some(PixelFormat::Jpeg),
            "image/gif" => Some(PixelFormat::Gif),
            "image/bmp" => Some(PixelFormat::Bmp),
            "image/x-targa" | "image/targa" | "image/x-tga" | "image/tga" => {
                Some(PixelFormat::Tga)
            }
            "image/tiff" => Some(PixelFormat::Tiff),
            "image/vnd.adobe.photoshop" => Some(PixelFormat::Psd),
            _ => None,
        }
    }

    /// Canonical MIME type for this format.
    pub fn mime(&self) -> &'static str {
        match self {
            PixelFormat::Png => "image/png",
            PixelFormat::Jpeg => "image/jpeg",
            PixelFormat::Gif => "image/gif",
            PixelFormat::Bmp => "image/bmp",
            PixelFormat::Tga => "image/tga",
            PixelFormat::Tiff => "image/tiff",
            PixelFormat::Psd => "image/vnd.adobe.photoshop",
        }
    }
}

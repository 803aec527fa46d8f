pub mod decode;
pub mod error;
pub mod format;
pub mod sniff;
pub mod source;
pub mod tensor;

// Re-export commonly used types
pub use decode::{decode, decode_format, decode_with_sniffer};
pub use error::PixelError;
pub use format::PixelFormat;
pub use sniff::{FormatSniffer, MagicSniffer};
pub use source::get_pixels;
pub use tensor::PixelTensor;

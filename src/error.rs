use std::path::PathBuf;
use thiserror::Error;

/// The possible errors when converting cartridge data to and from a `.p8.png` image.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Error)]
pub enum CartError {
    /// The input path does not exist. Shows the path.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The input extension is not `.txt` or `.js`. Shows the encountered extension (may be empty).
    #[error("Unsupported extension {0:?}: expected .txt or .js")]
    UnsupportedExtension(String),
    /// A script source has no `var _cartdat =` assignment.
    #[error("Could not find the _cartdat assignment in script source")]
    DataMarkerNotFound,
    /// A value above `255` was given to the strict canvas builder. Shows its position and value.
    #[error("Value {value} at position {index} does not fit in a byte")]
    ByteOutOfRange { index: usize, value: u64 },
    /// The image read back is not `160`x`205`. Shows the encountered width and height.
    #[error("Expected a 160x205 image, detected {0}x{1}")]
    UnexpectedDimensions(u32, u32),
    /// The image read back is not 8bit RGBA. Shows the encountered color type and bit depth.
    #[error("Expected an 8bit RGBA image, detected {0:?} with {1:?}")]
    UnexpectedColorType(png::ColorType, png::BitDepth),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("PNG encode error: {0}")]
    PngEncoding(#[from] png::EncodingError),
    #[error("PNG decode error: {0}")]
    PngDecoding(#[from] png::DecodingError),
}

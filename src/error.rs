use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding.
///
/// Every error is fatal to the decode session that produced it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("not a BMP file (bad signature)")]
    NotABitmap,

    #[error("invalid BMP header: {0}")]
    BadHeader(String),

    #[error("unsupported BMP bit depth {0} (only 8 and 24 are supported)")]
    BadDepth(u16),

    #[error("BMP planes field is {0}, expected 1")]
    BadPlanes(u16),

    #[error("compressed BMP not supported (compression {0})")]
    CompressedNotSupported(u32),

    #[error("invalid BMP colormap: {0}")]
    BadColormap(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BmpError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            BmpError::UnexpectedEof
        } else {
            BmpError::Io(e)
        }
    }
}

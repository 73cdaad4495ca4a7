use alloc::string::String;
use core::fmt;
use enough::StopReason;

use crate::format::TextureFormat;

/// Which way a codec was asked to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Decode,
    Encode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Decode => "decoding",
            Direction::Encode => "encoding",
        })
    }
}

/// Errors from STEX parsing and texture decoding/encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StexError {
    #[error("magic number mismatch; not an STEX file?")]
    MagicMismatch,

    #[error("codec not found for data type {data_type:#06x}, pixel format {pixel_format:#06x}")]
    CodecNotFound { data_type: u32, pixel_format: u32 },

    /// The codec exists but has no routine for this direction.
    ///
    /// Expected when encoding the ETC1 formats; see
    /// [`TextureFormat::encodable_fallback`].
    #[error("{direction} is not supported for {format}")]
    UnsupportedOperation {
        format: TextureFormat,
        direction: Direction,
    },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for StexError {
    fn from(r: StopReason) -> Self {
        StexError::Cancelled(r)
    }
}

use crate::codec::{Codec, image_len};
use crate::error::{Direction, StexError};

/// Resource limits for decode/encode operations.
///
/// All fields default to `None` (no limit). Checks run before any buffer is
/// allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated for the result: the BGRA8 image when
    /// decoding, the texel stream when encoding.
    pub max_memory_bytes: Option<u64>,
    /// Maximum raw texel stream length, in either direction. The stream is
    /// rounded up to whole 8×8 tiles, so this can trip before `max_pixels`.
    pub max_texel_bytes: Option<u64>,
}

fn exceeded(what: &str, value: u64, max: Option<u64>) -> Result<(), StexError> {
    match max {
        Some(max) if value > max => Err(StexError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check a `width × height` texture in `codec`'s format.
    pub(crate) fn check_texture(
        &self,
        width: u32,
        height: u32,
        codec: &Codec,
        direction: Direction,
    ) -> Result<(), StexError> {
        exceeded("width", u64::from(width), self.max_width)?;
        exceeded("height", u64::from(height), self.max_height)?;
        exceeded(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;

        let texel_bytes = codec.encoded_len(width, height)?;
        exceeded(
            "texel stream of",
            texel_bytes as u64,
            self.max_texel_bytes,
        )?;
        let allocation = match direction {
            Direction::Decode => image_len(width, height)?,
            Direction::Encode => texel_bytes,
        };
        exceeded("allocation of", allocation as u64, self.max_memory_bytes)
    }
}

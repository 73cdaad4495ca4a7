//! Channel helpers shared by every codec, and the pixel layouts the public API
//! accepts.
//!
//! Decoded buffers are always BGRA8 internally: byte 0 blue, 1 green, 2 red,
//! 3 alpha.

pub(crate) const BLUE: usize = 0;
pub(crate) const GREEN: usize = 1;
pub(crate) const RED: usize = 2;
pub(crate) const ALPHA: usize = 3;

/// Bytes per decoded texel.
pub(crate) const TEXEL_BYTES: usize = 4;

/// Rescale a `source_bits`-wide channel value to `target_bits`, rounding.
///
/// `value` is masked to `source_bits` first. Both widths must be in `1..=8`.
///
/// ```
/// use zenstex::resample_channel;
/// assert_eq!(resample_channel(0xF, 4, 8), 0xFF);
/// assert_eq!(resample_channel(0x1F, 5, 8), 0xFF);
/// assert_eq!(resample_channel(0x80, 8, 1), 1);
/// ```
#[inline]
pub const fn resample_channel(value: u32, source_bits: u32, target_bits: u32) -> u8 {
    let source_mask = (1u32 << source_bits) - 1;
    let target_mask = (1u32 << target_bits) - 1;
    (((value & source_mask) * target_mask + (source_mask >> 1)) / source_mask) as u8
}

/// Expand a 4-bit value to 8 bits by nibble duplication (`0xA` -> `0xAA`).
#[inline]
pub(crate) const fn expand_nibble(value: u8) -> u8 {
    let v = value & 0x0F;
    (v << 4) | v
}

/// Integer mean of the red, green and blue channels of a BGRA texel.
#[inline]
pub(crate) fn luminance(texel: &[u8]) -> u8 {
    let sum = u16::from(texel[RED]) + u16::from(texel[GREEN]) + u16::from(texel[BLUE]);
    (sum / 3) as u8
}

fn swizzle<E>(
    buf: &mut [u8],
    f: fn(&mut [u8]) -> Result<(), E>,
) -> Result<(), crate::StexError> {
    if buf.is_empty() {
        return Ok(());
    }
    f(buf).map_err(|_| crate::StexError::BufferTooSmall {
        needed: buf.len().next_multiple_of(TEXEL_BYTES),
        actual: buf.len(),
    })
}

/// Convert a decoded BGRA8 buffer to RGBA8 in place.
pub(crate) fn bgra_to_rgba(buf: &mut [u8]) -> Result<(), crate::StexError> {
    swizzle(buf, garb::bytes::bgra_to_rgba_inplace)
}

/// Convert caller-supplied RGBA8 to the BGRA8 the encoders read.
pub(crate) fn rgba_to_bgra(buf: &mut [u8]) -> Result<(), crate::StexError> {
    swizzle(buf, garb::bytes::rgba_to_bgra_inplace)
}

/// Pixel memory layout of caller-facing buffers.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelLayout {
    /// 4 channels, 8-bit BGRA. The native decode order.
    #[default]
    Bgra8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        TEXEL_BYTES
    }
}

//! STEX writer. Always emits a 0x80-byte header with texel data right after.

use alloc::vec::Vec;

use super::{STEX_HEADER_LEN, STEX_MAGIC, StexHeader};
use crate::error::StexError;

/// `GL_TEXTURE_2D`, stored at 0x08.
const TEXTURE_2D: u32 = 3553;

/// Zero padding after the last header field.
const PADDING: usize = 0x5C;

pub(crate) fn write_stex(texels: &[u8], header: &StexHeader) -> Result<Vec<u8>, StexError> {
    let too_large = || StexError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let width = i32::try_from(header.width).map_err(|_| too_large())?;
    let height = i32::try_from(header.height).map_err(|_| too_large())?;
    let texel_len = u32::try_from(texels.len()).map_err(|_| too_large())?;
    let total = STEX_HEADER_LEN
        .checked_add(texels.len())
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&STEX_MAGIC);
    out.extend_from_slice(&0u32.to_le_bytes()); // reserved
    out.extend_from_slice(&TEXTURE_2D.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&header.format.data_type.code().to_le_bytes());
    out.extend_from_slice(&header.format.pixel_format.code().to_le_bytes());
    out.extend_from_slice(&texel_len.to_le_bytes());
    out.extend_from_slice(&(STEX_HEADER_LEN as u32).to_le_bytes());
    out.extend(core::iter::repeat_n(0u8, PADDING));
    debug_assert_eq!(out.len(), STEX_HEADER_LEN);
    out.extend_from_slice(texels);
    Ok(out)
}

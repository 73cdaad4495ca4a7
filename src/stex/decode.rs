//! STEX header parsing and texel data location.

use super::{STEX_HEADER_LEN, STEX_MAGIC, StexHeader};
use crate::codec::Codec;
use crate::error::StexError;
use crate::format::TextureFormat;

/// End of the last header field that is read.
const FIELDS_END: usize = 0x1C;

#[inline]
fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn dimension(value: i32, name: &str) -> Result<u32, StexError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| StexError::InvalidHeader(alloc::format!("{name} {value} is not positive")))
}

/// Parse the header, rejecting unknown formats and formats with no codec.
pub(crate) fn parse_header(data: &[u8]) -> Result<StexHeader, StexError> {
    let magic = data.get(..4).ok_or(StexError::UnexpectedEof)?;
    if magic != STEX_MAGIC {
        return Err(StexError::MagicMismatch);
    }
    if data.len() < FIELDS_END {
        return Err(StexError::UnexpectedEof);
    }

    let width = dimension(le_u32(data, 0x0C) as i32, "width")?;
    let height = dimension(le_u32(data, 0x10) as i32, "height")?;
    let format = TextureFormat::from_codes(le_u32(data, 0x14), le_u32(data, 0x18))?;
    Codec::lookup(format)?;

    Ok(StexHeader {
        width,
        height,
        format,
    })
}

/// Offset field written at 0x20; zero in files padded by older tools.
const DATA_OFFSET_AT: usize = 0x20;

/// The texel stream.
///
/// When the header records a data offset, the stream starts there and any
/// bytes after it (such as further mip levels) are ignored. Otherwise it is
/// the trailing bytes of the file, after a header region of at least
/// [`STEX_HEADER_LEN`] bytes.
pub(crate) fn texel_data<'a>(data: &'a [u8], header: &StexHeader) -> Result<&'a [u8], StexError> {
    let len = header.texel_data_len()?;
    let offset = if data.len() >= DATA_OFFSET_AT + 4 {
        le_u32(data, DATA_OFFSET_AT) as usize
    } else {
        0
    };
    if offset == 0 {
        let start = data
            .len()
            .checked_sub(len)
            .filter(|&start| start >= STEX_HEADER_LEN)
            .ok_or(StexError::UnexpectedEof)?;
        return Ok(&data[start..]);
    }
    if offset < STEX_HEADER_LEN {
        return Err(StexError::InvalidHeader(alloc::format!(
            "texel data offset {offset:#x} lies inside the header"
        )));
    }
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(StexError::UnexpectedEof)
}

//! STEX texture container.
//!
//! A fixed 0x80-byte little-endian header followed by one raw texel stream:
//!
//! | offset | size | field |
//! |--------|------|-------|
//! | 0x00 | 4 | magic `"STEX"` |
//! | 0x04 | 4 | reserved, zero |
//! | 0x08 | 4 | constant 3553 (`GL_TEXTURE_2D`) |
//! | 0x0C | 4 | width, `i32` |
//! | 0x10 | 4 | height, `i32` |
//! | 0x14 | 4 | data type code |
//! | 0x18 | 4 | pixel format code |
//! | 0x1C | 4 | texel data length |
//! | 0x20 | 4 | texel data offset, 0x80 |
//!
//! The magic, the fields from 0x0C to 0x1B and the data offset are read back.
//! Files in the wild may leave the offset zero and pad the header up to the
//! next 0x100 boundary; their texel data then runs to the end of the file.

pub(crate) mod decode;
mod encode;

use alloc::vec::Vec;

use crate::codec::Codec;
use crate::error::StexError;
use crate::format::TextureFormat;

/// File magic.
pub const STEX_MAGIC: [u8; 4] = *b"STEX";

/// Size of the header written by [`crate::encode_stex`].
pub const STEX_HEADER_LEN: usize = 0x80;

/// Header fields needed to decode an STEX file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StexHeader {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

impl StexHeader {
    /// Codec for this header's format. Always present for a parsed header.
    pub fn codec(&self) -> Result<&'static Codec, StexError> {
        Codec::lookup(self.format)
    }

    /// Length of the texel stream that follows the header.
    pub fn texel_data_len(&self) -> Result<usize, StexError> {
        self.codec()?.encoded_len(self.width, self.height)
    }
}

/// Parse the header and return it with the texel stream.
pub(crate) fn split(data: &[u8]) -> Result<(StexHeader, &[u8]), StexError> {
    let header = decode::parse_header(data)?;
    let texels = decode::texel_data(data, &header)?;
    Ok((header, texels))
}

/// Wrap an already-encoded texel stream in an STEX header.
pub(crate) fn wrap(texels: &[u8], header: &StexHeader) -> Result<Vec<u8>, StexError> {
    encode::write_stex(texels, header)
}

//! Codec registry: one entry per supported [`TextureFormat`], each with a
//! per-tile decoder and, for the uncompressed formats, a per-tile encoder.
//!
//! The drivers here walk the image in row-major tile order. Every tile
//! consumes (or produces) exactly [`Codec::bytes_per_tile`] bytes of the raw
//! stream, so the stream is split into per-tile slices up front.

mod decode;
mod encode;

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::{Direction, StexError};
use crate::format::TextureFormat;
use crate::pixel::TEXEL_BYTES;
use crate::tile::{TILE_DIM, TILE_TEXELS, Tile, tile_row, tile_rows};

/// Decode one tile: raw tile bytes in, texels written into the BGRA8 image.
pub(crate) type TileDecoder = fn(src: &[u8], dst: &mut [u8], tile: &Tile);

/// Encode one tile: texels read from the BGRA8 image, raw bytes appended.
pub(crate) type TileEncoder = fn(src: &[u8], tile: &Tile, out: &mut Vec<u8>);

/// A registered texture codec.
#[derive(Clone, Copy)]
pub struct Codec {
    format: TextureFormat,
    name: &'static str,
    bits_per_texel: usize,
    decoder: Option<TileDecoder>,
    encoder: Option<TileEncoder>,
}

impl core::fmt::Debug for Codec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Codec")
            .field("name", &self.name)
            .field("format", &self.format)
            .field("bits_per_texel", &self.bits_per_texel)
            .field("decode", &self.decoder.is_some())
            .field("encode", &self.encoder.is_some())
            .finish()
    }
}

const fn codec(
    format: TextureFormat,
    name: &'static str,
    bits_per_texel: usize,
    decoder: TileDecoder,
    encoder: Option<TileEncoder>,
) -> Codec {
    Codec {
        format,
        name,
        bits_per_texel,
        decoder: Some(decoder),
        encoder,
    }
}

#[rustfmt::skip]
static CODECS: [Codec; 13] = [
    codec(TextureFormat::RGBA4444, "RGBA4444", 16, decode::rgba4444, Some(encode::rgba4444)),
    codec(TextureFormat::RGBA5551, "RGBA5551", 16, decode::rgba5551, Some(encode::rgba5551)),
    codec(TextureFormat::RGBA8888, "RGBA8888", 32, decode::rgba8888, Some(encode::rgba8888)),
    codec(TextureFormat::RGB565,   "RGB565",   16, decode::rgb565,   Some(encode::rgb565)),
    codec(TextureFormat::RGB888,   "RGB888",   24, decode::rgb888,   Some(encode::rgb888)),
    codec(TextureFormat::ETC1,     "ETC1",      4, decode::etc1,     None),
    codec(TextureFormat::ETC1A4,   "ETC1A4",    8, decode::etc1_a4,  None),
    codec(TextureFormat::A8,       "A8",        8, decode::a8,       Some(encode::a8)),
    codec(TextureFormat::A4,       "A4",        4, decode::a4,       None),
    codec(TextureFormat::L8,       "L8",        8, decode::l8,       Some(encode::l8)),
    codec(TextureFormat::L4,       "L4",        4, decode::l4,       None),
    codec(TextureFormat::LA88,     "LA88",     16, decode::la88,     Some(encode::la88)),
    codec(TextureFormat::LA44,     "LA44",      8, decode::la44,     Some(encode::la44)),
];

impl Codec {
    /// Find the codec for a format.
    pub fn lookup(format: TextureFormat) -> Result<&'static Codec, StexError> {
        CODECS
            .iter()
            .find(|c| c.format == format)
            .ok_or(StexError::CodecNotFound {
                data_type: format.data_type.code(),
                pixel_format: format.pixel_format.code(),
            })
    }

    /// Every registered codec.
    pub fn all() -> &'static [Codec] {
        &CODECS
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Short name, e.g. `"RGBA5551"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Storage cost per texel, averaged over a tile for ETC1.
    pub fn bits_per_texel(&self) -> usize {
        self.bits_per_texel
    }

    pub fn bytes_per_tile(&self) -> usize {
        self.bits_per_texel * TILE_TEXELS / 8
    }

    pub fn can_decode(&self) -> bool {
        self.decoder.is_some()
    }

    pub fn can_encode(&self) -> bool {
        self.encoder.is_some()
    }

    /// Exact raw stream length for a `width × height` image.
    pub fn encoded_len(&self, width: u32, height: u32) -> Result<usize, StexError> {
        let tiles_x = (width as usize).div_ceil(TILE_DIM);
        let tiles_y = (height as usize).div_ceil(TILE_DIM);
        tiles_x
            .checked_mul(tiles_y)
            .and_then(|t| t.checked_mul(self.bytes_per_tile()))
            .ok_or(StexError::DimensionsTooLarge { width, height })
    }

    fn unsupported(&self, direction: Direction) -> StexError {
        StexError::UnsupportedOperation {
            format: self.format,
            direction,
        }
    }

    /// The first [`Self::encoded_len`] bytes of `data`, or `UnexpectedEof`.
    pub(crate) fn stream<'a>(
        &self,
        data: &'a [u8],
        width: u32,
        height: u32,
    ) -> Result<&'a [u8], StexError> {
        let len = self.encoded_len(width, height)?;
        data.get(..len).ok_or(StexError::UnexpectedEof)
    }

    /// Decode a raw texture stream into a new BGRA8 buffer.
    ///
    /// The stream length is checked before the output is allocated.
    pub fn decode(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        stop: &dyn Stop,
    ) -> Result<Vec<u8>, StexError> {
        let out_bytes = image_len(width, height)?;
        self.stream(data, width, height)?;
        let mut out = vec![0u8; out_bytes];
        self.decode_into(data, width, height, &mut out, stop)?;
        Ok(out)
    }

    /// Decode into a caller-owned BGRA8 buffer of at least
    /// `width * height * 4` bytes. Texels outside the image are never
    /// written; bytes not covered by the image are left untouched.
    pub fn decode_into(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        dst: &mut [u8],
        stop: &dyn Stop,
    ) -> Result<(), StexError> {
        let decoder = self
            .decoder
            .ok_or_else(|| self.unsupported(Direction::Decode))?;
        let needed = image_len(width, height)?;
        if dst.len() < needed {
            return Err(StexError::BufferTooSmall {
                needed,
                actual: dst.len(),
            });
        }
        let stream = self.stream(data, width, height)?;

        let (w, h) = (width as usize, height as usize);
        let mut tiles = stream.chunks_exact(self.bytes_per_tile());
        for y in tile_rows(h) {
            stop.check()?;
            for tile in tile_row(y, w, h) {
                let src = tiles.next().ok_or(StexError::UnexpectedEof)?;
                decoder(src, dst, &tile);
            }
        }
        Ok(())
    }

    /// Encode a BGRA8 buffer into this codec's raw stream.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: &dyn Stop,
    ) -> Result<Vec<u8>, StexError> {
        let encoder = self
            .encoder
            .ok_or_else(|| self.unsupported(Direction::Encode))?;
        let needed = image_len(width, height)?;
        if pixels.len() < needed {
            return Err(StexError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        let src = &pixels[..needed];

        let (w, h) = (width as usize, height as usize);
        let mut out = Vec::with_capacity(self.encoded_len(width, height)?);
        for y in tile_rows(h) {
            stop.check()?;
            for tile in tile_row(y, w, h) {
                encoder(src, &tile, &mut out);
            }
        }
        Ok(out)
    }
}

/// Byte length of a BGRA8 image.
pub(crate) fn image_len(width: u32, height: u32) -> Result<usize, StexError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(TEXEL_BYTES))
        .ok_or(StexError::DimensionsTooLarge { width, height })
}

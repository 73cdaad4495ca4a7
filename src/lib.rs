//! # zenstex
//!
//! Decoder and encoder for PICA200 (Nintendo 3DS GPU) native texture formats
//! and the STEX container that carries them.
//!
//! ## Supported Formats
//!
//! | Format | Decode | Encode |
//! |--------|--------|--------|
//! | RGBA4444, RGBA5551, RGBA8888 | yes | yes |
//! | RGB565, RGB888 | yes | yes |
//! | ETC1, ETC1A4 (4-bit alpha) | yes | no |
//! | A8, L8, LA88, LA44 | yes | yes |
//! | A4, L4 | yes | no |
//!
//! All formats are stored as 8×8 tiles with a Z-ordered texel layout; images
//! whose size is not a multiple of 8 are clipped at the right and bottom
//! edges. Decoded pixels are BGRA8 unless RGBA8 is requested.
//!
//! ## Non-Goals
//!
//! - ETC1 compression (re-encode ETC1 textures with
//!   [`TextureFormat::encodable_fallback`])
//! - Mipmap chains
//! - File and directory handling
//!
//! ## Usage
//!
//! ```no_run
//! use zenstex::{DecodeRequest, EncodeRequest, PixelLayout, Unstoppable};
//!
//! let file: &[u8] = &[]; // your STEX bytes
//!
//! // Header only, no texel decode
//! let header = zenstex::read_stex_header(file)?;
//! println!("{}x{} {}", header.width, header.height, header.format);
//!
//! // Decode to RGBA
//! let decoded = DecodeRequest::from_stex(file)?
//!     .with_layout(PixelLayout::Rgba8)
//!     .decode(Unstoppable)?;
//!
//! // Write back, swapping ETC1 for an encodable format
//! let stex = EncodeRequest::new(decoded.format.encodable_fallback())
//!     .with_layout(PixelLayout::Rgba8)
//!     .encode_stex(decoded.pixels(), decoded.width, decoded.height, Unstoppable)?;
//! # Ok::<(), zenstex::StexError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod codec;
mod decode;
mod encode;
mod error;
mod format;
mod limits;
mod pixel;
mod stex;

pub mod etc1;
pub mod tile;

#[cfg(feature = "serde")]
mod metadata;

use alloc::vec::Vec;

// Re-exports
pub use codec::Codec;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{Direction, StexError};
pub use format::{DataType, PixelFormat, TextureFormat};
pub use limits::Limits;
#[cfg(feature = "serde")]
pub use metadata::StexMetadata;
pub use pixel::{PixelLayout, resample_channel};
pub use stex::{STEX_HEADER_LEN, STEX_MAGIC, StexHeader};

/// Decode a raw texel stream to BGRA8.
pub fn decode_texture(
    data: &[u8],
    width: u32,
    height: u32,
    format: TextureFormat,
    stop: impl Stop,
) -> Result<DecodeOutput, StexError> {
    DecodeRequest::new(data, width, height, format).decode(stop)
}

/// Encode BGRA8 pixels to a raw texel stream.
pub fn encode_texture(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: TextureFormat,
    stop: impl Stop,
) -> Result<Vec<u8>, StexError> {
    EncodeRequest::new(format).encode(pixels, width, height, stop)
}

/// Read an STEX header without decoding the texels.
pub fn read_stex_header(data: &[u8]) -> Result<StexHeader, StexError> {
    stex::decode::parse_header(data)
}

/// Decode a whole STEX file to BGRA8.
pub fn decode_stex(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, StexError> {
    DecodeRequest::from_stex(data)?.decode(stop)
}

/// Encode BGRA8 pixels as a whole STEX file.
pub fn encode_stex(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: TextureFormat,
    stop: impl Stop,
) -> Result<Vec<u8>, StexError> {
    EncodeRequest::new(format).encode_stex(pixels, width, height, stop)
}

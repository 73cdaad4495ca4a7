use alloc::borrow::Cow;
use alloc::vec::Vec;
use enough::Stop;

use crate::codec::{Codec, image_len};
use crate::error::{Direction, StexError};
use crate::format::TextureFormat;
use crate::limits::Limits;
use crate::pixel::{PixelLayout, rgba_to_bgra};
use crate::stex::StexHeader;

/// Builder for encoding pixels into a raw texel stream.
///
/// ETC1, A4 and L4 have no encoder and fail with
/// [`StexError::UnsupportedOperation`]. For textures that were ETC1, pass
/// [`TextureFormat::encodable_fallback`] to write them as RGBA8888 instead.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    format: TextureFormat,
    layout: PixelLayout,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(format: TextureFormat) -> Self {
        Self {
            format,
            layout: PixelLayout::Bgra8,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Channel order of the input buffer. Defaults to BGRA.
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn encode(
        self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, StexError> {
        let codec = Codec::lookup(self.format)?;
        let needed = image_len(width, height)?;
        if let Some(limits) = self.limits {
            limits.check_texture(width, height, codec, Direction::Encode)?;
        }
        if pixels.len() < needed {
            return Err(StexError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        stop.check()?;

        let bgra: Cow<'_, [u8]> = match self.layout {
            PixelLayout::Bgra8 => Cow::Borrowed(&pixels[..needed]),
            PixelLayout::Rgba8 => {
                let mut owned = pixels[..needed].to_vec();
                rgba_to_bgra(&mut owned)?;
                Cow::Owned(owned)
            }
        };
        codec.encode(&bgra, width, height, &stop)
    }

    /// Encode and wrap the texel stream in an STEX header.
    pub fn encode_stex(
        self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, StexError> {
        let header = StexHeader {
            width,
            height,
            format: self.format,
        };
        let texels = self.encode(pixels, width, height, stop)?;
        crate::stex::wrap(&texels, &header)
    }
}

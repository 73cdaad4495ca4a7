use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::codec::{Codec, image_len};
use crate::error::{Direction, StexError};
use crate::format::TextureFormat;
use crate::limits::Limits;
use crate::pixel::{PixelLayout, bgra_to_rgba};

/// Decoded texture. Pixels are 8-bit, four channels, in [`Self::layout`] order.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    /// Format the texels were stored in.
    pub format: TextureFormat,
}

impl DecodeOutput {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row of [`Self::pixels`].
    pub fn stride(&self) -> usize {
        self.width as usize * self.layout.bytes_per_pixel()
    }

    /// Take ownership of the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        layout: PixelLayout,
        format: TextureFormat,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            layout,
            format,
        }
    }

    /// Copy out as typed RGBA pixels, whatever the buffer layout.
    #[cfg(feature = "rgb")]
    pub fn to_rgba8(&self) -> Vec<rgb::RGBA8> {
        self.pixels
            .chunks_exact(self.layout.bytes_per_pixel())
            .map(|p| match self.layout {
                PixelLayout::Rgba8 => rgb::RGBA8 {
                    r: p[0],
                    g: p[1],
                    b: p[2],
                    a: p[3],
                },
                PixelLayout::Bgra8 => rgb::RGBA8 {
                    r: p[2],
                    g: p[1],
                    b: p[0],
                    a: p[3],
                },
            })
            .collect()
    }

    /// Convert to an [`imgref::ImgVec`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(self.to_rgba8(), self.width as usize, self.height as usize)
    }
}

/// Builder for decoding a raw texel stream.
///
/// ```
/// use zenstex::{DecodeRequest, PixelLayout, TextureFormat, Unstoppable};
///
/// let raw = [0x80u8; 64]; // one 8×8 tile of L8
/// let decoded = DecodeRequest::new(&raw, 8, 8, TextureFormat::L8)
///     .with_layout(PixelLayout::Rgba8)
///     .decode(Unstoppable)?;
/// assert_eq!(&decoded.pixels()[..4], &[0x80, 0x80, 0x80, 0xFF]);
/// # Ok::<(), zenstex::StexError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    format: TextureFormat,
    layout: PixelLayout,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            data,
            width,
            height,
            format,
            layout: PixelLayout::Bgra8,
            limits: None,
        }
    }

    /// Start from a whole STEX file; the header supplies size and format.
    ///
    /// Fails on a bad magic, an unregistered format, or a file too short to
    /// hold the texel stream its header describes.
    pub fn from_stex(file: &'a [u8]) -> Result<Self, StexError> {
        let (header, texels) = crate::stex::split(file)?;
        Ok(Self::new(texels, header.width, header.height, header.format))
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Channel order of the output buffer. Defaults to BGRA.
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, StexError> {
        let codec = Codec::lookup(self.format)?;
        let out_bytes = image_len(self.width, self.height)?;
        if let Some(limits) = self.limits {
            limits.check_texture(self.width, self.height, codec, Direction::Decode)?;
        }
        // A short stream fails here, before the output is allocated.
        let stream = codec.stream(self.data, self.width, self.height)?;
        stop.check()?;

        let mut pixels = vec![0u8; out_bytes];
        codec.decode_into(stream, self.width, self.height, &mut pixels, &stop)?;
        if self.layout == PixelLayout::Rgba8 {
            bgra_to_rgba(&mut pixels)?;
        }
        Ok(DecodeOutput::new(
            pixels,
            self.width,
            self.height,
            self.layout,
            self.format,
        ))
    }
}

//! PICA200 texture format codes and the descriptor pair that selects a codec.

use core::fmt;

use crate::error::StexError;

/// Raw scalar encoding of a texture (the GL `type` argument).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum DataType {
    Byte = 0x1400,
    UnsignedByte = 0x1401,
    Short = 0x1402,
    UnsignedShort = 0x1403,
    Int = 0x1404,
    UnsignedInt = 0x1405,
    Float = 0x1406,
    /// Two 4-bit channels packed in one byte.
    #[cfg_attr(feature = "serde", serde(rename = "UnsignedByte44DMP"))]
    UnsignedByte44Dmp = 0x6760,
    /// One 4-bit channel, two texels per byte.
    #[cfg_attr(feature = "serde", serde(rename = "Unsigned4BitsDMP"))]
    Unsigned4BitsDmp = 0x6761,
    UnsignedShort4444 = 0x8033,
    UnsignedShort5551 = 0x8034,
    UnsignedShort565 = 0x8363,
}

impl DataType {
    const ALL: [DataType; 12] = [
        DataType::Byte,
        DataType::UnsignedByte,
        DataType::Short,
        DataType::UnsignedShort,
        DataType::Int,
        DataType::UnsignedInt,
        DataType::Float,
        DataType::UnsignedByte44Dmp,
        DataType::Unsigned4BitsDmp,
        DataType::UnsignedShort4444,
        DataType::UnsignedShort5551,
        DataType::UnsignedShort565,
    ];

    /// Look up a data type by its numeric code.
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Numeric code as stored in STEX headers.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Name used by the sidecar metadata.
    pub const fn name(self) -> &'static str {
        match self {
            DataType::Byte => "Byte",
            DataType::UnsignedByte => "UnsignedByte",
            DataType::Short => "Short",
            DataType::UnsignedShort => "UnsignedShort",
            DataType::Int => "Int",
            DataType::UnsignedInt => "UnsignedInt",
            DataType::Float => "Float",
            DataType::UnsignedByte44Dmp => "UnsignedByte44DMP",
            DataType::Unsigned4BitsDmp => "Unsigned4BitsDMP",
            DataType::UnsignedShort4444 => "UnsignedShort4444",
            DataType::UnsignedShort5551 => "UnsignedShort5551",
            DataType::UnsignedShort565 => "UnsignedShort565",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Channel semantics of a texture (the GL `format` argument).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum PixelFormat {
    #[cfg_attr(feature = "serde", serde(rename = "RGBANativeDMP"))]
    RgbaNative = 0x6752,
    #[cfg_attr(feature = "serde", serde(rename = "RGBNativeDMP"))]
    RgbNative = 0x6754,
    #[cfg_attr(feature = "serde", serde(rename = "AlphaNativeDMP"))]
    AlphaNative = 0x6756,
    #[cfg_attr(feature = "serde", serde(rename = "LuminanceNativeDMP"))]
    LuminanceNative = 0x6757,
    #[cfg_attr(feature = "serde", serde(rename = "LuminanceAlphaNativeDMP"))]
    LuminanceAlphaNative = 0x6758,
    /// ETC1 compressed RGB.
    #[cfg_attr(feature = "serde", serde(rename = "ETC1RGB8NativeDMP"))]
    Etc1Rgb8Native = 0x675A,
    /// ETC1 compressed RGB with a separate 4-bit alpha plane.
    #[cfg_attr(feature = "serde", serde(rename = "ETC1AlphaRGB8A4NativeDMP"))]
    Etc1AlphaRgb8A4Native = 0x675B,
}

impl PixelFormat {
    const ALL: [PixelFormat; 7] = [
        PixelFormat::RgbaNative,
        PixelFormat::RgbNative,
        PixelFormat::AlphaNative,
        PixelFormat::LuminanceNative,
        PixelFormat::LuminanceAlphaNative,
        PixelFormat::Etc1Rgb8Native,
        PixelFormat::Etc1AlphaRgb8A4Native,
    ];

    /// Look up a pixel format by its numeric code.
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    /// Numeric code as stored in STEX headers.
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::RgbaNative => "RGBANativeDMP",
            PixelFormat::RgbNative => "RGBNativeDMP",
            PixelFormat::AlphaNative => "AlphaNativeDMP",
            PixelFormat::LuminanceNative => "LuminanceNativeDMP",
            PixelFormat::LuminanceAlphaNative => "LuminanceAlphaNativeDMP",
            PixelFormat::Etc1Rgb8Native => "ETC1RGB8NativeDMP",
            PixelFormat::Etc1AlphaRgb8A4Native => "ETC1AlphaRGB8A4NativeDMP",
        }
    }

    /// Whether this is one of the ETC1 block-compressed formats.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            PixelFormat::Etc1Rgb8Native | PixelFormat::Etc1AlphaRgb8A4Native
        )
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(data type, pixel format)` pair. Only registered pairs have a codec;
/// see [`crate::Codec::lookup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureFormat {
    pub data_type: DataType,
    pub pixel_format: PixelFormat,
}

impl TextureFormat {
    pub const RGBA4444: Self = Self::new(DataType::UnsignedShort4444, PixelFormat::RgbaNative);
    pub const RGBA5551: Self = Self::new(DataType::UnsignedShort5551, PixelFormat::RgbaNative);
    pub const RGBA8888: Self = Self::new(DataType::UnsignedByte, PixelFormat::RgbaNative);
    pub const RGB565: Self = Self::new(DataType::UnsignedShort565, PixelFormat::RgbNative);
    pub const RGB888: Self = Self::new(DataType::UnsignedByte, PixelFormat::RgbNative);
    pub const ETC1: Self = Self::new(DataType::UnsignedByte, PixelFormat::Etc1Rgb8Native);
    pub const ETC1A4: Self = Self::new(DataType::UnsignedByte, PixelFormat::Etc1AlphaRgb8A4Native);
    pub const A8: Self = Self::new(DataType::UnsignedByte, PixelFormat::AlphaNative);
    pub const A4: Self = Self::new(DataType::Unsigned4BitsDmp, PixelFormat::AlphaNative);
    pub const L8: Self = Self::new(DataType::UnsignedByte, PixelFormat::LuminanceNative);
    pub const L4: Self = Self::new(DataType::Unsigned4BitsDmp, PixelFormat::LuminanceNative);
    pub const LA88: Self = Self::new(DataType::UnsignedByte, PixelFormat::LuminanceAlphaNative);
    pub const LA44: Self = Self::new(DataType::UnsignedByte44Dmp, PixelFormat::LuminanceAlphaNative);

    pub const fn new(data_type: DataType, pixel_format: PixelFormat) -> Self {
        Self {
            data_type,
            pixel_format,
        }
    }

    /// Build a descriptor from raw header codes.
    ///
    /// Unknown codes fail with [`StexError::CodecNotFound`]. A known but
    /// unregistered pairing is accepted here and rejected by
    /// [`crate::Codec::lookup`].
    pub fn from_codes(data_type: u32, pixel_format: u32) -> Result<Self, StexError> {
        match (DataType::from_u32(data_type), PixelFormat::from_u32(pixel_format)) {
            (Some(dt), Some(pf)) => Ok(Self::new(dt, pf)),
            _ => Err(StexError::CodecNotFound {
                data_type,
                pixel_format,
            }),
        }
    }

    /// The format to re-encode with when this one has no encoder.
    ///
    /// ETC1 textures are written back as 8-8-8-8 RGBA; every other format
    /// maps to itself.
    pub const fn encodable_fallback(self) -> Self {
        if self.pixel_format.is_compressed() {
            Self::RGBA8888
        } else {
            self
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.data_type, self.pixel_format)
    }
}

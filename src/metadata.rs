//! Sidecar metadata for textures exported out of STEX files.
//!
//! Serialises to the JSON shape written next to each exported image:
//!
//! ```json
//! {
//!   "RelativePath": "ui/title.stex",
//!   "Width": 256,
//!   "Height": 128,
//!   "DataType": "UnsignedByte",
//!   "PixelFormat": "ETC1RGB8NativeDMP"
//! }
//! ```

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::format::{DataType, PixelFormat, TextureFormat};
use crate::stex::StexHeader;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StexMetadata {
    /// Path of the source file relative to the tree it was found in.
    pub relative_path: String,
    pub width: u32,
    pub height: u32,
    pub data_type: DataType,
    pub pixel_format: PixelFormat,
}

impl StexMetadata {
    pub fn from_header(relative_path: impl Into<String>, header: &StexHeader) -> Self {
        Self {
            relative_path: relative_path.into(),
            width: header.width,
            height: header.height,
            data_type: header.format.data_type,
            pixel_format: header.format.pixel_format,
        }
    }

    pub fn format(&self) -> TextureFormat {
        TextureFormat::new(self.data_type, self.pixel_format)
    }

    /// Header to write when converting back to STEX. ETC1 is swapped for
    /// RGBA8888 since it cannot be encoded.
    pub fn encodable_header(&self) -> StexHeader {
        StexHeader {
            width: self.width,
            height: self.height,
            format: self.format().encodable_fallback(),
        }
    }
}

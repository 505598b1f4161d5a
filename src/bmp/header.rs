//! The fixed 54-byte bitmap header.
//!
//! Parsed once for geometry and otherwise carried through the pipeline as
//! opaque bytes, so the IM3 container and any re-encoded bitmap stay
//! byte-identical to the source header.

use crate::ImageInfo;
use crate::constants::{
    BMP_HEADER_SIZE, HEIGHT_FIELD_OFFSET, ORIENTATION_BIT_MASK, ORIENTATION_BYTE_OFFSET,
    WIDTH_FIELD_OFFSET,
};
use crate::error::Im3Error;

/// The leading header block of a source bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    bytes: [u8; BMP_HEADER_SIZE],
}

impl BmpHeader {
    /// Reads the header from the start of `source`.
    pub fn parse(source: &[u8]) -> Result<Self, Im3Error> {
        if source.len() < BMP_HEADER_SIZE {
            return Err(Im3Error::HeaderTooShort);
        }
        let mut bytes = [0u8; BMP_HEADER_SIZE];
        bytes.copy_from_slice(&source[..BMP_HEADER_SIZE]);
        let header = Self { bytes };
        if header.raw_width() < 0 {
            return Err(Im3Error::InvalidWidth);
        }
        Ok(header)
    }

    fn field_le(&self, offset: usize) -> i32 {
        i32::from_le_bytes([
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ])
    }

    fn raw_width(&self) -> i32 {
        self.field_le(WIDTH_FIELD_OFFSET)
    }

    /// Signed stored height; negative means top-down row order.
    fn raw_height(&self) -> i32 {
        self.field_le(HEIGHT_FIELD_OFFSET)
    }

    pub fn width(&self) -> u32 {
        self.raw_width() as u32
    }

    pub fn height(&self) -> u32 {
        self.raw_height().unsigned_abs()
    }

    /// Rows are stored bottom-to-top when bit 7 of the height field's most
    /// significant byte is clear.
    pub fn is_bottom_up(&self) -> bool {
        self.bytes[ORIENTATION_BYTE_OFFSET] & ORIENTATION_BIT_MASK == 0
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width(),
            height: self.height(),
            bottom_up: self.is_bottom_up(),
        }
    }

    /// The raw header bytes, emitted verbatim by both encoders.
    pub fn as_bytes(&self) -> &[u8; BMP_HEADER_SIZE] {
        &self.bytes
    }
}

//! IM3 decoder.
//!
//! Unpacks one code per 2x2 block and broadcasts it across the block,
//! reconstructing a piecewise-constant YCbCr raster.

use crate::ImageInfo;
use crate::bmp::header::BmpHeader;
use crate::constants::{BMP_HEADER_SIZE, CODE_SIZE};
use crate::error::Im3Error;
use crate::raster::YcbcrRaster;

/// Dequantizes a packed code. Left-shifting restores the truncated
/// low-order bits as zero.
pub(crate) fn unpack_code(code: u16) -> (u8, u8, u8) {
    let y = ((code >> 10) & 0x3F) << 2;
    let cb = ((code >> 5) & 0x1F) << 3;
    let cr = (code & 0x1F) << 3;
    (y as u8, cb as u8, cr as u8)
}

/// Maps a broadcast position to the previously decoded neighbor it copies:
/// left of it for an odd column, above it for an odd row, diagonal when
/// both are odd. All three resolve to the block's top-left sample.
fn broadcast_source(row: usize, col: usize) -> (usize, usize) {
    match (row % 2 == 0, col % 2 == 0) {
        (true, false) => (row, col - 1),
        (false, true) => (row - 1, col),
        _ => (row - 1, col - 1),
    }
}

/// Reverses an IM3 container into a per-pixel YCbCr raster.
pub struct Im3Decoder<'a> {
    source: &'a [u8],
    position: usize,
    header: Option<BmpHeader>,
}

impl<'a> Im3Decoder<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            header: None,
        }
    }

    /// Parses the leading 54-byte header, which the container reuses from
    /// the source bitmap. Must be called before `decode`.
    pub fn read_header(&mut self) -> Result<(), Im3Error> {
        self.header = Some(BmpHeader::parse(self.source)?);
        self.position = BMP_HEADER_SIZE;
        Ok(())
    }

    pub fn header(&self) -> Option<&BmpHeader> {
        self.header.as_ref()
    }

    pub fn info(&self) -> Option<ImageInfo> {
        self.header.as_ref().map(BmpHeader::info)
    }

    /// Walks the pixel grid in row-major order: block top-left positions
    /// consume the next code from the payload, every other position copies
    /// its block neighbor. Running out of payload bytes is fatal.
    pub fn decode(&mut self) -> Result<YcbcrRaster, Im3Error> {
        let info = self.info().ok_or(Im3Error::InvalidOperation)?;
        let width = info.width as usize;
        let height = info.height as usize;
        let mut raster = YcbcrRaster::new(width, height);

        for row in 0..height {
            for col in 0..width {
                let (y, cb, cr) = if row % 2 == 0 && col % 2 == 0 {
                    unpack_code(self.read_code()?)
                } else {
                    let (src_row, src_col) = broadcast_source(row, col);
                    raster.sample(src_row, src_col)
                };
                raster.set_sample(row, col, y, cb, cr);
            }
        }
        Ok(raster)
    }

    fn read_code(&mut self) -> Result<u16, Im3Error> {
        let end = self.position + CODE_SIZE;
        if end > self.source.len() {
            return Err(Im3Error::UnexpectedEndOfPayload);
        }
        let code = u16::from_be_bytes([self.source[self.position], self.source[self.position + 1]]);
        self.position = end;
        Ok(code)
    }
}

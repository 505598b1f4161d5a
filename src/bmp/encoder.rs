//! BMP writer.
//!
//! Re-emits the original header verbatim, then the raster as BGR rows in
//! on-disk order with zeroed row padding.

use crate::ImageInfo;
use crate::bmp::header::BmpHeader;
use crate::constants::{BMP_HEADER_SIZE, ROW_ALIGNMENT};
use crate::error::Im3Error;
use crate::raster::Raster;

const PADDING: [u8; ROW_ALIGNMENT - 1] = [0; ROW_ALIGNMENT - 1];

/// Writes an RGB raster back out as a valid uncompressed bitmap.
pub struct BmpEncoder<'a> {
    destination: &'a mut [u8],
    position: usize,
}

impl<'a> BmpEncoder<'a> {
    pub fn new(destination: &'a mut [u8]) -> Self {
        Self {
            destination,
            position: 0,
        }
    }

    /// Total encoded size for an image: header plus padded rows.
    pub fn encoded_size(info: &ImageInfo) -> usize {
        BMP_HEADER_SIZE + info.row_stride() * info.height as usize
    }

    /// Writes the header and pixel rows; returns the number of bytes
    /// written.
    ///
    /// Logical rows are iterated in reverse for bottom-up storage, forward
    /// otherwise, mirroring the decoder's row mapping exactly.
    pub fn encode(&mut self, header: &BmpHeader, raster: &Raster) -> Result<usize, Im3Error> {
        self.write_all(header.as_bytes())?;

        let info = header.info();
        let width = info.width as usize;
        let height = info.height as usize;
        let padding = info.row_padding();

        for disk_row in 0..height {
            let row = if info.bottom_up {
                height - 1 - disk_row
            } else {
                disk_row
            };
            for col in 0..width {
                let (r, g, b) = raster.rgb(row, col);
                self.write_all(&[b, g, r])?;
            }
            self.write_all(&PADDING[..padding])?;
        }
        Ok(self.position)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Im3Error> {
        let end = self.position + bytes.len();
        if end > self.destination.len() {
            return Err(Im3Error::DestinationTooSmall);
        }
        self.destination[self.position..end].copy_from_slice(bytes);
        self.position = end;
        Ok(())
    }
}

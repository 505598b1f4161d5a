//! BMP pixel-array decoder.

use crate::ImageInfo;
use crate::bmp::header::BmpHeader;
use crate::constants::{BMP_HEADER_SIZE, BYTES_PER_PIXEL};
use crate::error::Im3Error;
use crate::raster::Raster;

/// Decodes a 24-bit uncompressed bitmap into a logical top-down RGB raster.
pub struct BmpDecoder<'a> {
    source: &'a [u8],
    position: usize,
    header: Option<BmpHeader>,
}

impl<'a> BmpDecoder<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            header: None,
        }
    }

    /// Parses the leading 54-byte header. Must be called before `decode`.
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

    /// Reads the full pixel grid in on-disk row order.
    ///
    /// Pixels arrive as BGR triples; each disk row maps to its logical
    /// raster row (reversed for bottom-up storage) and the trailing row
    /// padding is skipped. Running out of pixel bytes is fatal.
    pub fn decode(&mut self) -> Result<Raster, Im3Error> {
        let info = self.info().ok_or(Im3Error::InvalidOperation)?;
        let width = info.width as usize;
        let height = info.height as usize;
        let padding = info.row_padding();
        let mut raster = Raster::new(width, height);

        for disk_row in 0..height {
            let row = if info.bottom_up {
                height - 1 - disk_row
            } else {
                disk_row
            };
            for col in 0..width {
                let [b, g, r] = self.read_pixel()?;
                raster.set_rgb(row, col, r, g, b);
            }
            self.skip(padding);
        }
        Ok(raster)
    }

    fn read_pixel(&mut self) -> Result<[u8; BYTES_PER_PIXEL], Im3Error> {
        let end = self.position + BYTES_PER_PIXEL;
        if end > self.source.len() {
            return Err(Im3Error::UnexpectedEndOfPixelData);
        }
        let pixel = [
            self.source[self.position],
            self.source[self.position + 1],
            self.source[self.position + 2],
        ];
        self.position = end;
        Ok(pixel)
    }

    // Padding bytes are ignorable; a stream that ends inside the final
    // row's padding is still complete.
    fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }
}

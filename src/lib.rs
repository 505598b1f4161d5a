//! im3-rs: a lossy bitmap codec.
//!
//! Parses 24-bit uncompressed BMP images, compresses them into the IM3
//! container format (one 16-bit code per 2x2 pixel block, obtained by
//! YCbCr conversion, chroma subsampling, and bit-depth truncation), and
//! reconstructs a lossy BMP from a container.
//!
//! Pipeline: BMP bytes -> [`bmp::BmpDecoder`] -> [`raster::Raster`] ->
//! [`im3::Im3Encoder`] -> container bytes, and the reverse through
//! [`im3::Im3Decoder`] and [`bmp::BmpEncoder`].

pub mod constants;
pub mod error;

pub use error::Im3Error;

/// Image geometry shared by the BMP and IM3 surfaces.
///
/// Established once when a header is parsed and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Pixel rows are stored bottom-to-top in the byte stream.
    pub bottom_up: bool,
}

impl ImageInfo {
    /// Bytes appended after each pixel row so that rows occupy a multiple
    /// of four bytes: `(4 - (width * 3 mod 4)) mod 4`.
    ///
    /// The same value is skipped on read and emitted on write.
    pub fn row_padding(&self) -> usize {
        let row_bytes = self.width as usize * constants::BYTES_PER_PIXEL;
        (constants::ROW_ALIGNMENT - row_bytes % constants::ROW_ALIGNMENT) % constants::ROW_ALIGNMENT
    }

    /// On-disk bytes per pixel row, padding included.
    pub fn row_stride(&self) -> usize {
        self.width as usize * constants::BYTES_PER_PIXEL + self.row_padding()
    }
}

pub mod bmp;
pub mod color;
pub mod im3;
pub mod raster;

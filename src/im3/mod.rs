//! IM3 container surface.
//!
//! An IM3 file is the source bitmap's 54-byte header followed by a densely
//! packed stream of big-endian 16-bit codes, one per 2x2 pixel block in
//! row-major block order. Each code holds the block's top-left sample after
//! YCbCr conversion, truncated to 6 bits of Y and 5 bits each of Cb and Cr.

pub mod decoder;
pub mod encoder;

pub use decoder::Im3Decoder;
pub use encoder::Im3Encoder;

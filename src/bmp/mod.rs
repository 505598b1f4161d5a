//! Uncompressed Windows bitmap (BMP) surface.
//!
//! Covers exactly the layout this codec consumes: a fixed 54-byte header,
//! 24-bit BGR pixels, rows padded to a multiple of four bytes, stored
//! bottom-up or top-down.

pub mod decoder;
pub mod encoder;
pub mod header;

pub use decoder::BmpDecoder;
pub use encoder::BmpEncoder;
pub use header::BmpHeader;

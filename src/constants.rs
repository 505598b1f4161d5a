// The size of the fixed bitmap header carried unmodified through both the
// IM3 container and any reconstructed bitmap.
pub const BMP_HEADER_SIZE: usize = 54;

// Byte offsets of the two little-endian 32-bit header fields this codec
// interprets. Everything else in the header is opaque.
pub const WIDTH_FIELD_OFFSET: usize = 18;
pub const HEIGHT_FIELD_OFFSET: usize = 22;

// Bit 7 of the height field's most significant byte selects the row order:
// clear = bottom-up storage, set = top-down.
pub const ORIENTATION_BYTE_OFFSET: usize = 25;
pub const ORIENTATION_BIT_MASK: u8 = 0x80;

// Source pixels are 24-bit BGR.
pub const BYTES_PER_PIXEL: usize = 3;

// Each bitmap pixel row is padded to a multiple of this many bytes.
pub const ROW_ALIGNMENT: usize = 4;

// Compressed blocks span this many pixels along each axis.
pub const BLOCK_DIM: usize = 2;

// Each block compresses to one big-endian code of this many bytes.
pub const CODE_SIZE: usize = 2;

// Bits retained per channel inside a packed code, concatenated MSB-first:
// Y occupies the top 6 bits, Cb the next 5, Cr the low 5.
pub const Y_BITS: u32 = 6;
pub const CB_BITS: u32 = 5;
pub const CR_BITS: u32 = 5;

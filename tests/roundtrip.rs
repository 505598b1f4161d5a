// End-to-end codec scenarios: losslessness of the BMP I/O layer, container
// geometry, header preservation, and the lossy compress/decompress pipeline.

use im3_rs::bmp::{BmpDecoder, BmpEncoder};
use im3_rs::im3::{Im3Decoder, Im3Encoder};

const HEADER_SIZE: usize = 54;

/// Builds a complete 24-bit BMP with a realistic header. `pixel` yields the
/// (r, g, b) of each logical (row, col), row 0 at the top of the image.
fn build_bmp(
    width: u32,
    height: u32,
    bottom_up: bool,
    pixel: impl Fn(usize, usize) -> (u8, u8, u8),
) -> Vec<u8> {
    let padding = (4 - (width as usize * 3) % 4) % 4;
    let stride = width as usize * 3 + padding;
    let image_size = stride * height as usize;
    let file_size = HEADER_SIZE + image_size;

    let mut bytes = Vec::with_capacity(file_size);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&(file_size as u32).to_le_bytes());
    bytes.extend_from_slice(&[0; 4]); // reserved
    bytes.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // pixel array offset
    bytes.extend_from_slice(&40u32.to_le_bytes()); // info header size
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    let stored_height = if bottom_up {
        height as i32
    } else {
        -(height as i32)
    };
    bytes.extend_from_slice(&stored_height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // planes
    bytes.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    bytes.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    bytes.extend_from_slice(&(image_size as u32).to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes()); // x pixels per meter
    bytes.extend_from_slice(&2835u32.to_le_bytes()); // y pixels per meter
    bytes.extend_from_slice(&0u32.to_le_bytes()); // colors used
    bytes.extend_from_slice(&0u32.to_le_bytes()); // important colors
    assert_eq!(bytes.len(), HEADER_SIZE);

    for disk_row in 0..height as usize {
        let row = if bottom_up {
            height as usize - 1 - disk_row
        } else {
            disk_row
        };
        for col in 0..width as usize {
            let (r, g, b) = pixel(row, col);
            bytes.extend_from_slice(&[b, g, r]);
        }
        bytes.extend_from_slice(&vec![0u8; padding]);
    }
    bytes
}

fn compress(bmp: &[u8]) -> Vec<u8> {
    let mut decoder = BmpDecoder::new(bmp);
    decoder.read_header().expect("header");
    let raster = decoder.decode().expect("decode");
    let header = decoder.header().expect("header available");

    let mut dest = vec![0u8; Im3Encoder::encoded_size(&header.info())];
    let len = Im3Encoder::new(&mut dest)
        .encode(header, &raster)
        .expect("encode");
    dest.truncate(len);
    dest
}

fn decompress(container: &[u8]) -> Vec<u8> {
    let mut decoder = Im3Decoder::new(container);
    decoder.read_header().expect("header");
    let ycbcr = decoder.decode().expect("decode");
    let header = decoder.header().expect("header available");
    let raster = ycbcr.into_rgb();

    let mut dest = vec![0u8; BmpEncoder::encoded_size(&header.info())];
    let len = BmpEncoder::new(&mut dest)
        .encode(header, &raster)
        .expect("encode");
    dest.truncate(len);
    dest
}

#[test]
fn test_bmp_io_roundtrip_is_lossless() {
    for bottom_up in [true, false] {
        // Width 3 exercises padding, width 4 a padding-free row.
        for width in [3u32, 4] {
            let source = build_bmp(width, 5, bottom_up, |row, col| {
                ((row * 16 + col) as u8, (col * 31) as u8, (row * 47) as u8)
            });

            let mut decoder = BmpDecoder::new(&source);
            decoder.read_header().unwrap();
            let raster = decoder.decode().unwrap();
            let header = decoder.header().unwrap();

            let mut dest = vec![0u8; BmpEncoder::encoded_size(&header.info())];
            let len = BmpEncoder::new(&mut dest).encode(header, &raster).unwrap();
            assert_eq!(
                &dest[..len],
                &source[..],
                "width {width}, bottom_up {bottom_up}"
            );
        }
    }
}

#[test]
fn test_red_4x4_end_to_end() {
    let source = build_bmp(4, 4, true, |_, _| (255, 0, 0));

    let container = compress(&source);
    // 4 blocks x 2 bytes of payload after the 54-byte header.
    assert_eq!(container.len(), HEADER_SIZE + 8);
    assert_eq!(&container[..HEADER_SIZE], &source[..HEADER_SIZE]);
    // Red quantizes to YCbCr (76, 84, 255), packed as 0x4D5F.
    for chunk in container[HEADER_SIZE..].chunks(2) {
        assert_eq!(chunk, &[0x4D, 0x5F]);
    }

    let reconstructed = decompress(&container);
    assert_eq!(&reconstructed[..HEADER_SIZE], &source[..HEADER_SIZE]);

    let mut decoder = BmpDecoder::new(&reconstructed);
    decoder.read_header().unwrap();
    let raster = decoder.decode().unwrap();
    for row in 0..4 {
        for col in 0..4 {
            // Dequantized red: close to, but not exactly, the source color.
            assert_eq!(raster.rgb(row, col), (244, 6, 0));
        }
    }
}

#[test]
fn test_container_size_law() {
    for (width, height) in [(4u32, 4u32), (5, 4), (4, 5), (5, 5), (1, 1)] {
        let source = build_bmp(width, height, true, |row, col| {
            ((row * 10) as u8, (col * 10) as u8, 0)
        });
        let container = compress(&source);
        let expected =
            HEADER_SIZE + 2 * width.div_ceil(2) as usize * height.div_ceil(2) as usize;
        assert_eq!(container.len(), expected, "{width}x{height}");
    }
}

#[test]
fn test_decoded_blocks_are_uniform() {
    let source = build_bmp(6, 6, true, |row, col| {
        ((row * 40) as u8, (col * 40) as u8, 100)
    });
    let container = compress(&source);

    let mut decoder = Im3Decoder::new(&container);
    decoder.read_header().unwrap();
    let ycbcr = decoder.decode().unwrap();

    for block_row in (0..6).step_by(2) {
        for block_col in (0..6).step_by(2) {
            let expected = ycbcr.sample(block_row, block_col);
            for dy in 0..2 {
                for dx in 0..2 {
                    assert_eq!(
                        ycbcr.sample(block_row + dy, block_col + dx),
                        expected,
                        "block ({block_row}, {block_col})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_odd_dimensions_survive_the_full_pipeline() {
    let source = build_bmp(5, 3, true, |row, col| {
        ((row * 50) as u8, (col * 30) as u8, 200)
    });
    let container = compress(&source);
    assert_eq!(container.len(), HEADER_SIZE + 2 * 3 * 2);

    let reconstructed = decompress(&container);
    let mut decoder = BmpDecoder::new(&reconstructed);
    decoder.read_header().unwrap();
    let raster = decoder.decode().unwrap();
    assert_eq!(raster.width(), 5);
    assert_eq!(raster.height(), 3);
    // Edge pixels share their block's top-left sample.
    assert_eq!(raster.rgb(2, 3), raster.rgb(2, 2));
    assert_eq!(raster.rgb(1, 4), raster.rgb(0, 4));
}

#[test]
fn test_opaque_header_bytes_are_preserved() {
    let mut source = build_bmp(4, 2, false, |_, _| (10, 200, 60));
    // Scribble on header bytes the codec never interprets.
    source[6] = 0xDE;
    source[7] = 0xAD;
    source[30] = 0x07;
    source[49] = 0x99;

    let container = compress(&source);
    assert_eq!(&container[..HEADER_SIZE], &source[..HEADER_SIZE]);

    let reconstructed = decompress(&container);
    assert_eq!(&reconstructed[..HEADER_SIZE], &source[..HEADER_SIZE]);
}

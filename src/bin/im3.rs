//! im3 CLI - lossy bitmap compression utility.
//!
//! Compresses 24-bit uncompressed BMP images into the IM3 container format
//! (2x2 chroma subsampling plus bit-depth truncation) and reconstructs
//! lossy bitmaps from IM3 files.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use im3_rs::bmp::{BmpDecoder, BmpEncoder, BmpHeader};
use im3_rs::im3::{Im3Decoder, Im3Encoder};
use im3_rs::{Im3Error, ImageInfo};

/// Lossy BMP compressor producing IM3 containers
#[derive(Parser)]
#[command(name = "im3")]
#[command(author = "im3-rs contributors")]
#[command(version)]
#[command(about = "Compress BMP images into IM3 containers and back", long_about = None)]
#[command(after_help = "EXAMPLES:
    im3 compress -i photo.bmp
    im3 compress -i photo.bmp -o photo.im3
    im3 decompress -i photo.im3
    im3 roundtrip -i photo.bmp
    im3 info -i photo.im3

FORMATS:
    Input:  24-bit uncompressed BMP (.bmp), IM3 container (.im3)
    Output: IM3 container, reconstructed (lossy) BMP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress an uncompressed 24-bit BMP into an IM3 container
    ///
    /// Reports the original size, compressed size, and compression ratio.
    #[command(visible_alias = "c")]
    Compress {
        /// Input BMP file
        #[arg(short, long, help = "Path to the input bitmap")]
        input: PathBuf,

        /// Output IM3 file (defaults to the input with an .im3 extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reconstruct a (lossy) BMP from an IM3 container
    #[command(visible_alias = "d")]
    Decompress {
        /// Input IM3 file
        #[arg(short, long, help = "Path to the compressed container")]
        input: PathBuf,

        /// Output BMP file (defaults to <input>_decompressed.bmp)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compress and immediately reconstruct, reporting both sizes
    #[command(visible_alias = "r")]
    Roundtrip {
        /// Input BMP file
        #[arg(short, long, help = "Path to the input bitmap")]
        input: PathBuf,
    },

    /// Display geometry and layout information for a BMP or IM3 file
    #[command(visible_alias = "i")]
    Info {
        /// Input file path
        #[arg(short, long, help = "Path to the file to inspect")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => compress(&input, output).map(|_| ()),
        Commands::Decompress { input, output } => decompress(&input, output).map(|_| ()),
        Commands::Roundtrip { input } => roundtrip(&input),
        Commands::Info { input } => show_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn compress(
    input: &Path,
    output: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data = fs::read(input).map_err(Im3Error::Io)?;

    let mut decoder = BmpDecoder::new(&data);
    decoder.read_header()?;
    let raster = decoder.decode()?;
    let header = decoder.header().ok_or(Im3Error::InvalidOperation)?;
    let info = header.info();

    let mut dest = vec![0u8; Im3Encoder::encoded_size(&info)];
    let len = Im3Encoder::new(&mut dest).encode(header, &raster)?;
    dest.truncate(len);

    let output = output.unwrap_or_else(|| input.with_extension("im3"));
    fs::write(&output, &dest).map_err(Im3Error::Io)?;

    println!(
        "✓ Compressed {}x{} image to {:?}",
        info.width, info.height, output
    );
    println!("  Original:   {} bytes", data.len());
    println!("  Compressed: {} bytes", dest.len());
    println!("  Ratio:      {:.2}", data.len() as f64 / dest.len() as f64);
    Ok(output)
}

fn decompress(
    input: &Path,
    output: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data = fs::read(input).map_err(Im3Error::Io)?;

    let mut decoder = Im3Decoder::new(&data);
    decoder.read_header()?;
    let ycbcr = decoder.decode()?;
    let header = decoder.header().ok_or(Im3Error::InvalidOperation)?;
    let info = header.info();
    let raster = ycbcr.into_rgb();

    let mut dest = vec![0u8; BmpEncoder::encoded_size(&info)];
    let len = BmpEncoder::new(&mut dest).encode(header, &raster)?;
    dest.truncate(len);

    let output = output.unwrap_or_else(|| decompressed_name(input));
    fs::write(&output, &dest).map_err(Im3Error::Io)?;

    println!(
        "✓ Reconstructed {}x{} bitmap to {:?}",
        info.width, info.height, output
    );
    Ok(output)
}

fn roundtrip(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let compressed = compress(input, None)?;
    let reconstructed = decompress(&compressed, None)?;

    let original_size = fs::metadata(input)?.len();
    let compressed_size = fs::metadata(&compressed)?.len();
    println!(
        "✓ Round trip complete: {:?} -> {:?} -> {:?} ({:.2}:1)",
        input,
        compressed,
        reconstructed,
        original_size as f64 / compressed_size as f64
    );
    Ok(())
}

fn show_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input).map_err(Im3Error::Io)?;
    let header = BmpHeader::parse(&data)?;
    let info = header.info();

    println!("File: {:?}", input);
    println!("Size: {} bytes", data.len());
    println!();

    if is_im3(input) {
        println!("Format: IM3 container");
        println!("  Dimensions: {}x{}", info.width, info.height);
        println!("  Row order:  {}", row_order(&info));
        println!("  Payload:    {} bytes", Im3Encoder::payload_size(&info));
    } else {
        println!("Format: BMP (24-bit uncompressed)");
        println!("  Dimensions: {}x{}", info.width, info.height);
        println!("  Row order:  {}", row_order(&info));
        println!("  Row padding: {} bytes", info.row_padding());
        println!(
            "  Pixel data: {} bytes",
            info.row_stride() * info.height as usize
        );
    }

    Ok(())
}

// Internal helpers

// Both formats open with the same 54-byte header, so the extension is the
// only way to tell them apart.
fn is_im3(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("im3"))
}

fn row_order(info: &ImageInfo) -> &'static str {
    if info.bottom_up {
        "bottom-up"
    } else {
        "top-down"
    }
}

fn decompressed_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_decompressed.bmp"))
}

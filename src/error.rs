use thiserror::Error;

#[derive(Error, Debug)]
pub enum Im3Error {
    #[error("Header too short: 54 bytes required")]
    HeaderTooShort,
    #[error("Invalid image width")]
    InvalidWidth,
    #[error("Unexpected end of pixel data")]
    UnexpectedEndOfPixelData,
    #[error("Unexpected end of compressed payload")]
    UnexpectedEndOfPayload,
    #[error("Destination buffer too small")]
    DestinationTooSmall,
    #[error("Invalid operation: header not read")]
    InvalidOperation,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

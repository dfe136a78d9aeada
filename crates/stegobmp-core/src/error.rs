use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a buffer that is not a BMP at all, or one whose fixed header fields make no sense
    #[error("Not a valid BMP file: {0}")]
    InvalidFormat(&'static str),

    /// Represents a BMP whose declared dimensions need more bytes than the buffer holds
    #[error("BMP data is truncated: {required} bytes required but only {available} available")]
    TruncatedData { required: usize, available: usize },

    /// Represents a BMP variant other than uncompressed 24-bit, only raised in strict header mode
    #[error("Unsupported BMP variant: {bits_per_pixel} bits per pixel, compression {compression}")]
    UnsupportedFormat {
        bits_per_pixel: u16,
        compression: u32,
    },

    /// Represents an image whose pixel buffer would exceed the configured limit
    #[error("Image of {width}x{height} exceeds the pixel data limit of {limit} bytes")]
    ImageTooLarge {
        width: i32,
        height: i32,
        limit: usize,
    },

    /// Represents a pixel buffer that does not match the dimensions it is serialized with
    #[error("Pixel buffer of {actual} bytes does not match the expected {expected} bytes")]
    PixelBufferMismatch { expected: usize, actual: usize },

    /// Represents a pattern id that is not one of the known generative patterns
    #[error("Unknown pattern id: {0}")]
    InvalidPattern(String),

    /// Represents a payload that does not fit into the carrier bits after the pixel offset
    #[error(
        "Capacity Error: the payload needs {required} carrier bits but the image provides only {available}"
    )]
    InsufficientCapacity { required: usize, available: usize },

    /// Represents a decoded length header that is out of the plausible range
    #[error("No hidden message found, decoded length {0} is out of range")]
    CorruptPayload(usize),

    /// Represents the error of invalid UTF-8 text data found inside of a hidden message
    #[error("Invalid text data found inside a message")]
    InvalidEncoding(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding a preview image.
    #[error("Preview encoding error")]
    PreviewEncodingError,

    /// Represents a failure when loading or storing the history document
    #[error("History store error: {0}")]
    HistoryError(#[from] serde_json::Error),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

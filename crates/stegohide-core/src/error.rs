use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a carrier without any pixels or with a channel layout other than 1 to 4 channels
    #[error("Invalid image dimensions {width}x{height} with {channels} channel(s)")]
    InvalidDimensions {
        width: u32,
        height: u32,
        channels: u8,
    },

    /// Represents raw pixel data that does not match the declared dimensions
    #[error("Pixel data has {actual} bytes, but the dimensions require {expected} bytes")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Represents a payload that does not fit into the carrier, both numbers are in bits
    #[error(
        "Capacity Error: the payload requires {required} bits, but the image offers only {available} bits. \
         Try a larger image or a shorter message."
    )]
    PayloadTooLarge { required: usize, available: usize },

    /// Represents a payload that contains the end marker and therefore could not be unveiled again
    #[error("The payload contains the end marker at byte offset {offset} and cannot be hidden")]
    PayloadContainsDelimiter { offset: usize },

    /// Represents an unveil of an image that does not carry any hidden data
    #[error("No hidden data found in this image")]
    NoHiddenDataFound,

    /// Represents an unsupported carrier media. For example, a WAV file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a target file format that would destroy the hidden bits, like JPEG
    #[error("Target file must be a PNG image, lossy formats destroy the hidden data")]
    LossyTarget,

    /// Represents the error of invalid UTF-8 text data found inside of a text message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The carrier image was not set on the builder.
    #[error("No carrier media set")]
    CarrierNotSet,

    /// The output file was not set on the builder.
    #[error("No target file set")]
    TargetNotSet,

    /// Neither a message nor a data file was given to hide.
    #[error("API Error: Missing message or data file")]
    MissingMessage,
}

use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a message whose frame needs more carrier bits than the buffer offers
    #[error("Message too large: the frame requires {required} bits but only {available} are available")]
    MessageTooLarge { required: usize, available: usize },

    /// Represents a payload whose bit length does not fit the 32 bit length header,
    /// regardless of the carrier size
    #[error("Payload too long: {bits} bits exceed the header limit of {max} bits")]
    PayloadTooLong { bits: usize, max: usize },

    /// Represents a carrier that ends before the frame it announces is complete
    #[error("Incomplete data: {required} carrier bits are required but only {available} are available")]
    IncompleteData { required: usize, available: usize },

    /// Represents a recovered length header that is zero or points past the carrier end.
    /// Typical for carriers that never held a message or were damaged beyond repair.
    #[error("Invalid framing: header announces {announced} payload bits, but at most {max} fit the carrier")]
    InvalidFraming { announced: usize, max: usize },

    /// Internal consistency check after the payload extraction, not caused by bad input
    #[error("Frame length mismatch: expected {expected} payload bits, recovered {recovered}")]
    FrameLengthMismatch { expected: usize, recovered: usize },

    /// Represents a pixel buffer that is not a whole number of RGBA pixels
    #[error("Malformed pixel buffer: {0} bytes is not a multiple of 4 channels")]
    MalformedPixelBuffer(usize),

    /// Represents a character that does not fit the configured 8 bit text encoding
    #[error("Character {character:?} at position {position} cannot be encoded as a single byte")]
    UnencodableCharacter { character: char, position: usize },

    /// Represents the error of invalid UTF-8 text data found inside of a text only message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a target file format that would destroy the hidden bits on save
    #[error("Target format is lossy and would destroy the hidden message, use PNG instead")]
    LossyTargetFormat,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    #[error(
"Capacity Error: The provided input image with the dimensions {0}x{1} is too small to accept the message.
                The image dimensions required are at least {2}x{3}"
    )]
    ImageCapacityError(usize, usize, usize, usize),

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

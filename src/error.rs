use std::fmt::Display;

/// Structural violation of the PPM header or payload grammar.
#[derive(Debug)]
pub enum FormatError {
    UnexpectedEndOfStream(&'static str),
    InvalidMagicNumber([u8; 2]),
    MissingSeparator(&'static str),
    InvalidDigit(&'static str, u8),
    HeaderValueTooLarge(&'static str),
    MissingHeaderTerminator(u8),
    UnexpectedEndOfPixelData { expected: usize, actual: usize },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfStream(token_name) => {
                write!(f, "Unexpected end of stream while reading {}", token_name)
            }
            Self::InvalidMagicNumber(bytes) => {
                write!(
                    f,
                    "Invalid magic number 0x{:02X} 0x{:02X}, expected 'P3' or 'P6'",
                    bytes[0], bytes[1]
                )
            }
            Self::MissingSeparator(token_name) => {
                write!(
                    f,
                    "Expected whitespace or comment before {}",
                    token_name
                )
            }
            Self::InvalidDigit(token_name, byte) => {
                write!(
                    f,
                    "Expected decimal digit in {}, found byte 0x{:02X}",
                    token_name, byte
                )
            }
            Self::HeaderValueTooLarge(token_name) => {
                write!(f, "Value of {} is too large", token_name)
            }
            Self::MissingHeaderTerminator(byte) => {
                write!(
                    f,
                    "Expected single whitespace byte after header, found byte 0x{:02X}",
                    byte
                )
            }
            Self::UnexpectedEndOfPixelData { expected, actual } => {
                write!(
                    f,
                    "Pixel data ended after {} of {} expected bytes",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Inconsistency detected while serializing an image.
#[derive(Debug)]
pub enum EncodingError {
    PixelCountMismatch {
        width: u32,
        height: u32,
        pixel_count: usize,
    },
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PixelCountMismatch {
                width,
                height,
                pixel_count,
            } => {
                write!(
                    f,
                    "Image declares {}x{} pixels but carries {}",
                    width, height, pixel_count
                )
            }
        }
    }
}

impl std::error::Error for EncodingError {}

#[derive(Debug)]
pub enum Error {
    Format(FormatError),
    Encoding(EncodingError),
    InputFileIsNotAPpmFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadImageData(std::io::Error),
    FailedToWriteImageData(std::io::Error),
}

impl From<FormatError> for Error {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

impl From<EncodingError> for Error {
    fn from(value: EncodingError) -> Self {
        Self::Encoding(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(error) => {
                write!(f, "Input is not a valid PPM file: {}", error)
            }
            Self::Encoding(error) => {
                write!(f, "Image can not be encoded: {}", error)
            }
            Self::InputFileIsNotAPpmFile(path) => {
                write!(f, "Input file '{}' does not have a .ppm extension", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadImageData(error) => {
                write!(f, "Failed to read image data: {}", error)
            }
            Self::FailedToWriteImageData(error) => {
                write!(f, "Failed to write image data: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}

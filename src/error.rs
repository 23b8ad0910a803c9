use std::fmt;

/// Errors raised while converting a FIT file to CSV
///
/// Every variant means the same thing to a caller: the conversion failed and
/// no usable output file was produced.
#[derive(Debug)]
pub enum ConversionError {
    /// I/O errors (missing input, permissions, disk full)
    Io(std::io::Error),
    /// FIT decoding errors (corrupt data, unsupported protocol)
    Decode(String),
    /// CSV serialization errors
    #[cfg(feature = "csv")]
    Csv(csv::Error),
    /// Export errors with context
    Export(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Io(err) => write!(f, "I/O error: {}", err),
            ConversionError::Decode(msg) => write!(f, "Decode error: {}", msg),
            #[cfg(feature = "csv")]
            ConversionError::Csv(err) => write!(f, "CSV error: {}", err),
            ConversionError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::Io(err) => Some(err),
            #[cfg(feature = "csv")]
            ConversionError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::Io(err)
    }
}

impl From<fitparser::Error> for ConversionError {
    fn from(err: fitparser::Error) -> Self {
        ConversionError::Decode(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        ConversionError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

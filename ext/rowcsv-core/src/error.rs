use thiserror::Error;

/// Failure to turn a single record into a numeric CSV line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The record itself was absent
    #[error("Missing record: cannot convert an absent record to a CSV line")]
    MissingRecord,

    /// A field's text form did not parse as a double
    #[error("Non-numeric field at position {position}: '{raw_text}' (only double values are supported)")]
    NonNumericField { position: usize, raw_text: String },
}

/// Result type alias for record conversion
pub type Result<T> = std::result::Result<T, ConversionError>;

impl ConversionError {
    /// Create a new non-numeric field error
    pub fn non_numeric<S: Into<String>>(position: usize, raw_text: S) -> Self {
        ConversionError::NonNumericField {
            position,
            raw_text: raw_text.into(),
        }
    }

    /// Position of the offending field, if the error concerns a field
    pub fn position(&self) -> Option<usize> {
        match self {
            ConversionError::NonNumericField { position, .. } => Some(*position),
            ConversionError::MissingRecord => None,
        }
    }

    /// Raw text of the offending field, if the error concerns a field
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            ConversionError::NonNumericField { raw_text, .. } => Some(raw_text),
            ConversionError::MissingRecord => None,
        }
    }
}

/// Invalid converter configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The delimiter could collide with the text of a canonical double
    #[error("Invalid delimiter: {0:?} can appear inside a numeric value or is whitespace")]
    InvalidDelimiter(char),
}

/// A record in a batch failed and the batch was aborted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Record {record_index} could not be converted: {source}")]
pub struct BatchError {
    pub record_index: usize,
    #[source]
    pub source: ConversionError,
}

//! Record to numeric CSV line conversion

use crate::error::{ConfigError, ConversionError, Result};
use crate::numeric::{parse_field, write_canonical};
use crate::record::Record;
use crate::value::NULL_TEXT;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

// Every character a canonical double can contain
const NUMERIC_CHARS: &str = "0123456789.+-eENaInfity";

// Upper bound on the line buffer reserved up front
const MAX_PREALLOCATED_LINE: usize = 64 * 1024;

/// Builder for creating a configured RowConverter
#[derive(Debug, Clone)]
pub struct RowConverterBuilder {
    delimiter: char,
}

impl Default for RowConverterBuilder {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl RowConverterBuilder {
    /// Create a new RowConverterBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Build a RowConverter with the configured settings
    pub fn build(self) -> std::result::Result<RowConverter, ConfigError> {
        if self.delimiter.is_whitespace() || NUMERIC_CHARS.contains(self.delimiter) {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }

        Ok(RowConverter {
            delimiter: self.delimiter,
        })
    }
}

/// Converts records into lines of canonical doubles
///
/// A converter holds only its configuration, so it is `Copy` and can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowConverter {
    delimiter: char,
}

impl Default for RowConverter {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl RowConverter {
    /// Create a converter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a converter
    pub fn builder() -> RowConverterBuilder {
        RowConverterBuilder::new()
    }

    /// The field delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Convert a possibly absent record
    ///
    /// `None` fails with [`ConversionError::MissingRecord`].
    pub fn convert<R: Record + ?Sized>(&self, record: Option<&R>) -> Result<String> {
        match record {
            Some(record) => self.convert_record(record),
            None => Err(ConversionError::MissingRecord),
        }
    }

    /// Convert a record into one line of canonical doubles
    ///
    /// Each field's natural text is parsed as a double and written back in
    /// canonical form. Null fields are judged by the text `null` and are
    /// therefore rejected. The first field that does not parse aborts the
    /// conversion and nothing is returned for the record.
    pub fn convert_record<R: Record + ?Sized>(&self, record: &R) -> Result<String> {
        let len = record.len();
        let mut line = String::with_capacity(len.saturating_mul(8).min(MAX_PREALLOCATED_LINE));

        for position in 0..len {
            let text = record.field_text(position);
            let raw_text = text.as_deref().unwrap_or(NULL_TEXT);

            let value = parse_field(raw_text)
                .ok_or_else(|| ConversionError::non_numeric(position, raw_text))?;

            if position > 0 {
                line.push(self.delimiter);
            }
            write_canonical(&mut line, value);
        }

        Ok(line)
    }
}

/// Convert a possibly absent record with the default comma delimiter
pub fn convert<R: Record + ?Sized>(record: Option<&R>) -> Result<String> {
    RowConverter::default().convert(record)
}

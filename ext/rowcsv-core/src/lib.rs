//! Conversion of tabular records into numeric CSV lines
//!
//! `rowcsv-core` turns one record, an ordered sequence of heterogeneous
//! fields, into a single line of comma separated canonical doubles that a
//! matrix ingestion pipeline can read without further checks.
//!
//! # Key Components
//!
//! - **Conversion**: [`convert`] and [`RowConverter`]
//!   - Every field's natural text is parsed as a double and re-rendered in
//!     canonical form, so `1`, `1.0` and `1.00` all become `1.0`
//!   - All-or-nothing per record: the first non-numeric field aborts with
//!     its position and raw text
//!   - Null fields are rejected, never replaced by a default
//!
//! - **Records**: the [`Record`] and [`FieldText`] capability traits
//!   - Implemented for slices, vectors and arrays of strings, numbers,
//!     optional values and [`FieldValue`]
//!   - Framework row types plug in by implementing [`Record`]
//!
//! - **Values**: [`FieldValue`], a scalar value model for dynamically typed rows
//!
//! - **Batches**: [`RowConverter::convert_all`] and
//!   [`RowConverter::par_convert_all`] with a [`FailurePolicy`]
//!
//! # Example
//!
//! ```
//! use rowcsv_core::{convert, ConversionError};
//!
//! let record = vec!["1", "2.5", "-3"];
//! assert_eq!(convert(Some(&record)).unwrap(), "1.0,2.5,-3.0");
//!
//! let bad = vec!["1", "abc"];
//! let err = convert(Some(&bad)).unwrap_err();
//! assert_eq!(err, ConversionError::non_numeric(1, "abc"));
//! ```

pub mod batch;
pub mod converter;
pub mod error;
pub mod numeric;
pub mod record;
pub mod value;

pub use batch::{BatchOutput, FailurePolicy, Rejected};
pub use converter::{convert, RowConverter, RowConverterBuilder, DEFAULT_DELIMITER};
pub use error::{BatchError, ConfigError, ConversionError, Result};
pub use record::{FieldText, Record};
pub use value::{FieldValue, NULL_TEXT};

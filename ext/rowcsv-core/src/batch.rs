//! Helpers for mapping stages that convert many records at once

use crate::converter::RowConverter;
use crate::error::{BatchError, ConversionError};
use crate::record::Record;
use rayon::prelude::*;
use tracing::{debug, warn};

/// What to do with a record that fails to convert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing record
    #[default]
    Abort,
    /// Leave the record out and report it in [`BatchOutput::rejected`]
    Skip,
}

/// A record left out of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub record_index: usize,
    pub error: ConversionError,
}

/// Lines produced from a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutput {
    pub lines: Vec<String>,
    pub rejected: Vec<Rejected>,
}

impl BatchOutput {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            rejected: Vec::new(),
        }
    }

    fn accept(
        &mut self,
        record_index: usize,
        result: Result<String, ConversionError>,
        policy: FailurePolicy,
    ) -> Result<(), BatchError> {
        match result {
            Ok(line) => self.lines.push(line),
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(BatchError {
                        record_index,
                        source,
                    })
                }
                FailurePolicy::Skip => {
                    warn!(record_index, error = %source, "skipping record");
                    self.rejected.push(Rejected {
                        record_index,
                        error: source,
                    });
                }
            },
        }
        Ok(())
    }
}

impl RowConverter {
    /// Convert records one after another
    pub fn convert_all<I>(&self, records: I, policy: FailurePolicy) -> Result<BatchOutput, BatchError>
    where
        I: IntoIterator,
        I::Item: Record,
    {
        let records = records.into_iter();
        let mut output = BatchOutput::with_capacity(records.size_hint().0);

        for (record_index, record) in records.enumerate() {
            output.accept(record_index, self.convert_record(&record), policy)?;
        }

        debug!(
            converted = output.lines.len(),
            rejected = output.rejected.len(),
            "batch converted"
        );
        Ok(output)
    }

    /// Convert records on the rayon thread pool
    ///
    /// Produces exactly what [`RowConverter::convert_all`] produces for the
    /// same input, including which failure is reported under
    /// [`FailurePolicy::Abort`].
    pub fn par_convert_all<R>(&self, records: &[R], policy: FailurePolicy) -> Result<BatchOutput, BatchError>
    where
        R: Record + Sync,
    {
        let results: Vec<Result<String, ConversionError>> = records
            .par_iter()
            .map(|record| self.convert_record(record))
            .collect();

        let mut output = BatchOutput::with_capacity(results.len());
        for (record_index, result) in results.into_iter().enumerate() {
            output.accept(record_index, result, policy)?;
        }

        debug!(
            converted = output.lines.len(),
            rejected = output.rejected.len(),
            "parallel batch converted"
        );
        Ok(output)
    }
}

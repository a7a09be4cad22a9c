//! CSV serialization of benchmark records.
//!
//! One row per case, compatible with the downstream analysis tooling:
//!
//! ```text
//! FunctionName,Method,NumIntervals,Result,AbsoluteError,ExecutionTime_ms
//! ```
//!
//! An invalid outcome renders the literal token `INVALID_N` in the
//! Result and AbsoluteError columns; the timing column is kept, since the
//! rejected call still cost wall-clock time.

use std::io::Write;

use serde::Serialize;

use super::runner::BenchmarkRecord;

/// The report header, in column order.
pub const CSV_HEADER: &str =
    "FunctionName,Method,NumIntervals,Result,AbsoluteError,ExecutionTime_ms";

/// Token written in place of a value for an invalid case.
const INVALID_TOKEN: &str = "INVALID_N";

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "FunctionName")]
    function_name: &'a str,
    #[serde(rename = "Method")]
    method: &'static str,
    #[serde(rename = "NumIntervals")]
    num_intervals: i64,
    #[serde(rename = "Result")]
    result: String,
    #[serde(rename = "AbsoluteError")]
    absolute_error: String,
    #[serde(rename = "ExecutionTime_ms")]
    execution_time_ms: String,
}

impl<'a> From<&'a BenchmarkRecord> for CsvRow<'a> {
    fn from(record: &'a BenchmarkRecord) -> Self {
        let (result, absolute_error) = if record.result.is_nan() {
            (INVALID_TOKEN.to_string(), INVALID_TOKEN.to_string())
        } else {
            (
                format!("{:.12}", record.result),
                format!("{:.12e}", record.absolute_error),
            )
        };

        Self {
            function_name: record.function_name,
            method: record.method.label(),
            num_intervals: record.intervals,
            result,
            absolute_error,
            execution_time_ms: format!("{:.4}", record.execution_time_ms()),
        }
    }
}

/// Serialize `records` as CSV to `writer`, header first.
///
/// # Errors
///
/// Returns any underlying I/O or serialization error from the `csv`
/// writer.
pub fn write_report<W: Write>(records: &[BenchmarkRecord], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(CsvRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

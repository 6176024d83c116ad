//! CSV sink for timing records.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};

/// Column names of the performance file.
pub const CSV_HEADER: [&str; 3] = ["Algorithm", "InputSize", "ExecutionTimeNs"];

/// One timed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    #[serde(rename = "InputSize")]
    pub input_size: u64,
    #[serde(rename = "ExecutionTimeNs")]
    pub execution_time_ns: u64,
}

/// Comma-separated writer that always starts with [`CSV_HEADER`] and flushes after every record.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (or truncate) `path` and write the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: io::Write> CsvSink<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn append(&mut self, record: &PerfRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| AlgoError::Io(e.into_error()))
    }
}

//! Loader entry points and common types
//!
//! Every source ends up as a [`LoadedDataset`]: the records that survived
//! year normalization plus a [`LoadReport`] describing what was dropped.

use crate::record::PublicationRecord;
use crate::schema::ColumnMapping;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that make a dataset unusable
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Unsupported file extension: {0:?} (supported: {})", supported_extensions().join(", "))]
    UnsupportedFormat(String),

    #[error("Required column missing from header: {0}")]
    MissingColumn(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Source is not UTF-8 encoded ({0}); re-save it as UTF-8 or load the workbook directly")]
    Encoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Options controlling how a source is read
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Field delimiter for text sources; inferred from the extension when
    /// unset and ignored for workbooks
    pub delimiter: Option<u8>,

    /// Source column labels
    pub columns: ColumnMapping,
}

impl LoadOptions {
    /// Use a specific delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Use custom column labels
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }
}

/// Diagnostics gathered while loading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Data rows read from the source (header excluded)
    pub rows_read: usize,

    /// Rows that became records
    pub rows_loaded: usize,

    /// Rows dropped because the year could not be parsed
    pub rows_dropped: usize,

    /// 1-based data row numbers of the dropped rows
    pub dropped_rows: Vec<usize>,
}

impl LoadReport {
    /// Record a row that was kept
    pub(crate) fn keep(&mut self) {
        self.rows_read += 1;
        self.rows_loaded += 1;
    }

    /// Record a row dropped for an unparsable year
    pub(crate) fn drop_row(&mut self, row: usize) {
        self.rows_read += 1;
        self.rows_dropped += 1;
        self.dropped_rows.push(row);
    }
}

/// Records loaded from a source, in source order
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub records: Vec<PublicationRecord>,
    pub report: LoadReport,
}

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Tsv,
    /// Excel or OpenDocument workbook; the first worksheet is read
    Workbook,
}

const CSV_EXTENSIONS: &[&str] = &["csv", "txt"];
const TSV_EXTENSIONS: &[&str] = &["tsv", "tab"];
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

impl SourceFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        let ext = extension.as_str();
        if CSV_EXTENSIONS.contains(&ext) {
            Ok(SourceFormat::Csv)
        } else if TSV_EXTENSIONS.contains(&ext) {
            Ok(SourceFormat::Tsv)
        } else if WORKBOOK_EXTENSIONS.contains(&ext) {
            Ok(SourceFormat::Workbook)
        } else {
            Err(LoadError::UnsupportedFormat(extension))
        }
    }

    /// Default delimiter for text formats
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            SourceFormat::Csv => Some(b','),
            SourceFormat::Tsv => Some(b'\t'),
            SourceFormat::Workbook => None,
        }
    }
}

/// Load a dataset from a file, picking the reader from its extension
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<LoadedDataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let format = SourceFormat::from_path(path)?;
    let dataset = match format.delimiter() {
        Some(default_delimiter) => {
            let delimiter = options.delimiter.unwrap_or(default_delimiter);
            let file =
                std::fs::File::open(path).map_err(|e| LoadError::OpenFailed(e.to_string()))?;
            crate::csv_reader::read_delimited(file, delimiter, &options.columns)?
        }
        None => crate::workbook_reader::read_workbook(path, &options.columns)?,
    };

    tracing::info!(
        path = %path.display(),
        format = ?format,
        rows_read = dataset.report.rows_read,
        rows_loaded = dataset.report.rows_loaded,
        rows_dropped = dataset.report.rows_dropped,
        "Loaded publication dataset"
    );

    Ok(dataset)
}

/// Load a dataset from any byte stream
///
/// The stream is read as comma-separated unless `options.delimiter` says
/// otherwise.
pub fn load_reader<R: std::io::Read>(reader: R, options: &LoadOptions) -> LoadResult<LoadedDataset> {
    let delimiter = options.delimiter.unwrap_or(b',');
    crate::csv_reader::read_delimited(reader, delimiter, &options.columns)
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    CSV_EXTENSIONS
        .iter()
        .chain(TSV_EXTENSIONS)
        .chain(WORKBOOK_EXTENSIONS)
        .copied()
        .collect()
}

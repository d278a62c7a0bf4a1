//! Delimited text reader (CSV, TSV)

use crate::reader::{LoadError, LoadReport, LoadResult, LoadedDataset};
use crate::record::PublicationRecord;
use crate::schema::{ColumnIndices, ColumnMapping};
use crate::year::parse_year;
use std::io::{BufReader, Read};

/// Read a delimited table with a header row into publication records.
///
/// Rows whose year cannot be parsed are dropped and counted. Short rows are
/// tolerated; missing trailing cells read as empty.
pub fn read_delimited<R: Read>(
    source: R,
    delimiter: u8,
    columns: &ColumnMapping,
) -> LoadResult<LoadedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(source));

    let indices = {
        let headers = reader
            .headers()
            .map_err(|e| record_error("header", e))?;
        columns.resolve(headers.iter())?
    };

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| record_error(&format!("row {}", row), e))?;

        match to_publication(&record, &indices) {
            Some(publication) => {
                records.push(publication);
                report.keep();
            }
            None => {
                tracing::debug!(
                    row,
                    year = record.get(indices.year).unwrap_or_default(),
                    "Dropping row with unparsable year"
                );
                report.drop_row(row);
            }
        }
    }

    if report.rows_dropped > 0 {
        tracing::warn!(
            dropped = report.rows_dropped,
            "Rows without a usable year were excluded"
        );
    }

    Ok(LoadedDataset { records, report })
}

fn to_publication(record: &csv::StringRecord, indices: &ColumnIndices) -> Option<PublicationRecord> {
    let year = parse_year(record.get(indices.year).unwrap_or_default())?;
    Some(indices.assemble(|index| record.get(index).unwrap_or_default().to_string(), year))
}

/// Spreadsheet exports in a legacy code page fail UTF-8 decoding; report
/// that as an encoding problem rather than a malformed row.
fn record_error(location: &str, e: csv::Error) -> LoadError {
    match e.kind() {
        csv::ErrorKind::Utf8 { .. } => LoadError::Encoding(location.to_string()),
        _ => LoadError::InvalidFormat(format!("{}: {}", location, e)),
    }
}

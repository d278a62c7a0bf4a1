//! Workbook reader (xlsx, xls, ods)
//!
//! Reads the first worksheet. Its first used row is the header; every row
//! after it is one publication.

use crate::reader::{LoadError, LoadReport, LoadResult, LoadedDataset};
use crate::schema::ColumnMapping;
use crate::year::parse_year;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Read the first worksheet of a workbook into publication records.
///
/// Cells are rendered to text the way a spreadsheet displays them, so the
/// same year normalization applies as for delimited sources. Date-formatted
/// cells come through as ISO dates.
pub fn read_workbook(path: &Path, columns: &ColumnMapping) -> LoadResult<LoadedDataset> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LoadError::OpenFailed(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::InvalidFormat("workbook has no worksheets".to_string()))?
        .map_err(|e| LoadError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let indices = columns.resolve(header.iter().map(String::as_str))?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (i, cells) in rows.enumerate() {
        let row = i + 1;
        let text = |index: usize| cells.get(index).map(cell_text).unwrap_or_default();
        let year_cell = text(indices.year);

        match parse_year(&year_cell) {
            Some(year) => {
                records.push(indices.assemble(text, year));
                report.keep();
            }
            None => {
                tracing::debug!(row, year = %year_cell, "Dropping row with unparsable year");
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

/// Render a cell as text
///
/// Whole floats lose their fractional part (`2020.0` -> `2020`); date serials
/// become `YYYY-MM-DD`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.date().to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::Bool(b) => b.to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

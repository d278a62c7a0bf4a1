//! Detail table built from filtered fact rows
//!
//! Rows are projected back onto the source columns and de-duplicated, so a
//! publication matching several selected keywords is listed once even
//! though the chart counts every hit.

use crate::keywords::ExpandedFactRow;
use imtrend_io::{Cell, ColumnMapping, RecordColumn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One table row keyed by column id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow(pub BTreeMap<RecordColumn, Cell>);

impl TableRow {
    pub fn get(&self, column: RecordColumn) -> Option<&Cell> {
        self.0.get(&column)
    }
}

/// Column header of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub id: RecordColumn,
    /// Source label shown as the header
    pub name: String,
}

/// Renderable table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePayload {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl TablePayload {
    /// Build a table of the requested columns, headed by their source labels
    pub fn new(rows: &[&ExpandedFactRow], columns: &[RecordColumn], labels: &ColumnMapping) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|&id| TableColumn {
                    id,
                    name: labels.label(id).to_string(),
                })
                .collect(),
            rows: to_table(rows, columns),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project fact rows onto record columns and drop exact duplicates.
///
/// Two rows are duplicates when every requested column is equal, whether
/// they come from the same record or not. First appearances keep their
/// order.
pub fn to_table(rows: &[&ExpandedFactRow], columns: &[RecordColumn]) -> Vec<TableRow> {
    let mut seen = HashSet::new();
    let mut table = Vec::new();

    for row in rows {
        let projected = TableRow(
            columns
                .iter()
                .map(|&column| (column, row.record.cell(column)))
                .collect(),
        );
        if seen.insert(projected.clone()) {
            table.push(projected);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::expand;
    use imtrend_io::PublicationRecord;
    use std::sync::Arc;

    fn record(title: &str, keywords: &str) -> Arc<PublicationRecord> {
        Arc::new(PublicationRecord {
            repository: "RepoA".to_string(),
            title: title.to_string(),
            author: "A".to_string(),
            year: 2020,
            keywords_found: keywords.to_string(),
            pages: "10".to_string(),
        })
    }

    #[test]
    fn test_record_with_many_hits_listed_once() {
        let expanded = expand(&[record("T1", "ML, AI"), record("T2", "AI")]);
        let rows: Vec<&ExpandedFactRow> = expanded.iter().collect();
        let table = to_table(&rows, &RecordColumn::ALL);

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].get(RecordColumn::Title), Some(&Cell::Text("T1".to_string())));
        assert_eq!(
            table[0].get(RecordColumn::KeywordsFound),
            Some(&Cell::Text("ML, AI".to_string()))
        );
    }

    #[test]
    fn test_identical_records_collapse() {
        let expanded = expand(&[record("Same", "AI"), record("Same", "AI")]);
        let rows: Vec<&ExpandedFactRow> = expanded.iter().collect();
        assert_eq!(to_table(&rows, &RecordColumn::ALL).len(), 1);
    }

    #[test]
    fn test_projection_limits_columns() {
        let expanded = expand(&[record("T1", "AI"), record("T2", "AI")]);
        let rows: Vec<&ExpandedFactRow> = expanded.iter().collect();
        let table = to_table(&rows, &[RecordColumn::Repository, RecordColumn::Year]);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].0.len(), 2);
    }

    #[test]
    fn test_payload_headers_use_source_labels() {
        let expanded = expand(&[record("T1", "AI")]);
        let rows: Vec<&ExpandedFactRow> = expanded.iter().collect();
        let payload = TablePayload::new(&rows, &RecordColumn::ALL, &ColumnMapping::default());

        assert_eq!(payload.columns.len(), 6);
        assert_eq!(payload.columns[3].name, "Ano");
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn test_row_serializes_as_object() {
        let expanded = expand(&[record("T1", "AI")]);
        let rows: Vec<&ExpandedFactRow> = expanded.iter().collect();
        let table = to_table(&rows, &RecordColumn::ALL);

        let json = serde_json::to_value(&table[0]).unwrap();
        assert_eq!(json["title"], "T1");
        assert_eq!(json["year"], 2020);
        assert_eq!(json["keywords_found"], "AI");
    }
}

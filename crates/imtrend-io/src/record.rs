//! Publication records and their displayable columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the survey table after loading.
///
/// Records are created once at load and never mutated. They have no primary
/// key; identity is the position in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Repository the publication was harvested from
    pub repository: String,
    pub title: String,
    pub author: String,
    /// Publication year, always a 4-digit integer
    pub year: i32,
    /// Raw comma-separated keyword string, empty when the cell was blank
    pub keywords_found: String,
    /// Page count or range, kept as the source text
    pub pages: String,
}

impl PublicationRecord {
    /// Get the value of a column for display
    pub fn cell(&self, column: RecordColumn) -> Cell {
        match column {
            RecordColumn::Repository => Cell::Text(self.repository.clone()),
            RecordColumn::Title => Cell::Text(self.title.clone()),
            RecordColumn::Author => Cell::Text(self.author.clone()),
            RecordColumn::Year => Cell::Int(i64::from(self.year)),
            RecordColumn::KeywordsFound => Cell::Text(self.keywords_found.clone()),
            RecordColumn::Pages => Cell::Text(self.pages.clone()),
        }
    }
}

/// The six source columns a record carries.
///
/// Ordering follows the source table, which is also the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordColumn {
    Repository,
    Title,
    Author,
    Year,
    KeywordsFound,
    Pages,
}

impl RecordColumn {
    /// All columns in display order
    pub const ALL: [RecordColumn; 6] = [
        RecordColumn::Repository,
        RecordColumn::Title,
        RecordColumn::Author,
        RecordColumn::Year,
        RecordColumn::KeywordsFound,
        RecordColumn::Pages,
    ];

    /// Stable identifier used in serialized rows
    pub fn id(&self) -> &'static str {
        match self {
            RecordColumn::Repository => "repository",
            RecordColumn::Title => "title",
            RecordColumn::Author => "author",
            RecordColumn::Year => "year",
            RecordColumn::KeywordsFound => "keywords_found",
            RecordColumn::Pages => "pages",
        }
    }
}

impl fmt::Display for RecordColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single displayable value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

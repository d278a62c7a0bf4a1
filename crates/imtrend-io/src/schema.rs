//! Source column mapping and header resolution

use crate::reader::{LoadError, LoadResult};
use crate::record::{PublicationRecord, RecordColumn};
use serde::{Deserialize, Serialize};

/// Labels of the source columns, one per [`RecordColumn`].
///
/// Defaults match the survey spreadsheet headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub repository: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub keywords_found: String,
    pub pages: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            repository: "Repositório".to_string(),
            title: "Título".to_string(),
            author: "Autor".to_string(),
            year: "Ano".to_string(),
            keywords_found: "Palavras-chave encontradas".to_string(),
            pages: "Páginas".to_string(),
        }
    }
}

impl ColumnMapping {
    /// Get the source label for a column
    pub fn label(&self, column: RecordColumn) -> &str {
        match column {
            RecordColumn::Repository => &self.repository,
            RecordColumn::Title => &self.title,
            RecordColumn::Author => &self.author,
            RecordColumn::Year => &self.year,
            RecordColumn::KeywordsFound => &self.keywords_found,
            RecordColumn::Pages => &self.pages,
        }
    }

    /// Locate every mapped column in a header row.
    ///
    /// Header cells are compared after trimming surrounding whitespace. A
    /// label absent from the header is a hard error.
    pub fn resolve<'a, I>(&self, headers: I) -> LoadResult<ColumnIndices>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let find = |column: RecordColumn| -> LoadResult<usize> {
            let label = self.label(column).trim();
            headers
                .iter()
                .position(|h| *h == label)
                .ok_or_else(|| LoadError::MissingColumn(label.to_string()))
        };

        Ok(ColumnIndices {
            repository: find(RecordColumn::Repository)?,
            title: find(RecordColumn::Title)?,
            author: find(RecordColumn::Author)?,
            year: find(RecordColumn::Year)?,
            keywords_found: find(RecordColumn::KeywordsFound)?,
            pages: find(RecordColumn::Pages)?,
        })
    }
}

/// Positions of the mapped columns within a source row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub repository: usize,
    pub title: usize,
    pub author: usize,
    pub year: usize,
    pub keywords_found: usize,
    pub pages: usize,
}

impl ColumnIndices {
    /// Build a record from a row, given a cell accessor and the parsed year
    pub fn assemble<F>(&self, cell: F, year: i32) -> PublicationRecord
    where
        F: Fn(usize) -> String,
    {
        PublicationRecord {
            repository: cell(self.repository),
            title: cell(self.title),
            author: cell(self.author),
            year,
            keywords_found: cell(self.keywords_found),
            pages: cell(self.pages),
        }
    }
}

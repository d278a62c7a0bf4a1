//! imtrend-io - Dataset loading for publication surveys
//!
//! Reads a flat publication table (one row per publication) into typed
//! [`PublicationRecord`]s:
//!
//! - **CSV / TSV**: delimiter inferred from the extension or set explicitly
//! - **Workbooks**: `.xlsx`, `.xls`, `.ods` and friends; the first worksheet
//!   is read
//! - **Column mapping**: source labels are configurable, defaults match the
//!   survey spreadsheet (`Repositório`, `Título`, `Autor`, `Ano`,
//!   `Palavras-chave encontradas`, `Páginas`)
//! - **Year normalization**: free-text years are coerced to integers; rows
//!   whose year cannot be parsed are dropped and counted in the [`LoadReport`]
//!
//! # Example
//!
//! ```ignore
//! use imtrend_io::{load_path, LoadOptions};
//!
//! let dataset = load_path("Resultados Finais.xlsx", &LoadOptions::default())?;
//! println!("{} rows kept", dataset.report.rows_loaded);
//! ```

pub mod csv_reader;
pub mod reader;
pub mod record;
pub mod schema;
pub mod workbook_reader;
pub mod year;

pub use reader::*;
pub use record::*;
pub use schema::*;
pub use year::parse_year;

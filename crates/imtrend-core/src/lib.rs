//! imtrend-core - Publication survey exploration engine
//!
//! Turns a loaded publication table into the two things a survey dashboard
//! shows: a count-by-year chart per repository and the matching detail rows.
//!
//! # Pipeline
//!
//! - **Keywords**: each record's comma-separated keyword cell is expanded
//!   into one fact row per keyword
//! - **Facets**: keyword frequencies and the repository set, computed once
//! - **Engine**: repository + keyword filtering, then (year, repository) counts
//! - **Chart / Table**: renderable payloads, including the "no data" state
//!
//! All state lives in an immutable [`ExplorerContext`]; [`explore`] is a pure
//! function of that context and a [`Selection`], so one context can serve
//! any number of concurrent requests.
//!
//! # Counting semantics
//!
//! Chart counts are keyword hits: a publication matching two selected
//! keywords counts twice. The table lists each distinct record once.

pub mod chart;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod explore;
pub mod facets;
pub mod keywords;
pub mod table;

pub use chart::*;
pub use config::*;
pub use context::*;
pub use engine::*;
pub use error::*;
pub use explore::*;
pub use facets::*;
pub use keywords::*;
pub use table::*;

pub use imtrend_io::{Cell, ColumnMapping, LoadReport, PublicationRecord, RecordColumn};

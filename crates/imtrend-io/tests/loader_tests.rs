//! Loader integration tests against on-disk sources

use imtrend_io::{load_path, ColumnMapping, LoadError, LoadOptions};
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

#[test]
fn test_load_fixture() {
    let dataset = load_path(fixture_path("publications.csv"), &LoadOptions::default()).unwrap();

    assert_eq!(dataset.report.rows_read, 5);
    assert_eq!(dataset.report.rows_loaded, 4);
    assert_eq!(dataset.report.dropped_rows, vec![4]);

    let years: Vec<i32> = dataset.records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2020, 2020, 2021, 2019]);
    assert_eq!(dataset.records[3].keywords_found, "NLP,  ML ,AI");
}

#[test]
fn test_every_loaded_year_has_four_digits() {
    let dataset = load_path(fixture_path("publications.csv"), &LoadOptions::default()).unwrap();
    assert!(dataset.records.iter().all(|r| (1000..=9999).contains(&r.year)));
}

#[test]
fn test_load_tsv_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    writeln!(file, "Repositório\tTítulo\tAutor\tAno\tPalavras-chave encontradas\tPáginas").unwrap();
    writeln!(file, "RepoA\tT\tA\t2017\tAI\t3").unwrap();

    let dataset = load_path(file.path(), &LoadOptions::default()).unwrap();
    assert_eq!(dataset.records.len(), 1);
    assert_eq!(dataset.records[0].year, 2017);
}

#[test]
fn test_custom_column_labels() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Source;Title;Author;Year;Keywords;Pages").unwrap();
    writeln!(file, "arXiv;Paper;Doe;2016;AI, ML;9").unwrap();

    let columns = ColumnMapping {
        repository: "Source".to_string(),
        title: "Title".to_string(),
        author: "Author".to_string(),
        year: "Year".to_string(),
        keywords_found: "Keywords".to_string(),
        pages: "Pages".to_string(),
    };
    let options = LoadOptions::default().with_delimiter(b';').with_columns(columns);

    let dataset = load_path(file.path(), &options).unwrap();
    assert_eq!(dataset.records[0].repository, "arXiv");
    assert_eq!(dataset.records[0].keywords_found, "AI, ML");
}

#[test]
fn test_missing_required_column() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Repositório,Título,Autor,Ano,Páginas").unwrap();
    writeln!(file, "RepoA,T,A,2020,1").unwrap();

    let err = load_path(file.path(), &LoadOptions::default()).unwrap_err();
    assert!(
        matches!(err, LoadError::MissingColumn(ref c) if c == "Palavras-chave encontradas"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_load_workbook_fixture() {
    let dataset = load_path(fixture_path("publications.xlsx"), &LoadOptions::default()).unwrap();

    assert_eq!(dataset.report.rows_read, 4);
    assert_eq!(dataset.report.dropped_rows, vec![3]);

    // Row 2 stores its year as a date-formatted serial (2021-01-01)
    let years: Vec<i32> = dataset.records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2020, 2021, 2019]);

    assert_eq!(dataset.records[0].repository, "RepoA");
    assert_eq!(dataset.records[0].keywords_found, "ML, AI");
    assert_eq!(dataset.records[0].pages, "10");
    assert_eq!(dataset.records[2].keywords_found, "");
}

#[test]
fn test_workbook_ignores_delimiter_option() {
    let options = LoadOptions::default().with_delimiter(b';');
    let dataset = load_path(fixture_path("publications.xlsx"), &options).unwrap();
    assert_eq!(dataset.records.len(), 3);
}

#[test]
fn test_workbook_missing_column() {
    let columns = ColumnMapping {
        pages: "Paginação".to_string(),
        ..Default::default()
    };
    let options = LoadOptions::default().with_columns(columns);
    let err = load_path(fixture_path("publications.xlsx"), &options).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Paginação"));
}

#[test]
fn test_unsupported_extension() {
    let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    let err = load_path(file.path(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(ref e) if e == "pdf"));
    assert!(err.to_string().contains("xlsx"));
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "matching csv files for all labels not found ({found} of {expected} labels matched)"
    )]
    MatchCount { expected: usize, found: usize },

    #[error("could not read csv {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}: expected at least 3 columns, found {found}", .path.display())]
    TooFewColumns { path: PathBuf, found: usize },

    #[error(
        "{}: row {row}: '{value}' in column '{column}' is not a finite number",
        .path.display()
    )]
    Parse {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{}: {groups} groups do not fit in a {rows}x{cols} grid", .path.display())]
    GridOverflow {
        path: PathBuf,
        groups: usize,
        rows: usize,
        cols: usize,
    },

    #[error("no data rows found in any input file")]
    EmptyFigure,

    #[error("unsupported output format for {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("rendering failed: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn render<E: std::fmt::Display>(e: E) -> Error {
        Error::Render(e.to_string())
    }
}

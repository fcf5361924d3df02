use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the table or producing the figure.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Filesystem error while reading the table or writing the figure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV, or a cell that does not parse as a number
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    /// A cell parsed as NaN or infinity
    #[error("row {row}, column '{column}': {value} is not finite")]
    NonFinite {
        row: usize,
        column: &'static str,
        value: f64,
    },

    /// The table has a header but no rows
    #[error("dataset has no rows")]
    EmptyDataset,

    /// An axis bound that a logarithmic scale cannot represent
    #[error("{axis} axis is logarithmic but its lower bound is {value}")]
    NonPositiveOnLogAxis { axis: &'static str, value: f64 },

    /// The output's parent directory does not exist
    #[error("output directory does not exist: {}", .0.display())]
    OutputDir(PathBuf),

    /// Output extension is neither `.svg` nor `.pdf`
    #[error("unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Drawing failed inside the plotting backend
    #[error("render error: {0}")]
    Render(String),

    /// SVG parsing or PDF conversion failed
    #[error("PDF conversion error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;

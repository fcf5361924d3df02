use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::model::{Dataset, Row, COL_TC24, COL_TC42, COL_X, REQUIRED_COLUMNS};
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the cross-section table from a CSV file.
///
/// Layout: header row with at least `X`, `TC24` and `TC42`; other columns
/// are ignored. Every cell of the three columns must be a finite number.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    debug!("reading {}", path.display());
    load_csv_from_reader(file)
}

/// Same as [`load_csv`] over any reader.
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // All three columns are checked before any record is read.
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PlotError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<Row>().enumerate() {
        let row = result?;
        check_finite(&row, row_no)?;
        rows.push(row);
    }

    Ok(Dataset::from_rows(rows))
}

/// `f64` parsing accepts `nan` and `inf`; the table must not contain them.
fn check_finite(row: &Row, row_no: usize) -> Result<()> {
    for (column, value) in [(COL_X, row.x), (COL_TC24, row.tc24), (COL_TC42, row.tc42)] {
        if !value.is_finite() {
            return Err(PlotError::NonFinite {
                row: row_no,
                column,
                value,
            });
        }
    }
    Ok(())
}

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Independent variable x = m_η′/T.
pub const COL_X: &str = "X";
/// Thermally-averaged cross-section for 2→4.
pub const COL_TC24: &str = "TC24";
/// Thermally-averaged cross-section for 4→2.
pub const COL_TC42: &str = "TC42";

/// Columns that must appear in the header row.
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_X, COL_TC24, COL_TC42];

// ---------------------------------------------------------------------------
// Row – one CSV record
// ---------------------------------------------------------------------------

/// A single record of `tc_data.csv`. Any other columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Row {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "TC24")]
    pub tc24: f64,
    #[serde(rename = "TC42")]
    pub tc42: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The three extracted columns, in file row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub tc24: Vec<f64>,
    pub tc42: Vec<f64>,
}

impl Dataset {
    /// Split rows into columns. Order is kept as given.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut dataset = Dataset {
            x: Vec::with_capacity(rows.len()),
            tc24: Vec::with_capacity(rows.len()),
            tc42: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            dataset.x.push(row.x);
            dataset.tc24.push(row.tc24);
            dataset.tc42.push(row.tc42);
        }
        dataset
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Observed `(min, max)` of `X`, or `None` for an empty table.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        if self.x.is_empty() {
            return None;
        }
        let min = self.x.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Natural log of every `X` value.
    ///
    /// Not consumed by the figure; the pipeline only reports its span.
    pub fn log_x(&self) -> Vec<f64> {
        self.x.iter().map(|x| x.ln()).collect()
    }
}

/// Data layer: the cross-section table and its loader.
///
/// Architecture:
/// ```text
///   tc_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  header check → serde rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  X, TC24, TC42 columns in row order
///   └──────────┘
/// ```

pub mod loader;
pub mod model;

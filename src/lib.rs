//! Log-log figure of the thermally-averaged cross-sections for the 2→4 and
//! 4→2 processes, read from a precomputed `tc_data.csv` table.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod pipeline;

pub use config::PlotConfig;
pub use error::{PlotError, Result};
pub use pipeline::run;

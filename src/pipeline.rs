//! Load → build → save, run once per invocation.

use std::path::PathBuf;

use log::{debug, info};

use crate::config::PlotConfig;
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::error::Result;
use crate::figure::{render, Figure};

/// Produce the cross-section figure described by `config`.
///
/// Returns the path written. Nothing is written when loading or figure
/// construction fails.
pub fn run(config: &PlotConfig) -> Result<PathBuf> {
    let dataset = load_csv(&config.input)?;
    info!("loaded {} rows from {}", dataset.len(), config.input.display());
    log_summary(&dataset);

    let figure = Figure::cross_sections(&dataset, config)?;
    render::save(&figure, &config.output)?;
    info!("wrote {}", config.output.display());

    Ok(config.output.clone())
}

fn log_summary(dataset: &Dataset) {
    if let Some((min, max)) = dataset.x_bounds() {
        debug!("x spans [{min:e}, {max:e}]");
    }
    // ln(x) is computed but not drawn
    let log_x = dataset.log_x();
    if let (Some(first), Some(last)) = (log_x.first(), log_x.last()) {
        debug!("ln(x) runs from {first:.4} to {last:.4}");
    }
}

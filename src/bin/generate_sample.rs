//! Writes a synthetic `tc_data.csv` with the same columns the solver emits.
//! The curves are smooth stand-ins, not physics.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "TC24")]
    tc24: f64,
    #[serde(rename = "TC42")]
    tc42: f64,
}

/// Log-spaced grid from `lo` to `hi`, `n` points inclusive.
fn log_grid(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let (a, b) = (lo.log10(), hi.log10());
    (0..n)
        .map(|i| 10f64.powf(a + (b - a) * i as f64 / (n - 1) as f64))
        .collect()
}

fn sample_row(x: f64) -> SampleRow {
    // Boltzmann-suppressed forward rate; the reverse rate grows as a power.
    let tc24 = 1e-2 * x.powf(-1.5) * (-2.0 * x).exp();
    let tc42 = 1e-6 * x.powf(4.5);
    SampleRow { x, tc24, tc42 }
}

fn main() -> Result<()> {
    let output_path = "tc_data.csv";
    let xs = log_grid(1.0, 30.0, 200);

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for &x in &xs {
        writer.serialize(sample_row(x)).context("writing row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} rows to {output_path}", xs.len());
    Ok(())
}

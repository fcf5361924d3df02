//! Figure and path settings.
//!
//! The generator has no configuration surface: no flags, no config file and no
//! environment variables other than `RUST_LOG`. Everything lives in
//! [`PlotConfig::default`].

use std::path::{Path, PathBuf};

/// Input table, relative to this crate's directory.
pub const DEFAULT_INPUT: &str = "../../rundata/tc_data.csv";
/// Output figure, relative to this crate's directory.
pub const DEFAULT_OUTPUT: &str = "../figures/eta_tcs.pdf";

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// CSV table with `X`, `TC24` and `TC42` columns
    pub input: PathBuf,

    /// Figure path; the extension (`.pdf` or `.svg`) selects the format
    pub output: PathBuf,

    /// Dots per inch used to size the canvas and fonts
    pub dpi: f64,

    /// Figure size in inches (width, height)
    pub fig_size_in: (f64, f64),

    /// Axis label font size in points
    pub label_font_pt: f64,

    /// Fixed y axis span, independent of the data
    pub y_range: (f64, f64),

    /// Stroke width of both curves in points
    pub line_width: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let base = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self {
            input: base.join(DEFAULT_INPUT),
            output: base.join(DEFAULT_OUTPUT),
            dpi: 200.0,
            fig_size_in: (6.4, 4.8),
            label_font_pt: 16.0,
            y_range: (1e-30, 1e20),
            line_width: 1.5,
        }
    }
}

impl PlotConfig {
    /// Default figure settings with explicit input and output paths.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Canvas size in pixels.
    pub fn size_px(&self) -> (u32, u32) {
        let (w, h) = self.fig_size_in;
        ((w * self.dpi).round() as u32, (h * self.dpi).round() as u32)
    }

    /// Convert a length in points to pixels at this DPI.
    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

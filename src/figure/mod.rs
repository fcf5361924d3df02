//! Figure model: everything the renderer draws, as plain data.
//!
//! Building a [`Figure`] never touches the filesystem, so two figures built
//! from the same table compare equal regardless of how they are later drawn.

pub mod render;

use log::warn;

use crate::config::PlotConfig;
use crate::data::model::Dataset;
use crate::error::{PlotError, Result};

/// Horizontal axis label, x = m_η′/T.
pub const X_LABEL: &str = "x = m\u{03B7}\u{2032}/T";
/// Vertical axis label, the normalised ⟨σv⟩.
pub const Y_LABEL: &str =
    "(\u{039B}\u{2078}N\u{00B2}/256\u{03C0}\u{2074}m\u{2077}\u{03B7}\u{2032})\u{00B2} \u{27E8}\u{03C3}v\u{27E9}";

pub const LABEL_2_TO_4: &str = "2\u{2192}4";
pub const LABEL_4_TO_2: &str = "4\u{2192}2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One polyline; vertices are drawn in the order stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
    /// Stroke width in points
    pub width: f64,
}

/// A logarithmic axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub range: (f64, f64),
}

impl Axis {
    /// Fails when the axis would have to include zero or negatives.
    fn validate(&self, name: &'static str) -> Result<()> {
        if self.range.0 <= 0.0 {
            return Err(PlotError::NonPositiveOnLogAxis {
                axis: name,
                value: self.range.0,
            });
        }
        Ok(())
    }
}

/// Single-axes log-log figure with a legend in the upper right.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Canvas size in pixels
    pub size_px: (u32, u32),
    /// Resolution the canvas was sized at; sets the PDF page size
    pub dpi: f64,
    /// Pixels per point, used to scale fonts and strokes
    pub px_per_pt: f64,
    /// Axis label font size in points
    pub label_font_pt: f64,
}

impl Figure {
    /// The 2→4 / 4→2 comparison: both cross-sections against `X` on log-log
    /// axes, y fixed to the configured span and x to the data's extent.
    pub fn cross_sections(dataset: &Dataset, config: &PlotConfig) -> Result<Figure> {
        let (x_min, x_max) = dataset.x_bounds().ok_or(PlotError::EmptyDataset)?;

        let mut x_axis = Axis {
            label: X_LABEL.to_string(),
            range: (x_min, x_max),
        };
        x_axis.validate("x")?;
        if x_min == x_max {
            x_axis.range = decade_span(x_min);
            warn!(
                "all x values equal {x_min}; widening x axis to [{:e}, {:e}]",
                x_axis.range.0, x_axis.range.1
            );
        }
        let y_axis = Axis {
            label: Y_LABEL.to_string(),
            range: config.y_range,
        };
        y_axis.validate("y")?;

        let series = vec![
            Series {
                label: LABEL_2_TO_4.to_string(),
                points: zip_points(&dataset.x, &dataset.tc24),
                style: LineStyle::Solid,
                width: config.line_width,
            },
            Series {
                label: LABEL_4_TO_2.to_string(),
                points: zip_points(&dataset.x, &dataset.tc42),
                style: LineStyle::Dashed,
                width: config.line_width,
            },
        ];

        Ok(Figure {
            series,
            x_axis,
            y_axis,
            size_px: config.size_px(),
            dpi: config.dpi,
            px_per_pt: config.pt_to_px(1.0),
            label_font_pt: config.label_font_pt,
        })
    }
}

/// The decades strictly below and above a positive `v`: 4 → [1, 10],
/// 10 → [1, 100].
fn decade_span(v: f64) -> (f64, f64) {
    let e = v.log10();
    (10f64.powf(e.ceil() - 1.0), 10f64.powf(e.floor() + 1.0))
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

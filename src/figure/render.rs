use std::error::Error;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;

use super::{Figure, LineStyle, Series};
use crate::color::series_palette;
use crate::error::{PlotError, Result};

const FONT: &str = "sans-serif";

/// Installed families tried, in order, for the generic `sans-serif` when
/// converting to PDF. Falls back to the first family found.
const SANS_SERIF_CANDIDATES: [&str; 5] = [
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
    "Noto Sans",
];

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Pdf,
}

impl OutputFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(PlotError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Render `figure` and write it to `path`, replacing any existing file.
///
/// The whole document is produced in memory first, so a failure at any
/// stage leaves nothing on disk.
pub fn save(figure: &Figure, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(PlotError::OutputDir(parent.to_path_buf()));
    }

    let svg = to_svg(figure)?;
    let bytes = match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Pdf => svg_to_pdf(&svg, figure.dpi)?,
    };
    fs::write(path, &bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Render `figure` as an SVG document.
pub fn to_svg(figure: &Figure) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, figure.size_px).into_drawing_area();
        draw(&root, figure).map_err(|e| PlotError::Render(e.to_string()))?;
    }
    Ok(svg)
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw(root: &DrawingArea<SVGBackend, Shift>, figure: &Figure) -> std::result::Result<(), Box<dyn Error>> {
    root.fill(&WHITE)?;

    let font_px = figure.label_font_pt * figure.px_per_pt;
    let tick_px = font_px * 0.7;
    let (x0, x1) = figure.x_axis.range;
    let (y0, y1) = figure.y_axis.range;

    // margins scale with the label font
    let mut chart = ChartBuilder::on(root)
        .margin((font_px * 0.6).round() as i32)
        .x_label_area_size((font_px * 2.4).round() as i32)
        .y_label_area_size((font_px * 3.6).round() as i32)
        .build_cartesian_2d((x0..x1).log_scale(), (y0..y1).log_scale())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(figure.x_axis.label.as_str())
        .y_desc(figure.y_axis.label.as_str())
        .axis_desc_style((FONT, font_px.round() as i32))
        .label_style((FONT, tick_px.round() as i32))
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    let colors = series_palette(figure.series.len());
    for (series, color) in figure.series.iter().zip(colors) {
        let points = drawable_points(series);
        let stroke = (series.width * figure.px_per_pt).round().max(1.0) as u32;
        let style = color.stroke_width(stroke);
        let dash = (stroke * 3, stroke * 2);
        let key = (font_px * 1.4).round() as i32;

        match series.style {
            LineStyle::Solid => {
                chart
                    .draw_series(LineSeries::new(points, style))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + key, y)], style));
            }
            LineStyle::Dashed => {
                chart
                    .draw_series(DashedLineSeries::new(points, dash.0, dash.1, style))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| {
                        DashedPathElement::new(vec![(x, y), (x + key, y)], dash.0, dash.1, style)
                    });
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, tick_px.round() as i32))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Points a log-log chart can place. Others are dropped from the drawing
/// only; the figure data keeps them.
fn drawable_points(series: &Series) -> Vec<(f64, f64)> {
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .copied()
        .filter(|&(x, y)| x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite())
        .collect();

    let masked = series.points.len() - points.len();
    if masked > 0 {
        warn!(
            "series '{}': {masked} non-positive point(s) not drawn on log axes",
            series.label
        );
    }
    debug!("series '{}': {} vertices", series.label, points.len());
    points
}

/// Tick labels in exponent form: `1e-30`, `1e20`.
fn format_tick(v: f64) -> String {
    format!("{v:.0e}")
}

// ---------------------------------------------------------------------------
// PDF conversion
// ---------------------------------------------------------------------------

/// Convert a rendered SVG to PDF at `dpi`, so the page keeps the figure's
/// physical size.
///
/// Text whose font cannot be resolved is dropped by `usvg` without an
/// error, so the parsed tree is checked against the SVG's `<text>` count.
fn svg_to_pdf(svg: &str, dpi: f64) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    let fontdb = options.fontdb_mut();
    fontdb.load_system_fonts();

    let families = fontdb
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()));
    let family = pick_sans_serif(families)
        .ok_or_else(|| PlotError::Pdf("no system fonts found".to_string()))?;
    debug!("using '{family}' for sans-serif text");
    fontdb.set_sans_serif_family(family);

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| PlotError::Pdf(e.to_string()))?;

    let expected = svg.matches("<text").count();
    let kept = count_text_nodes(tree.root());
    if kept < expected {
        return Err(PlotError::Pdf(format!(
            "{} of {expected} text elements could not be laid out",
            expected - kept
        )));
    }

    let page = svg2pdf::PageOptions {
        dpi: dpi as f32,
        ..Default::default()
    };
    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), page)
        .map_err(|e| PlotError::Pdf(e.to_string()))
}

/// First preferred family that is installed, else the first one seen.
fn pick_sans_serif<'a>(families: impl Iterator<Item = &'a str>) -> Option<String> {
    let installed: Vec<&str> = families.collect();
    SANS_SERIF_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| installed.contains(candidate))
        .or_else(|| installed.first().copied())
        .map(str::to_string)
}

fn count_text_nodes(group: &usvg::Group) -> usize {
    group
        .children()
        .iter()
        .map(|node| match node {
            usvg::Node::Text(_) => 1,
            usvg::Node::Group(g) => count_text_nodes(g),
            _ => 0,
        })
        .sum()
}

use std::fs;
use std::path::{Path, PathBuf};

use tc_plot::color::series_palette;
use tc_plot::figure::{LABEL_2_TO_4, LABEL_4_TO_2, X_LABEL, Y_LABEL};
use tc_plot::{run, PlotConfig};

const SCENARIO: &str = "X,TC24,TC42\n1,1e-10,1e-12\n10,1e-15,1e-17\n100,1e-20,1e-22\n";

fn render(dir: &Path, output: &str) -> PathBuf {
    let input = dir.join("tc_data.csv");
    fs::write(&input, SCENARIO).unwrap();
    run(&PlotConfig::with_paths(&input, dir.join(output))).unwrap()
}

fn stroke_count(svg: &str, index: usize) -> usize {
    let plotters::style::RGBColor(r, g, b) = series_palette(2)[index];
    let hex = format!("#{r:02x}{g:02x}{b:02x}");
    svg.to_lowercase().matches(&hex).count()
}

#[test]
fn svg_draws_solid_and_dashed_series() {
    let dir = tempfile::tempdir().unwrap();
    let svg = fs::read_to_string(render(dir.path(), "eta_tcs.svg")).unwrap();

    let solid = stroke_count(&svg, 0);
    let dashed = stroke_count(&svg, 1);
    // the solid curve is a single polyline plus its legend key
    assert!((1..=4).contains(&solid), "solid series strokes: {solid}");
    assert!(
        dashed >= 10 && dashed > 2 * solid,
        "dashed series should be split into segments, got {dashed}"
    );
}

#[test]
fn svg_carries_labels_and_legend() {
    let dir = tempfile::tempdir().unwrap();
    let svg = fs::read_to_string(render(dir.path(), "eta_tcs.svg")).unwrap();

    for text in [X_LABEL, Y_LABEL, LABEL_2_TO_4, LABEL_4_TO_2] {
        assert!(svg.contains(text), "missing text '{text}'");
    }
    assert!(svg.matches("<text").count() > 4);
}

#[test]
fn pdf_has_header_and_fonts() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = fs::read(render(dir.path(), "eta_tcs.pdf")).unwrap();

    assert!(pdf.starts_with(b"%PDF"));
    assert!(
        pdf.windows(5).any(|w| w == b"/Font"),
        "PDF has no embedded fonts, text was dropped"
    );
}

#[test]
fn rerun_overwrites_with_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = render(dir.path(), "eta_tcs.svg");
    let first = fs::read_to_string(&path).unwrap();

    let again = render(dir.path(), "eta_tcs.svg");
    assert_eq!(again, path);
    assert_eq!(fs::read_to_string(&again).unwrap(), first);
}

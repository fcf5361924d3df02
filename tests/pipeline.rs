use std::fs;
use std::path::Path;

use tc_plot::data::loader::load_csv;
use tc_plot::figure::{Figure, LineStyle};
use tc_plot::{run, PlotConfig, PlotError};

const SCENARIO: &str = "X,TC24,TC42\n1,1e-10,1e-12\n10,1e-15,1e-17\n100,1e-20,1e-22\n";

fn write_fixture(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("tc_data.csv");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn fixture_file_round_trips_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), SCENARIO);

    let ds = load_csv(&input).unwrap();
    assert_eq!(ds.x, vec![1.0, 10.0, 100.0]);
    assert_eq!(ds.tc24, vec![1e-10, 1e-15, 1e-20]);
    assert_eq!(ds.tc42, vec![1e-12, 1e-17, 1e-22]);
}

#[test]
fn scenario_figure_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), SCENARIO);
    let config = PlotConfig::with_paths(&input, dir.path().join("eta_tcs.pdf"));

    let fig = Figure::cross_sections(&load_csv(&input).unwrap(), &config).unwrap();
    assert_eq!(fig.x_axis.range, (1.0, 100.0));
    assert_eq!(fig.y_axis.range, (1e-30, 1e20));
    assert_eq!(fig.series.len(), 2);
    assert_eq!(fig.series[0].style, LineStyle::Solid);
    assert_eq!(fig.series[1].style, LineStyle::Dashed);
    for series in &fig.series {
        assert_eq!(series.points.len(), 3);
    }
}

#[test]
fn repeated_loads_give_identical_figures() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "X,TC24,TC42\n2.5,3.1e-4,8e-9\n1.25,6.2e-3,1.1e-9\n40,1e-28,7e5\n",
    );
    let config = PlotConfig::with_paths(&input, dir.path().join("eta_tcs.svg"));

    let first = Figure::cross_sections(&load_csv(&input).unwrap(), &config).unwrap();
    let second = Figure::cross_sections(&load_csv(&input).unwrap(), &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.x_axis.range, (1.25, 40.0));
}

#[test]
fn missing_column_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "X,TC24\n1,1e-10\n10,1e-15\n");
    let output = dir.path().join("eta_tcs.pdf");

    let err = run(&PlotConfig::with_paths(&input, &output)).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn("TC42")), "{err}");
    assert!(!output.exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("eta_tcs.pdf");

    let err = run(&PlotConfig::with_paths(dir.path().join("absent.csv"), &output)).unwrap_err();
    assert!(matches!(err, PlotError::Io(_)), "{err}");
    assert!(!output.exists());
}

#[test]
fn missing_output_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), SCENARIO);
    let output = dir.path().join("figures").join("eta_tcs.pdf");

    let err = run(&PlotConfig::with_paths(&input, &output)).unwrap_err();
    assert!(matches!(err, PlotError::OutputDir(_)), "{err}");
    assert!(!output.exists());
}

#[test]
fn non_numeric_cell_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "X,TC24,TC42\n1,1e-10,n/a\n");
    let output = dir.path().join("eta_tcs.pdf");

    let err = run(&PlotConfig::with_paths(&input, &output)).unwrap_err();
    assert!(matches!(err, PlotError::Csv(_)), "{err}");
    assert!(!output.exists());
}

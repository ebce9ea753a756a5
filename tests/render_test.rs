use hydrosynth::render::{Panel, PlotRequest, render, window_len};
use hydrosynth::{GeneratorConfig, SignalGenerator};
use plotters::style::{BLUE, GREEN, RED};

fn scene() -> (SignalGenerator, Vec<f64>, Vec<f64>, Vec<f64>) {
    let generator = SignalGenerator::new(GeneratorConfig::new(8000, 0.5).with_seed(1)).unwrap();
    let tonal = generator.tonal(127.0, 0.1).unwrap();
    let broadband = generator.broadband(100.0, 3000.0, 0.3).unwrap();
    let impulse = generator.impulse(0.02, 0.005).unwrap();
    (generator, tonal, broadband, impulse)
}

#[test]
fn test_render_png() {
    let (generator, tonal, broadband, impulse) = scene();
    let n = window_len(generator.sample_rate(), 0.05, generator.sample_count());
    assert_eq!(n, 400);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acoustic_analysis.png");

    let plot = PlotRequest::new(&generator.time_axis()[..n])
        .panel(Panel::new("Tonal", &tonal[..n], BLUE))
        .panel(Panel::new("Broadband", &broadband[..n], GREEN))
        .panel(Panel::new("Impulse", &impulse[..n], RED).with_marker(0.01));

    render(&path, &plot).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_render_svg() {
    let (generator, tonal, _, _) = scene();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tonal.svg");

    let plot = PlotRequest::new(generator.time_axis()).panel(Panel::new("Tonal", &tonal, BLUE));
    render(&path, &plot).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<svg"));
}

//! Stacked time-domain plots of generated signals.
//!
//! Each [`Panel`] becomes one subplot sharing the same time window. Output
//! is a fixed 1500x1200 canvas (10x8 inches at 150 DPI); a `.svg` path
//! selects the SVG backend, anything else is encoded by the bitmap backend
//! from the file extension.
//!
//! Text is laid out with an embedded DejaVu Sans face registered as
//! `sans-serif` on first use, so no system font lookup is involved.

use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use crate::constants::{PLOT_HEIGHT_PX, PLOT_WIDTH_PX};
use crate::error::{Result, SignalError};

/// One subplot
pub struct Panel<'a> {
    pub title: String,
    pub y_label: String,
    pub samples: &'a [f64],
    pub color: RGBColor,
    /// Optional vertical marker, in seconds
    pub marker: Option<f64>,
}

impl<'a> Panel<'a> {
    pub fn new(title: impl Into<String>, samples: &'a [f64], color: RGBColor) -> Self {
        Self {
            title: title.into(),
            y_label: "Amplitude".to_string(),
            samples,
            color,
            marker: None,
        }
    }

    pub fn with_marker(mut self, seconds: f64) -> Self {
        self.marker = Some(seconds);
        self
    }
}

/// A time window and the panels drawn against it
pub struct PlotRequest<'a> {
    pub time: &'a [f64],
    pub panels: Vec<Panel<'a>>,
    pub x_label: String,
}

impl<'a> PlotRequest<'a> {
    pub fn new(time: &'a [f64]) -> Self {
        Self {
            time,
            panels: Vec::new(),
            x_label: "Time (seconds)".to_string(),
        }
    }

    pub fn panel(mut self, panel: Panel<'a>) -> Self {
        self.panels.push(panel);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.panels.is_empty() {
            return Err(SignalError::Render("nothing to plot".to_string()));
        }
        if self.time.len() < 2 {
            return Err(SignalError::Render(format!(
                "time window needs at least 2 samples, got {}",
                self.time.len()
            )));
        }
        for panel in &self.panels {
            if panel.samples.len() != self.time.len() {
                return Err(SignalError::Render(format!(
                    "panel '{}' has {} samples for a {}-sample window",
                    panel.title,
                    panel.samples.len(),
                    self.time.len()
                )));
            }
        }
        Ok(())
    }
}

/// Number of leading samples covering `secs` seconds, capped at `available`
pub fn window_len(sample_rate: u32, secs: f64, available: usize) -> usize {
    let n = (secs * sample_rate as f64).round();
    if n.is_finite() && n > 0.0 {
        (n as usize).min(available)
    } else {
        0
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> SignalError {
    SignalError::Render(e.to_string())
}

const FONT_FAMILY: &str = "sans-serif";
static SANS_TTF: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Register the embedded face once per process
fn ensure_fonts() -> Result<()> {
    static REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, SANS_TTF)
                .map_err(|_| "embedded DejaVu Sans font is invalid".to_string())
        })
        .clone()
        .map_err(SignalError::Render)
}

/// Amplitude range with 10% headroom; flat signals get a unit range
fn y_range(samples: &[f64]) -> (f64, f64) {
    let (lo, hi) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        });
    let span = hi - lo;
    if !span.is_finite() || span < 1e-12 {
        let centre = if lo.is_finite() { lo } else { 0.0 };
        return (centre - 1.0, centre + 1.0);
    }
    let pad = span * 0.1;
    (lo - pad, hi + pad)
}

fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, plot: &PlotRequest) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let x_min = plot.time[0];
    let x_max = plot.time[plot.time.len() - 1];
    let areas = root.split_evenly((plot.panels.len(), 1));
    let last = plot.panels.len() - 1;

    for (i, (area, panel)) in areas.iter().zip(&plot.panels).enumerate() {
        let (y_min, y_max) = y_range(panel.samples);

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, (FONT_FAMILY, 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.y_desc(panel.y_label.as_str())
            .light_line_style(BLACK.mix(0.05))
            .bold_line_style(BLACK.mix(0.15));
        if i == last {
            mesh.x_desc(plot.x_label.as_str());
        }
        mesh.draw().map_err(render_err)?;

        chart
            .draw_series(LineSeries::new(
                plot.time
                    .iter()
                    .zip(panel.samples)
                    .map(|(&t, &s)| (t, s)),
                panel.color.stroke_width(1),
            ))
            .map_err(render_err)?;

        if let Some(m) = panel.marker
            && (x_min..=x_max).contains(&m)
        {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(m, y_min), (m, y_max)],
                    BLACK.stroke_width(1),
                )))
                .map_err(render_err)?;
        }
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Render `plot` to `path`
pub fn render(path: impl AsRef<Path>, plot: &PlotRequest) -> Result<()> {
    plot.validate()?;
    ensure_fonts()?;
    let path = path.as_ref();
    let size = (PLOT_WIDTH_PX, PLOT_HEIGHT_PX);

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw(&root, plot)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw(&root, plot)?;
    }

    log::info!(
        "Rendered {} panel(s) over {} samples to {}",
        plot.panels.len(),
        plot.time.len(),
        path.display()
    );
    Ok(())
}

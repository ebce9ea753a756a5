use anyhow::{Context, Result};
use clap::Parser;
use plotters::style::{BLUE, GREEN, RED};
use std::fs;
use std::path::PathBuf;

use hydrosynth::output::{OutputFormat, create_formatter, summary_banner};
use hydrosynth::render::{Panel, PlotRequest, render, window_len};
use hydrosynth::signal_processing::SignalStats;
use hydrosynth::{SceneConfig, SignalGenerator, SignalKind, save_wav};

#[derive(Parser, Debug)]
#[command(name = "hydrosynth")]
#[command(about = "Generate and plot synthetic underwater acoustic signals", long_about = None)]
struct Args {
    /// TOML scene configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Signal duration in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Seed for reproducible noise
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tonal frequency in Hz
    #[arg(long)]
    tonal_hz: Option<f64>,

    /// Plot window length in seconds
    #[arg(short, long)]
    window: Option<f64>,

    /// Plot output path (.png or .svg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write each signal as a mono WAV file into this directory
    #[arg(long)]
    wav_dir: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_scene(args: &Args) -> Result<SceneConfig> {
    let mut scene = match args.config {
        Some(ref path) => SceneConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(rate) = args.sample_rate {
        scene.generator.sample_rate = rate;
    }
    if let Some(duration) = args.duration {
        scene.generator.duration = duration;
    }
    if let Some(seed) = args.seed {
        scene.generator.seed = Some(seed);
    }
    if let Some(hz) = args.tonal_hz {
        scene.tonal.frequency = hz;
    }
    if let Some(window) = args.window {
        scene.plot.window_secs = window;
    }
    if let Some(ref output) = args.output {
        scene.plot.output = output.display().to_string();
    }

    scene.validate().context("Invalid scene configuration")?;
    Ok(scene)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let scene = build_scene(args)?;
    let generator =
        SignalGenerator::new(scene.generator).context("Failed to create signal generator")?;

    println!("=== Hydrosynth - Underwater Acoustic Signals ===");
    println!("{}", summary_banner(generator.config()));
    println!();

    let tonal = generator.generate_tonal(&scene.tonal)?;
    let broadband = generator.generate_broadband(&scene.broadband)?;
    let impulse = generator.generate_impulse(&scene.impulse)?;

    let signals = [
        (SignalKind::Tonal, &tonal),
        (SignalKind::Broadband, &broadband),
        (SignalKind::Impulse, &impulse),
    ];

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    for (kind, signal) in &signals {
        println!("{}", formatter.format(&SignalStats::measure(*kind, signal)));
    }

    if let Some(ref dir) = args.wav_dir {
        fs::create_dir_all(dir).context("Failed to create WAV directory")?;
        for (kind, signal) in &signals {
            let path = dir.join(format!("{}.wav", kind.label()));
            save_wav(&path, signal, generator.sample_rate())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
    }

    let n = window_len(
        generator.sample_rate(),
        scene.plot.window_secs,
        generator.sample_count(),
    );
    let time = &generator.time_axis()[..n];
    let impulse_centre = scene.impulse.position * generator.duration();

    let plot = PlotRequest::new(time)
        .panel(Panel::new(
            format!("Tonal: {} Hz (Machinery)", scene.tonal.frequency),
            &tonal[..n],
            BLUE,
        ))
        .panel(Panel::new(
            format!(
                "Broadband: {}-{} Hz (Ambient Noise)",
                scene.broadband.low_freq, scene.broadband.high_freq
            ),
            &broadband[..n],
            GREEN,
        ))
        .panel(Panel::new("Impulse: Sonar Ping", &impulse[..n], RED).with_marker(impulse_centre));

    render(&scene.plot.output, &plot).context("Failed to render plot")?;
    println!();
    println!("Saved: {}", scene.plot.output);

    Ok(())
}

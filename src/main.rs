use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spirokit::settings::legacy;
use spirokit::{init_logging, render, ArmChain, Spirograph, SpirographConfig, SvgStyle};
use tracing::info;

/// Simulate a spirograph arm chain and export the traced pattern as SVG.
#[derive(Parser, Debug)]
#[command(name = "spirokit", version, about)]
struct Args {
    /// Configuration file: .toml, .json, or the legacy .txt `length,speed` format
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Output SVG file
    #[arg(short, long, default_value = "spirograph.svg")]
    output: PathBuf,

    /// Draw each arm's rotation circle in the export
    #[arg(long)]
    show_circles: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SpirographConfig> {
    let Some(path) = path else {
        info!("no config given, using defaults");
        return Ok(SpirographConfig::default());
    };

    if path.extension().is_some_and(|ext| ext == "txt") {
        // Legacy files carry arm definitions only; display settings keep
        // their defaults.
        let arms = legacy::load_from_file(path)
            .with_context(|| format!("loading legacy config {}", path.display()))?;
        let config = SpirographConfig {
            arms,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    } else {
        Ok(SpirographConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let display = &config.display;

    let chain = ArmChain::from_degrees(&config.lengths(), &config.speeds_deg_per_sec())?;
    let mut sim = Spirograph::new(chain, display.center(), display.frame_rate as f64)?;

    info!(
        arms = sim.chain().arm_count(),
        ticks = args.ticks,
        tick_rate = sim.tick_rate(),
        "running simulation"
    );
    sim.run(args.ticks);

    let style = SvgStyle {
        arm_color: display.arm_color.clone(),
        trail_color: display.trail_color.clone(),
        circle_color: display.circle_color.clone(),
    };
    let show_circles = args.show_circles || display.show_circles;
    let document = render::render_document(
        sim.chain(),
        sim.trail(),
        display.window_width,
        display.window_height,
        &style,
        show_circles,
    )?;
    render::write_svg(&args.output, &document)?;

    info!(
        trail_points = sim.trail().len(),
        trail_length = sim.trail().total_length(),
        output = %args.output.display(),
        "wrote trace"
    );
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use swarm_cli::{load_config, PointerScript, RunOptions, Runner};
use swarm_core::{Swarm, Vector2D, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PointerMode {
    /// No pointer on the surface
    None,
    /// Pointer parked at --pointer-x/--pointer-y
    Fixed,
    /// Pointer circling the middle of the surface
    Orbit,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless swarm animation runner", long_about = None)]
struct Args {
    /// Display width in pixels (the viewport is this times the display scale)
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Display height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Frames per second, 0 runs as fast as possible
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// JSON file with swarm settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the agent count from the config
    #[arg(short, long)]
    agents: Option<usize>,

    /// Seed for agent placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PointerMode::Orbit)]
    pointer: PointerMode,

    /// Fixed pointer x in display pixels
    #[arg(long, default_value_t = 640.0)]
    pointer_x: f32,

    /// Fixed pointer y in display pixels
    #[arg(long, default_value_t = 360.0)]
    pointer_y: f32,

    /// Orbit radius in display pixels
    #[arg(long, default_value_t = 150.0)]
    orbit_radius: f32,

    /// Frames per orbit revolution
    #[arg(long, default_value_t = 240)]
    orbit_period: u64,

    /// Frame on which the pointer leaves the surface
    #[arg(long)]
    leave_at: Option<u64>,

    /// Click every n frames
    #[arg(long)]
    click_every: Option<u64>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(agents) = args.agents {
        config.agent_count = agents;
    }
    let scale = config.display_scale;

    let viewport = Viewport::from_display(args.width, args.height, scale)
        .context("Invalid display size")?;
    log::info!(
        "Display {}x{}, viewport {}x{}",
        args.width,
        args.height,
        viewport.width(),
        viewport.height()
    );

    let swarm = match args.seed {
        Some(seed) => Swarm::new(viewport, config, seed),
        None => Swarm::from_entropy(viewport, config),
    }
    .context("Failed to build swarm")?;

    let pointer = match args.pointer {
        PointerMode::None => PointerScript::None,
        PointerMode::Fixed => PointerScript::Fixed(Viewport::to_internal(
            Vector2D::new(args.pointer_x, args.pointer_y),
            scale,
        )),
        PointerMode::Orbit => PointerScript::Orbit {
            center: Vector2D::new(viewport.width() / 2.0, viewport.height() / 2.0),
            radius: args.orbit_radius * scale,
            period: args.orbit_period,
        },
    };

    let options = RunOptions {
        frames: args.frames,
        fps: args.fps,
        pointer,
        leave_at: args.leave_at,
        click_every: args.click_every,
        report_every: u64::from(args.fps.max(1)),
    };

    let mut runner = Runner::new(swarm, options);
    let summary = runner.run();

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", json);
    } else {
        log::info!(
            "Ran {} frames with {} agents in {} ms: mean speed {:.2}, {} lines, {} circles, {} scattered",
            summary.frames,
            summary.agents,
            summary.elapsed_ms,
            summary.mean_speed,
            summary.lines,
            summary.circles,
            summary.scattered
        );
    }

    Ok(())
}

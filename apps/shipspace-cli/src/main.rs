use clap::{Parser, Subcommand};
use glam::Mat4;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use shipspace_common::AppConfig;
use shipspace_input::{Control, ControlSet};
use shipspace_render::{DebugTextRenderer, Renderer, SceneCamera};
use shipspace_sim::Ship;
use shipspace_tools::ShipInspector;

#[derive(Parser)]
#[command(name = "shipspace-cli", about = "Headless CLI for shipspace sim runs")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a YAML config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Hold a control combination for a number of ticks and print the result
    Steer {
        /// Number of movement ticks to run
        #[arg(short, long, default_value = "100")]
        ticks: u64,
        /// Hold the left control
        #[arg(long)]
        left: bool,
        /// Hold the right control
        #[arg(long)]
        right: bool,
        /// Hold the up control
        #[arg(long)]
        up: bool,
        /// Hold the down control
        #[arg(long)]
        down: bool,
        /// Hold the spin control
        #[arg(long)]
        spin: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("shipspace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", shipspace_render::crate_info());
            println!("input: {}", shipspace_input::crate_info());
            println!("tools: {}", shipspace_tools::crate_info());
            println!(
                "sim defaults: bounds={}x{} increment={} spin={}",
                config.sim.x_bound,
                config.sim.y_bound,
                config.sim.move_increment,
                config.sim.spin_increment
            );
        }
        Commands::Steer {
            ticks,
            left,
            right,
            up,
            down,
            spin,
        } => {
            let mut controls = ControlSet::new();
            if left {
                controls.press(Control::Left);
            }
            if right {
                controls.press(Control::Right);
            }
            if up {
                controls.press(Control::Up);
            }
            if down {
                controls.press(Control::Down);
            }
            if spin {
                controls.press(Control::Spin);
            }

            let mut ship = Ship::from_config(&config.sim);
            match controls.resolve(&config.sim) {
                Some(delta) => {
                    println!(
                        "Holding controls for {ticks} ticks: delta per tick = ({}, {}, {})",
                        delta.x, delta.y, delta.rotation
                    );
                    for _ in 0..ticks {
                        ship.update(delta);
                    }
                }
                None => {
                    println!("No controls held: ship update skipped for all {ticks} ticks");
                }
            }

            let camera = SceneCamera::new(
                Mat4::look_at_rh(config.camera.eye, config.camera.target, glam::Vec3::Y),
                Mat4::perspective_rh(
                    config.camera.fov_degrees.to_radians(),
                    16.0 / 9.0,
                    config.camera.near,
                    config.camera.far,
                ),
            );
            print!("{}", DebugTextRenderer::new().render(&ship, &camera));
            println!("{}", ShipInspector::summary(&ship));
        }
    }

    Ok(())
}

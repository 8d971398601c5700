use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tumble_common::{DemoConfig, Euler, Viewport};
use tumble_render::clock::synthetic_timestamps;
use tumble_render::expr::{float, sqrt};
use tumble_render::{Backend, DebugBackend, PageRoot, mount};
use tumble_render_wgpu::WgpuBackend;

#[derive(Parser)]
#[command(name = "tumble-cli", about = "CLI tool for tumble operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Check whether a GPU backend is available and list adapters
    Probe,
    /// Run the render loop headless with a fixed frame rate
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// YAML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Viewport width
    #[arg(long)]
    width: Option<u32>,
    /// Viewport height
    #[arg(long)]
    height: Option<u32>,
    /// Number of frames to render
    #[arg(short, long, default_value = "5")]
    frames: usize,
    /// Simulated display refresh rate
    #[arg(long, default_value = "60")]
    fps: f64,
    /// Emit one JSON object per frame instead of text
    #[arg(long)]
    json: bool,
}

impl SimulateArgs {
    /// The config file (or defaults) with any viewport flags applied on top.
    fn demo_config(&self) -> anyhow::Result<DemoConfig> {
        let mut demo = match &self.config {
            Some(path) => DemoConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => DemoConfig::default(),
        };
        if let Some(width) = self.width {
            demo.viewport.width = width;
        }
        if let Some(height) = self.height {
            demo.viewport.height = height;
        }
        Ok(demo)
    }
}

#[derive(Serialize)]
struct FrameRecord {
    frame: u64,
    t_ms: f64,
    rotation: Euler,
    aspect: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("tumble-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", tumble_render::crate_info());
            println!("default viewport: {}", Viewport::default());
            println!("default variant: {}", DemoConfig::default().variant);
        }
        Commands::Probe => {
            let backend = WgpuBackend::new();
            let available = backend.is_available();
            tracing::info!(available, "GPU backend capability check");
            println!("GPU backend available: {available}");
            let adapters = backend.adapters();
            tracing::debug!(count = adapters.len(), "adapters enumerated");
            for adapter in adapters {
                println!("  {adapter}");
            }
            let demo = sqrt(float(2.0));
            let line = match demo.eval() {
                Some(value) => format!("{} = {value}", demo.to_wgsl()),
                None => demo.to_wgsl(),
            };
            tracing::info!("{line}");
            println!("{line}");
        }
        Commands::Simulate(args) => {
            let demo = args.demo_config()?;
            let SimulateArgs {
                frames, fps, json, ..
            } = args;
            anyhow::ensure!(fps > 0.0, "fps must be positive");
            tracing::debug!(frames, fps, viewport = %demo.viewport, "simulating");

            let mut page = PageRoot::new();
            let mut mounted = pollster::block_on(mount(&demo, &mut DebugBackend::new(), &mut page))?;

            for t_ms in synthetic_timestamps(fps, frames) {
                let text = mounted.frame(t_ms);
                let rl = mounted.render_loop();
                if json {
                    let record = FrameRecord {
                        frame: rl.frames_rendered(),
                        t_ms,
                        rotation: rl.rotation().unwrap_or_default(),
                        aspect: rl.bootstrap().camera.aspect,
                    };
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    print!("{text}");
                }
            }

            let teardown = mounted.unmount(&mut page);
            if !json {
                println!(
                    "Rendered {} frames; surface detached: {}",
                    teardown.frames_rendered, teardown.detached
                );
            }
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tumble_common::{DemoConfig, Variant, Viewport};
use tumble_render::{LoopClock, Mounted, SurfaceHost, SurfaceId, mount};
use tumble_render_wgpu::{WgpuBackend, WgpuRenderer};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "tumble-desktop", about = "Rotating cube in a desktop window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in physical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in physical pixels
    #[arg(long)]
    height: Option<u32>,

    /// Startup sequence
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Disable 4x MSAA
    #[arg(long)]
    no_antialias: bool,

    /// Follow window resizes instead of keeping the start-time size
    #[arg(long)]
    track_resize: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Deferred,
    Diagnostic,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Deferred => Variant::Deferred,
            VariantArg::Diagnostic => Variant::Diagnostic,
        }
    }
}

impl Cli {
    fn demo_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(width) = self.width {
            config.viewport.width = width;
        }
        if let Some(height) = self.height {
            config.viewport.height = height;
        }
        if let Some(variant) = self.variant {
            config.variant = variant.into();
        }
        if self.no_antialias {
            config.antialias = false;
        }
        if self.track_resize {
            config.track_resize = true;
        }
        Ok(config)
    }
}

/// The window plays the page: attaching a surface shows it, detaching hides it.
struct WindowHost {
    window: Arc<Window>,
    surfaces: Vec<SurfaceId>,
}

impl WindowHost {
    fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            surfaces: Vec::new(),
        }
    }
}

impl SurfaceHost for WindowHost {
    fn attach(&mut self, surface: SurfaceId, _viewport: Viewport) {
        self.surfaces.push(surface);
        self.window.set_visible(true);
    }

    fn detach(&mut self, surface: SurfaceId) -> bool {
        let before = self.surfaces.len();
        self.surfaces.retain(|s| *s != surface);
        if self.surfaces.is_empty() {
            self.window.set_visible(false);
        }
        self.surfaces.len() != before
    }

    fn attached(&self) -> Vec<SurfaceId> {
        self.surfaces.clone()
    }
}

struct DemoApp {
    config: DemoConfig,
    host: Option<WindowHost>,
    mounted: Option<Mounted<WgpuRenderer>>,
    clock: Option<LoopClock>,
    error: Option<anyhow::Error>,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            config,
            host: None,
            mounted: None,
            clock: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        self.error = Some(err);
        self.unmount();
        event_loop.exit();
    }

    fn unmount(&mut self) {
        if let (Some(mounted), Some(host)) = (self.mounted.take(), self.host.as_mut()) {
            mounted.unmount(host);
        }
        self.clock = None;
    }

    fn request_redraw(&self) {
        if let Some(host) = &self.host {
            host.window.request_redraw();
        }
    }
}

impl ApplicationHandler for DemoApp {
    /// Runs setup exactly once, like a page's mount hook.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }

        let viewport = self.config.viewport;
        let attrs = Window::default_attributes()
            .with_title("Tumble")
            .with_inner_size(PhysicalSize::new(viewport.width.max(1), viewport.height.max(1)))
            .with_visible(false);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let mut host = WindowHost::new(window.clone());
        let mut backend = WgpuBackend::with_target(window);
        let result = pollster::block_on(mount(&self.config, &mut backend, &mut host));
        self.host = Some(host);

        match result {
            Ok(mounted) => {
                self.mounted = Some(mounted);
                self.clock = Some(LoopClock::start());
                self.request_redraw();
            }
            Err(e) => self.fail(event_loop, e.into()),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.unmount();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(mounted) = &mut self.mounted {
                    mounted.resize(Viewport::new(size.width, size.height));
                }
            }
            WindowEvent::RedrawRequested => {
                let result = match (&mut self.mounted, &self.clock) {
                    (Some(mounted), Some(clock)) => mounted.frame(clock.elapsed_ms()),
                    _ => return,
                };
                match result {
                    Ok(()) => {}
                    Err(e) if e.is_fatal() => {
                        self.fail(event_loop, e.into());
                        return;
                    }
                    Err(e) => tracing::debug!("frame skipped: {e}"),
                }
                self.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.request_redraw();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.demo_config()?;
    tracing::info!(viewport = %config.viewport, variant = %config.variant, "tumble-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

use crate::gpu::{RenderTarget, WgpuRenderer, choose_sample_count};
use tumble_render::{Backend, BackendInfo, BackendKind, RendererOptions, SetupError};

/// Class a wgpu adapter the way the rest of the workspace reports backends.
pub fn classify(backend: wgpu::Backend, device_type: wgpu::DeviceType) -> BackendKind {
    if device_type == wgpu::DeviceType::Cpu {
        return BackendKind::Software;
    }
    match backend {
        wgpu::Backend::Gl => BackendKind::Fallback,
        wgpu::Backend::Empty => BackendKind::Software,
        _ => BackendKind::Primary,
    }
}

pub fn backend_info(info: &wgpu::AdapterInfo) -> BackendInfo {
    BackendInfo {
        name: info.backend.to_str().to_string(),
        kind: classify(info.backend, info.device_type),
    }
}

/// One adapter the host can see.
#[derive(Debug, Clone)]
pub struct AdapterReport {
    pub name: String,
    pub device_type: String,
    pub backend: BackendInfo,
}

impl std::fmt::Display for AdapterReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] via {}", self.name, self.device_type, self.backend)
    }
}

/// Backend that acquires a wgpu adapter and device.
///
/// With a surface target (usually a window) the renderer presents to it;
/// without one it renders to an offscreen texture.
pub struct WgpuBackend {
    instance: wgpu::Instance,
    target: Option<wgpu::SurfaceTarget<'static>>,
}

impl WgpuBackend {
    /// Headless backend.
    pub fn new() -> Self {
        Self {
            instance: wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            }),
            target: None,
        }
    }

    /// Backend presenting to `target`, e.g. an `Arc<winit::window::Window>`.
    pub fn with_target(target: impl Into<wgpu::SurfaceTarget<'static>>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::new()
        }
    }

    /// Every adapter visible on every backend.
    pub fn adapters(&self) -> Vec<AdapterReport> {
        self.instance
            .enumerate_adapters(wgpu::Backends::all())
            .iter()
            .map(|adapter| {
                let info = adapter.get_info();
                AdapterReport {
                    name: info.name.clone(),
                    device_type: format!("{:?}", info.device_type),
                    backend: backend_info(&info),
                }
            })
            .collect()
    }
}

impl Default for WgpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for WgpuBackend {
    type Renderer = WgpuRenderer;

    fn is_available(&self) -> bool {
        !self
            .instance
            .enumerate_adapters(wgpu::Backends::all())
            .is_empty()
    }

    async fn acquire(&mut self, options: RendererOptions) -> Result<WgpuRenderer, SetupError> {
        let surface = match self.target.take() {
            Some(target) => Some(
                self.instance
                    .create_surface(target)
                    .map_err(|e| SetupError::Surface(e.to_string()))?,
            ),
            None => None,
        };

        let adapter = self
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: surface.as_ref(),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| SetupError::BackendUnavailable("no compatible GPU adapter".into()))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("tumble_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .map_err(|e| SetupError::BackendUnavailable(e.to_string()))?;

        let info = backend_info(&adapter.get_info());
        tracing::info!(adapter = %adapter.get_info().name, "GPU initialized with {info}");

        let (target, format) = match surface {
            Some(surface) => {
                let caps = surface.get_capabilities(&adapter);
                let format = caps
                    .formats
                    .iter()
                    .find(|f| f.is_srgb())
                    .or_else(|| caps.formats.first())
                    .copied()
                    .ok_or_else(|| SetupError::Surface("surface reports no formats".into()))?;
                let config = wgpu::SurfaceConfiguration {
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    format,
                    width: options.viewport.width.max(1),
                    height: options.viewport.height.max(1),
                    present_mode: wgpu::PresentMode::AutoVsync,
                    alpha_mode: caps
                        .alpha_modes
                        .first()
                        .copied()
                        .unwrap_or(wgpu::CompositeAlphaMode::Auto),
                    view_formats: vec![],
                    desired_maximum_frame_latency: 2,
                };
                surface.configure(&device, &config);
                (RenderTarget::Window { surface, config }, format)
            }
            None => {
                let format = wgpu::TextureFormat::Rgba8UnormSrgb;
                (
                    RenderTarget::offscreen(&device, format, options.viewport),
                    format,
                )
            }
        };

        let sample_count = choose_sample_count(options.antialias, &adapter, format);
        Ok(WgpuRenderer::new(
            device,
            queue,
            target,
            format,
            sample_count,
            options.viewport,
            info,
        ))
    }
}

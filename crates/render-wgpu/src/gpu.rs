use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use tumble_common::Viewport;
use tumble_render::{BackendInfo, RenderError, Renderer, SurfaceId};
use tumble_scene::{BoxGeometry, PerspectiveCamera, Scene};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const MSAA_SAMPLES: u32 = 4;
const MAX_INSTANCES: u32 = 256;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct GpuVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
}

impl InstanceData {
    fn from_matrix(model: Mat4) -> Self {
        let cols = model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
        }
    }
}

/// Where finished frames go.
pub(crate) enum RenderTarget {
    /// A window surface, presented every frame.
    Window {
        surface: wgpu::Surface<'static>,
        config: wgpu::SurfaceConfiguration,
    },
    /// An offscreen texture, for headless runs.
    Offscreen { texture: wgpu::Texture },
}

impl RenderTarget {
    pub(crate) fn offscreen(device: &wgpu::Device, format: wgpu::TextureFormat, viewport: Viewport) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen_target"),
            size: extent(viewport),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        Self::Offscreen { texture }
    }
}

fn extent(viewport: Viewport) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: viewport.width.max(1),
        height: viewport.height.max(1),
        depth_or_array_layers: 1,
    }
}

/// Model matrix of a box drawn with the unit-cube vertex buffer.
fn box_instance_matrix(model: Mat4, geometry: &BoxGeometry) -> Mat4 {
    model * Mat4::from_scale(Vec3::new(geometry.width, geometry.height, geometry.depth))
}

/// wgpu-based scene renderer: every mesh in the scene is an instanced box.
pub struct WgpuRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    target: RenderTarget,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    msaa_view: Option<wgpu::TextureView>,
    sample_count: u32,
    format: wgpu::TextureFormat,
    viewport: Viewport,
    surface_id: SurfaceId,
    info: BackendInfo,
}

impl WgpuRenderer {
    pub(crate) fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        target: RenderTarget,
        format: wgpu::TextureFormat,
        sample_count: u32,
        viewport: Viewport,
        info: BackendInfo,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                view: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("normal_material_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::normal_material_shader().into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("normal_material_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<GpuVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        // Unit cube; each instance scales it to its geometry.
        let unit = BoxGeometry::cube(1.0).build();
        let vertices: Vec<GpuVertex> = unit
            .vertices
            .iter()
            .map(|v| GpuVertex {
                position: v.position,
                normal: v.normal,
            })
            .collect();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_index_buffer"),
            contents: bytemuck::cast_slice(&unit.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: MAX_INSTANCES as u64 * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_view = create_depth_view(&device, viewport, sample_count);
        let msaa_view = create_msaa_view(&device, format, viewport, sample_count);

        tracing::debug!(format = ?format, sample_count, %viewport, "wgpu renderer created");

        Self {
            device,
            queue,
            target,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer,
            index_buffer,
            index_count: unit.indices.len() as u32,
            instance_buffer,
            depth_view,
            msaa_view,
            sample_count,
            format,
            viewport,
            surface_id: SurfaceId::new(),
            info,
        }
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Acquire the texture to draw into. Lost or outdated surfaces are
    /// reconfigured and the frame is skipped.
    fn acquire_frame(&self) -> Result<Option<wgpu::SurfaceTexture>, RenderError> {
        let RenderTarget::Window { surface, config } = &self.target else {
            return Ok(None);
        };
        match surface.get_current_texture() {
            Ok(frame) => Ok(Some(frame)),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                surface.configure(&self.device, config);
                Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::Timeout) => Err(RenderError::Timeout),
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(e) => Err(RenderError::Other(e.to_string())),
        }
    }
}

impl Renderer for WgpuRenderer {
    type Output = Result<(), RenderError>;

    /// Render one frame: clear, then every scene mesh as a normal-shaded box.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_projection().to_cols_array_2d(),
                view: camera.view_matrix().to_cols_array_2d(),
            }),
        );

        let instances: Vec<InstanceData> = scene
            .objects()
            .take(MAX_INSTANCES as usize)
            .map(|(_, mesh)| {
                InstanceData::from_matrix(box_instance_matrix(mesh.model_matrix(), &mesh.geometry))
            })
            .collect();

        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let frame = self.acquire_frame()?;
        let view = match (&frame, &self.target) {
            (Some(frame), _) => frame.texture.create_view(&wgpu::TextureViewDescriptor::default()),
            (None, RenderTarget::Offscreen { texture }) => {
                texture.create_view(&wgpu::TextureViewDescriptor::default())
            }
            (None, RenderTarget::Window { .. }) => {
                return Err(RenderError::Other("window surface produced no frame".into()));
            }
        };

        let (color_view, resolve_target) = match &self.msaa_view {
            Some(msaa) => (msaa, Some(&view)),
            None => (&view, None),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if !instances.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.index_count, 0, 0..instances.len() as u32);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        if let Some(frame) = frame {
            frame.present();
        }
        Ok(())
    }

    fn set_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        match &mut self.target {
            RenderTarget::Window { surface, config } => {
                config.width = viewport.width.max(1);
                config.height = viewport.height.max(1);
                surface.configure(&self.device, config);
            }
            RenderTarget::Offscreen { .. } => {
                self.target = RenderTarget::offscreen(&self.device, self.format, viewport);
            }
        }
        self.depth_view = create_depth_view(&self.device, viewport, self.sample_count);
        self.msaa_view = create_msaa_view(&self.device, self.format, viewport, self.sample_count);
    }

    fn size(&self) -> Viewport {
        self.viewport
    }

    fn surface(&self) -> SurfaceId {
        self.surface_id
    }

    fn backend_info(&self) -> BackendInfo {
        self.info.clone()
    }
}

fn create_depth_view(device: &wgpu::Device, viewport: Viewport, sample_count: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: extent(viewport),
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&Default::default())
}

fn create_msaa_view(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    viewport: Viewport,
    sample_count: u32,
) -> Option<wgpu::TextureView> {
    if sample_count <= 1 {
        return None;
    }
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("msaa_color_texture"),
        size: extent(viewport),
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    Some(texture.create_view(&Default::default()))
}

/// Sample count for the requested antialiasing, limited by what the adapter
/// supports for `format`.
pub(crate) fn choose_sample_count(
    antialias: bool,
    adapter: &wgpu::Adapter,
    format: wgpu::TextureFormat,
) -> u32 {
    if !antialias {
        return 1;
    }
    let color = adapter.get_texture_format_features(format).flags;
    let depth = adapter.get_texture_format_features(DEPTH_FORMAT).flags;
    if color.sample_count_supported(MSAA_SAMPLES) && depth.sample_count_supported(MSAA_SAMPLES) {
        MSAA_SAMPLES
    } else {
        tracing::warn!(format = ?format, "4x MSAA unsupported, rendering without antialiasing");
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_matrix_scales_unit_cube_to_geometry() {
        let m = box_instance_matrix(Mat4::IDENTITY, &BoxGeometry::cube(0.2));
        let corner = m.transform_point3(Vec3::splat(0.5));
        assert!((corner - Vec3::splat(0.1)).length() < 1e-6);
    }

    #[test]
    fn instance_matrix_applies_rotation_after_scale() {
        let model = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let m = box_instance_matrix(model, &BoxGeometry::new(2.0, 1.0, 1.0));
        // +X face centre (scaled to x=1) rotates onto -Z.
        let p = m.transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn instance_data_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let data = InstanceData::from_matrix(m);
        assert_eq!(data.model_3, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn gpu_structs_have_expected_layout() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 128);
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
        assert_eq!(std::mem::size_of::<InstanceData>(), 64);
    }
}

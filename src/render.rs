use crate::constants::{
    GLOBE_BASE_COLOR, GLOBE_GRID_COLOR, GLOBE_GRID_LINES, GLOBE_LAT_SEGMENTS, GLOBE_LON_SEGMENTS,
    GLOBE_RADIUS, LIGHT_DIR,
};
use pitchutcha_core::site::Theme;
use pitchutcha_core::{Camera, Pose};
use web_sys as web;
use wgpu::util::DeviceExt;

mod globe;
mod helpers;
pub mod mesh;

use globe::{create_globe_resources, GlobeResources, GlobeUniforms};

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globe: GlobeResources,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    theme: Theme,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits: older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);
        let globe = create_globe_resources(&device, format, GLOBE_WGSL);

        let (vertices, indices) =
            mesh::build_globe_mesh(GLOBE_LAT_SEGMENTS, GLOBE_LON_SEGMENTS, GLOBE_RADIUS);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        log::info!(
            "[globe] {} vertices, {} triangles, {:?}",
            vertices.len(),
            indices.len() / 3,
            format
        );

        let mut state = Self {
            surface,
            device,
            queue,
            config,
            globe,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
            theme: Theme::Dark,
            time_accum: 0.0,
        };
        state.set_theme(Theme::Dark);
        Ok(state)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        let [r, g, b] = helpers::clear_rgb(theme);
        self.clear_color = wgpu::Color { r, g, b, a: 1.0 };
        self.theme = theme;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (_, depth_view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = depth_view;
        }
    }

    pub fn render(&mut self, dt_sec: f32, pose: &Pose) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::for_pose(pose, aspect);
        let uniforms = GlobeUniforms {
            view_proj: (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d(),
            model: pose.model_matrix().to_cols_array_2d(),
            base_color: [GLOBE_BASE_COLOR[0], GLOBE_BASE_COLOR[1], GLOBE_BASE_COLOR[2], 1.0],
            grid_color: [GLOBE_GRID_COLOR[0], GLOBE_GRID_COLOR[1], GLOBE_GRID_COLOR[2], 1.0],
            light_dir: [LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2], 0.0],
            params: [
                self.time_accum,
                GLOBE_GRID_LINES,
                if self.theme == Theme::Light { 1.0 } else { 0.0 },
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.globe.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.globe.pipeline);
            rpass.set_bind_group(0, &self.globe.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

use folio_core::scene::{solid_cube, wire_cube, Camera, CubeTransform};
use folio_core::SceneConfig;
use glam::{Mat4, Vec3};
use web_sys as web;

mod mesh;
use mesh::{create_mesh_resources, MeshResources, MeshUniforms};

// ===================== WebGPU state for the background object =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Inner translucent cube, drawn first
    solid: MeshResources,
    // Outer wireframe cube
    wire: MeshResources,

    width: u32,
    height: u32,
    color: [f32; 3],
    outer_opacity: f32,
    inner_opacity: f32,
    light_dir: Vec3,
    ambient: f32,
    directional: f32,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement, scene: &SceneConfig) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
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
                    // default limits avoid unknown fields on older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
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
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // The canvas is layered over the page, so keep its transparency.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("floating_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::FLOATING_WGSL.into()),
        });
        let (solid_vertices, solid_indices) = solid_cube(scene.inner_size);
        let solid = create_mesh_resources(
            &device,
            &shader,
            format,
            "inner_cube",
            wgpu::PrimitiveTopology::TriangleList,
            &solid_vertices,
            &solid_indices,
        );
        let (wire_vertices, wire_indices) = wire_cube(scene.outer_size);
        let wire = create_mesh_resources(
            &device,
            &shader,
            format,
            "outer_cube",
            wgpu::PrimitiveTopology::LineList,
            &wire_vertices,
            &wire_indices,
        );
        log::info!(
            "[scene] WebGPU ready: {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            solid,
            wire,
            width,
            height,
            color: scene.color,
            outer_opacity: scene.outer_opacity,
            inner_opacity: scene.inner_opacity,
            light_dir: Vec3::from(scene.light_position).normalize_or_zero(),
            ambient: scene.ambient,
            directional: scene.directional,
        })
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
        }
    }

    fn uniforms(&self, view_proj: Mat4, model: Mat4, opacity: f32) -> MeshUniforms {
        MeshUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [self.color[0], self.color[1], self.color[2], opacity],
            light_dir: self.light_dir.extend(0.0).to_array(),
            intensity: [self.ambient, self.directional, 0.0, 0.0],
        }
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        outer: CubeTransform,
        inner: CubeTransform,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = camera.view_projection();
        let solid_u = self.uniforms(view_proj, inner.model_matrix(), self.inner_opacity);
        let wire_u = self.uniforms(view_proj, outer.model_matrix(), self.outer_opacity);
        self.queue
            .write_buffer(&self.solid.uniform_buffer, 0, bytemuck::bytes_of(&solid_u));
        self.queue
            .write_buffer(&self.wire.uniform_buffer, 0, bytemuck::bytes_of(&wire_u));

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
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.solid.draw(&mut rpass);
            self.wire.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Drop for GpuState {
    fn drop(&mut self) {
        self.solid.destroy();
        self.wire.destroy();
        log::info!("[scene] GPU resources released");
    }
}

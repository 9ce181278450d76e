use crate::constants::*;
use crate::core::mesh::{self, MeshData};
use crate::core::{section_position, SceneSim};
use glam::{Mat4, Vec3};
use web_sys as web;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

struct MeshEntry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    model_buffer: wgpu::Buffer,
    model_bg: wgpu::BindGroup,
}

struct ParticleEntry {
    vertex_buffer: wgpu::Buffer,
    count: u32,
    model_buffer: wgpu::Buffer,
    model_bg: wgpu::BindGroup,
}

/// Index of the deformable sphere in the section-mesh list.
const SPHERE_MESH_INDEX: usize = 1;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_view: wgpu::TextureView,

    mesh_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    meshes: Vec<MeshEntry>,
    particles: ParticleEntry,
    // Static normals of the sphere, re-interleaved with the deformed
    // positions on every upload.
    sphere_normals: Vec<Vec3>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

fn interleave(positions: &[Vec3], normals: &[Vec3]) -> Vec<f32> {
    let mut data = Vec::with_capacity(positions.len() * 6);
    for (p, n) in positions.iter().zip(normals.iter()) {
        data.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z]);
    }
    data
}

fn create_uniform_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_data_buffer(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    contents: &[u8],
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: contents.len() as u64,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    queue.write_buffer(&buffer, 0, contents);
    buffer
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth24Plus,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits to stay compatible with older WebGPU impls
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, width, height);

        // Bind group layouts: group 0 = camera globals, group 1 = per-object
        let bgl_globals = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
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
        let bgl_model = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("model_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl_globals, &bgl_model],
            push_constant_ranges: &[],
        });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let particles_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
        });

        let depth_state = wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth24Plus,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        };

        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 6 * 4,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(depth_state.clone()),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &particles_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 3 * 4,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                depth_write_enabled: false,
                ..depth_state
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &particles_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let globals_buffer = create_uniform_buffer(
            &device,
            "globals",
            std::mem::size_of::<Globals>() as u64,
        );
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl_globals,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Section meshes, index order = section order (torus, sphere, knot)
        let section_meshes = [
            ("torus", mesh::torus(1.0, 0.4, 16, 60)),
            ("sphere", mesh::uv_sphere(1.0, 64, 64)),
            ("knot", mesh::torus_knot(0.8, 0.35, 100, 16)),
        ];
        let mut sphere_normals = Vec::new();
        let meshes = section_meshes
            .iter()
            .enumerate()
            .map(|(i, (label, data))| {
                if i == SPHERE_MESH_INDEX {
                    sphere_normals = data.normals.clone();
                }
                Self::create_mesh_entry(&device, &queue, &bgl_model, label, data)
            })
            .collect();

        let particle_points = mesh::particle_positions(PARTICLE_SEED);
        let particle_data: Vec<f32> = particle_points
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect();
        let particle_vb = create_data_buffer(
            &device,
            &queue,
            "particles_vb",
            bytemuck::cast_slice(&particle_data),
            wgpu::BufferUsages::VERTEX,
        );
        let particle_model = create_uniform_buffer(
            &device,
            "particles_model",
            std::mem::size_of::<ModelUniforms>() as u64,
        );
        let particle_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particles_bg"),
            layout: &bgl_model,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: particle_model.as_entire_binding(),
            }],
        });
        let particles = ParticleEntry {
            vertex_buffer: particle_vb,
            count: particle_points.len() as u32,
            model_buffer: particle_model,
            model_bg: particle_bg,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            mesh_pipeline,
            particle_pipeline,
            globals_buffer,
            globals_bg,
            meshes,
            particles,
            sphere_normals,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    fn create_mesh_entry(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bgl_model: &wgpu::BindGroupLayout,
        label: &str,
        data: &MeshData,
    ) -> MeshEntry {
        let vertex_data = interleave(&data.positions, &data.normals);
        let vertex_buffer = create_data_buffer(
            device,
            queue,
            &format!("{label}_vb"),
            bytemuck::cast_slice(&vertex_data),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = create_data_buffer(
            device,
            queue,
            &format!("{label}_ib"),
            bytemuck::cast_slice(&data.indices),
            wgpu::BufferUsages::INDEX,
        );
        let model_buffer = create_uniform_buffer(
            device,
            &format!("{label}_model"),
            std::mem::size_of::<ModelUniforms>() as u64,
        );
        let model_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label}_bg")),
            layout: bgl_model,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });
        MeshEntry {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            model_buffer,
            model_bg,
        }
    }

    /// Re-upload the deformed sphere positions, re-interleaved with the
    /// static normals. The displacement is tiny, so the original normals
    /// remain a good shading approximation.
    pub fn update_sphere(&mut self, positions: &[Vec3]) {
        if positions.len() != self.sphere_normals.len() {
            return;
        }
        let vertex_data = interleave(positions, &self.sphere_normals);
        self.queue.write_buffer(
            &self.meshes[SPHERE_MESH_INDEX].vertex_buffer,
            0,
            bytemuck::cast_slice(&vertex_data),
        );
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(&mut self, sim: &SceneSim) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Camera: rig-smoothed group plus scroll-driven height, looking
        // straight down -Z (the camera itself never rotates).
        let eye = sim.rig.eye(CAMERA_Z);
        let aspect = self.width as f32 / (self.height as f32).max(1.0);
        let proj = Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        let view_m = Mat4::look_to_rh(eye, -Vec3::Z, Vec3::Y);
        let globals = Globals {
            view_proj: (proj * view_m).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        for (i, entry) in self.meshes.iter().enumerate() {
            let rot = sim.rotations[i];
            let model = Mat4::from_translation(section_position(i))
                * Mat4::from_euler(glam::EulerRot::XYZ, rot.x, rot.y, rot.z);
            let uniforms = ModelUniforms {
                model: model.to_cols_array_2d(),
                color: MATERIAL_COLOR,
            };
            self.queue
                .write_buffer(&entry.model_buffer, 0, bytemuck::bytes_of(&uniforms));
        }
        let particle_model = ModelUniforms {
            model: Mat4::from_rotation_y(sim.particle_rotation_y).to_cols_array_2d(),
            color: MATERIAL_COLOR,
        };
        self.queue.write_buffer(
            &self.particles.model_buffer,
            0,
            bytemuck::bytes_of(&particle_model),
        );

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

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for entry in &self.meshes {
                rpass.set_bind_group(1, &entry.model_bg, &[]);
                rpass.set_vertex_buffer(0, entry.vertex_buffer.slice(..));
                rpass.set_index_buffer(entry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..entry.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_bind_group(1, &self.particles.model_bg, &[]);
            rpass.set_vertex_buffer(0, self.particles.vertex_buffer.slice(..));
            rpass.draw(0..self.particles.count, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

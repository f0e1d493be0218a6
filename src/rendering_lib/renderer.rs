// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use log::{debug, trace};
use wgpu::util::DeviceExt;

use super::frame::{FrameBuilder, Primitive};
use super::vertex::Vertex;

const INITIAL_VERTEX_CAPACITY: usize = 4096;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenDimensionsUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

impl ScreenDimensionsUniform {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            _padding1: 0.0,
            _padding2: 0.0,
        }
    }
}

/// Draws a [`FrameBuilder`] with one pipeline per primitive topology.
pub struct Renderer {
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,

    screen_uniform_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        initial_screen_width: f32,
        initial_screen_height: f32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Raycaster Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let screen_uniform_data =
            ScreenDimensionsUniform::new(initial_screen_width, initial_screen_height);
        let screen_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Dimensions Uniform Buffer"),
            contents: bytemuck::bytes_of(&screen_uniform_data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
                label: Some("screen_dimensions_bind_group_layout"),
            });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_uniform_buffer.as_entire_binding(),
            }],
            label: Some("screen_dimensions_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Raycaster Pipeline Layout"),
            bind_group_layouts: &[&screen_bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader_module,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            "Line Pipeline",
        );
        let triangle_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader_module,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            "Triangle Pipeline",
        );

        Self {
            line_pipeline,
            triangle_pipeline,
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            screen_uniform_buffer,
            screen_bind_group,
        }
    }

    /// Reallocates the vertex buffer when a frame outgrows it.
    fn ensure_capacity(&mut self, device: &wgpu::Device, required: usize) {
        if required <= self.vertex_capacity {
            return;
        }
        let new_capacity = required.next_power_of_two();
        debug!(
            "growing vertex buffer from {} to {} vertices",
            self.vertex_capacity, new_capacity
        );
        self.vertex_buffer = create_vertex_buffer(device, new_capacity);
        self.vertex_capacity = new_capacity;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render_frame(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        frame: &FrameBuilder,
        screen_width: f32,
        screen_height: f32,
        clear_color: wgpu::Color,
    ) {
        let screen_uniform_data = ScreenDimensionsUniform::new(screen_width, screen_height);
        queue.write_buffer(
            &self.screen_uniform_buffer,
            0,
            bytemuck::bytes_of(&screen_uniform_data),
        );

        if !frame.is_empty() {
            self.ensure_capacity(device, frame.vertices().len());
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(frame.vertices()));
        }
        trace!(
            "frame: {} vertices in {} batches",
            frame.vertices().len(),
            frame.batches().len()
        );

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if frame.is_empty() {
            return;
        }

        let used_bytes = (frame.vertices().len() * std::mem::size_of::<Vertex>()) as u64;
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..used_bytes));
        for batch in frame.batches() {
            let pipeline = match batch.primitive {
                Primitive::Lines => &self.line_pipeline,
                Primitive::Triangles => &self.triangle_pipeline,
            };
            render_pass.set_pipeline(pipeline);
            render_pass.draw(batch.vertices.clone(), 0..1);
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Scene Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader_module: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader_module,
            entry_point: "vs_main",
            buffers: &[Vertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader_module,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

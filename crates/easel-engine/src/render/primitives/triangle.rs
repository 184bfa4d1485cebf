use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;

use super::common::additive_blend;

/// Vertex-colored triangle pipeline.
///
/// Positions arrive in NDC, so the vertex shader is a passthrough and the
/// pipeline needs no bind groups. One vertex buffer holds every triangle
/// list of the frame; spans index into it.
#[derive(Default)]
pub(crate) struct TrianglePipeline {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl TrianglePipeline {
    /// Creates GPU resources as needed and uploads this frame's vertices.
    pub(crate) fn prepare(&mut self, ctx: &RenderCtx<'_>, vertices: &[TriangleVertex]) {
        self.ensure_pipeline(ctx);
        self.ensure_vertex_capacity(ctx, vertices.len());

        if vertices.is_empty() {
            return;
        }
        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(vertex_vbo, 0, bytemuck::cast_slice(vertices));
    }

    /// True once every GPU resource exists. `SceneRenderer` checks this
    /// before opening the pass so `bind` cannot bail mid-pass.
    pub(crate) fn is_ready(&self) -> bool {
        self.pipeline.is_some() && self.vertex_vbo.is_some()
    }

    /// Binds the pipeline and vertex buffer on the active pass. Triangle
    /// spans then draw with `draw(first..last, 0..1)`.
    pub(crate) fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) -> bool {
        let Some(pipeline) = self.pipeline.as_ref() else { return false };
        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return false };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..));
        true
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("easel triangle pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[TriangleVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(additive_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("triangle pipeline (re)built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<TriangleVertex>()) as u64;
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel triangle vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex data layout (24 bytes):
///
///  offset  0  position  [f32; 2]   loc 0  (NDC)
///  offset  8  color     [f32; 4]   loc 1  (straight RGBA)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct TriangleVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl TriangleVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TriangleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

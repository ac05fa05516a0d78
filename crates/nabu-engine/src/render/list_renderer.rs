use bytemuck::{Pod, Zeroable};

use crate::context::Context;
use crate::draw::{DrawIdx, TextureId, Vertex};
use crate::render::{RenderCtx, RenderTarget};

// GPU buffers never shrink; floors keep tiny first frames from reallocating
// on every added shape.
const MIN_VERTEX_CAPACITY: usize = 256;
const MIN_INDEX_CAPACITY: usize = 512;

/// Renderer for finalized draw lists.
///
/// One instance serves every list in a [`Context`]: per-list vertex/index GPU
/// buffers grow on demand (next power of two) and are reused across frames.
/// `TextureId::SOLID` commands bind a built-in 1×1 white texture, so solid
/// and textured draws share one pipeline.
///
/// All GPU state is created lazily on first render and recreated when the
/// surface format changes.
#[derive(Default)]
pub struct DrawListRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    white_texture: Option<wgpu::Texture>,
    white_view: Option<wgpu::TextureView>,

    list_buffers: Vec<ListBuffers>,

    warned_unknown_texture: bool,
}

/// Per-draw-list GPU buffers, indexed in step with the context's collection.
struct ListBuffers {
    vbo: wgpu::Buffer,
    vbo_capacity: usize, // vertices
    ibo: wgpu::Buffer,
    ibo_capacity: usize, // indices
}

impl DrawListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every finalized list in `context`, in collection order.
    ///
    /// Call after `Context::render_frame`; the lists must not be mutated
    /// until this returns.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, context: &Context) {
        self.ensure_pipeline(ctx);
        self.ensure_white_texture(ctx);
        self.ensure_sampler(ctx);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);

        // Upload every list's geometry before the pass opens. Buffer writes
        // land at submit time, ahead of the encoded pass, and each list owns
        // its buffers so uploads cannot alias.
        for (i, list) in context.draw_lists().iter().enumerate() {
            if list.vertices().is_empty() {
                continue;
            }
            self.ensure_list_capacity(ctx, i, list.vertices().len(), list.indices().len());

            let buffers = &self.list_buffers[i];
            ctx.queue.write_buffer(&buffers.vbo, 0, bytemuck::cast_slice(list.vertices()));
            ctx.queue.write_buffer(&buffers.ibo, 0, bytemuck::cast_slice(list.indices()));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("nabu draw list pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);

        for (i, list) in context.draw_lists().iter().enumerate() {
            if list.vertices().is_empty() {
                continue;
            }
            let buffers = &self.list_buffers[i];
            rpass.set_vertex_buffer(0, buffers.vbo.slice(..));
            rpass.set_index_buffer(buffers.ibo.slice(..), wgpu::IndexFormat::Uint16);

            for cmd in list.commands() {
                if cmd.index_count == 0 {
                    continue;
                }
                if cmd.texture != TextureId::SOLID && !self.warned_unknown_texture {
                    log::warn!(
                        "draw command references texture {:?}; only the solid texture is bound",
                        cmd.texture
                    );
                    self.warned_unknown_texture = true;
                }
                rpass.draw_indexed(cmd.index_offset..cmd.index_offset + cmd.index_count, 0, 0..1);
            }
        }
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("nabu gui shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/gui.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("nabu gui bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<ViewportUniform>() as u64,
                        ),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("nabu gui pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("nabu gui pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Vertex colors are straight-alpha, unlike a premultiplied
                    // compositor path.
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_white_texture(&mut self, ctx: &RenderCtx<'_>) {
        if self.white_texture.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("nabu solid white texture"),
            size: wgpu::Extent3d { width: 1, height: 1, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &[0xff, 0xff, 0xff, 0xff],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d { width: 1, height: 1, depth_or_array_layers: 1 },
        );

        self.white_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.white_texture = Some(texture);
        self.bind_group = None;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("nabu gui sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(white_view) = self.white_view.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("nabu gui viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("nabu gui bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(white_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_list_capacity(
        &mut self,
        ctx: &RenderCtx<'_>,
        index: usize,
        vtx_count: usize,
        idx_count: usize,
    ) {
        while self.list_buffers.len() <= index {
            let i = self.list_buffers.len();
            self.list_buffers.push(ListBuffers {
                vbo: create_vertex_buffer(ctx, i, MIN_VERTEX_CAPACITY),
                vbo_capacity: MIN_VERTEX_CAPACITY,
                ibo: create_index_buffer(ctx, i, MIN_INDEX_CAPACITY),
                ibo_capacity: MIN_INDEX_CAPACITY,
            });
        }

        let buffers = &mut self.list_buffers[index];
        if vtx_count > buffers.vbo_capacity {
            let new_cap = vtx_count.next_power_of_two();
            buffers.vbo = create_vertex_buffer(ctx, index, new_cap);
            buffers.vbo_capacity = new_cap;
        }
        if idx_count > buffers.ibo_capacity {
            let new_cap = idx_count.next_power_of_two();
            buffers.ibo = create_index_buffer(ctx, index, new_cap);
            buffers.ibo_capacity = new_cap;
        }
    }
}

fn create_vertex_buffer(ctx: &RenderCtx<'_>, list_index: usize, capacity: usize) -> wgpu::Buffer {
    ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("nabu list {list_index} vbo")),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(ctx: &RenderCtx<'_>, list_index: usize, capacity: usize) -> wgpu::Buffer {
    ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("nabu list {list_index} ibo")),
        size: (capacity * std::mem::size_of::<DrawIdx>()) as u64,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    viewport: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3, // pos
    1 => Float32x2, // uv
    2 => Uint32     // packed color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

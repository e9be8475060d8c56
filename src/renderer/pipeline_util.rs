use crate::gpu::render_context::DEPTH_FORMAT;

/// Inputs shared by the two scene pipelines.
pub(crate) struct PipelineSpec<'a> {
    /// Debug label; the layout is labelled `"{label} Layout"`.
    pub label: &'a str,
    /// Module providing `vs_main` and `fs_main`.
    pub shader: &'a wgpu::ShaderModule,
    /// Bind group layouts in slot order.
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    /// Single interleaved vertex buffer.
    pub vertex_layout: wgpu::VertexBufferLayout<'static>,
    /// Swapchain format.
    pub format: wgpu::TextureFormat,
    /// Primitive assembly.
    pub topology: wgpu::PrimitiveTopology,
    /// Depth testing, if the pass has a depth attachment.
    pub depth_stencil: Option<wgpu::DepthStencilState>,
}

/// Standard depth-stencil state for the lit room.
pub(crate) fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Build an opaque single-target render pipeline. No face culling: walls
/// and quads are viewed from either side.
pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    spec: PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    let layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Layout", spec.label)),
            bind_group_layouts: spec.bind_group_layouts,
            push_constant_ranges: &[],
        });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: spec.shader,
            entry_point: Some("vs_main"),
            buffers: &[spec.vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: spec.shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: spec.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: spec.depth_stencil,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

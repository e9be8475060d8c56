//! Depth-tested, lit triangle pass for the walkthrough.

use super::lighting::{LightBinding, LightUniform};
use super::pipeline_util::{self, PipelineSpec};
use crate::camera::CameraBinding;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::scene::RoomVertex;

/// Pipeline, light and vertex storage for the room mesh.
pub struct RoomPass {
    pipeline: wgpu::RenderPipeline,
    light: LightBinding,
    vertices: TypedBuffer<RoomVertex>,
}

impl RoomPass {
    /// Build the pipeline against the shared camera layout.
    #[must_use]
    pub fn new(context: &RenderContext, camera: &CameraBinding) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/room.wgsl"
        ));
        let light = LightBinding::new(device, &LightUniform::default());

        let pipeline = pipeline_util::create_pipeline(
            device,
            PipelineSpec {
                label: "Room Pipeline",
                shader: &shader,
                bind_group_layouts: &[&camera.layout, &light.layout],
                vertex_layout: RoomVertex::LAYOUT,
                format: context.format(),
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
            },
        );

        Self {
            pipeline,
            light,
            vertices: TypedBuffer::with_capacity(
                device,
                "Room Vertices",
                4096,
                wgpu::BufferUsages::VERTEX,
            ),
        }
    }

    /// Replace the mesh.
    pub fn upload(
        &mut self,
        context: &RenderContext,
        vertices: &[RoomVertex],
    ) {
        let _ = self
            .vertices
            .write(&context.device, &context.queue, vertices);
    }

    /// Record the draw. The camera bind group is set by the caller.
    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        if self.vertices.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.light.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        pass.draw(0..self.vertices.count() as u32, 0..1);
    }
}

//! Point-list pass for the floor plan.

use super::pipeline_util::{self, PipelineSpec};
use crate::camera::CameraBinding;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::scene::PlanPoint;

/// One floor-plan pixel on the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlanVertex {
    /// Pixel centre in plan space.
    pub position: [f32; 2],
    /// Linear RGB.
    pub color: [f32; 3],
}

impl PlanVertex {
    /// Vertex buffer layout matching `plan.wgsl` locations 0..=1.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> =
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x2,
                1 => Float32x3,
            ],
        };
}

impl From<&PlanPoint> for PlanVertex {
    fn from(p: &PlanPoint) -> Self {
        Self {
            position: [p.x as f32 + 0.5, p.y as f32 + 0.5],
            color: p.color,
        }
    }
}

/// Pipeline and vertex storage for the floor plan.
pub struct PlanPass {
    pipeline: wgpu::RenderPipeline,
    vertices: TypedBuffer<PlanVertex>,
    scratch: Vec<PlanVertex>,
}

impl PlanPass {
    /// Build the pipeline against the shared camera layout.
    #[must_use]
    pub fn new(context: &RenderContext, camera: &CameraBinding) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/plan.wgsl"
        ));
        let pipeline = pipeline_util::create_pipeline(
            device,
            PipelineSpec {
                label: "Plan Pipeline",
                shader: &shader,
                bind_group_layouts: &[&camera.layout],
                vertex_layout: PlanVertex::LAYOUT,
                format: context.format(),
                topology: wgpu::PrimitiveTopology::PointList,
                depth_stencil: None,
            },
        );

        Self {
            pipeline,
            vertices: TypedBuffer::with_capacity(
                device,
                "Plan Vertices",
                4096,
                wgpu::BufferUsages::VERTEX,
            ),
            scratch: Vec::new(),
        }
    }

    /// Replace the plan pixels.
    pub fn upload(
        &mut self,
        context: &RenderContext,
        points: &[PlanPoint],
    ) {
        self.scratch.clear();
        self.scratch.extend(points.iter().map(PlanVertex::from));
        let _ = self.vertices.write(
            &context.device,
            &context.queue,
            &self.scratch,
        );
    }

    /// Record the draw. The camera bind group is set by the caller.
    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        if self.vertices.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        pass.draw(0..self.vertices.count() as u32, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_vertices_sit_on_pixel_centres() {
        let v = PlanVertex::from(&PlanPoint {
            x: 100,
            y: 700,
            color: [1.0, 1.0, 1.0],
        });
        assert_eq!(v.position, [100.5, 700.5]);
        assert_eq!(size_of::<PlanVertex>(), 20);
    }
}

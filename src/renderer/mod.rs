//! Rendering of a prepared [`Frame`]: the floor plan as a point list, or
//! the room as a lit, depth-tested triangle list.

/// Point light uniform and bind group.
pub mod lighting;
pub(crate) mod pipeline_util;
/// Floor-plan point pass.
pub mod plan_pass;
/// Lit room triangle pass.
pub mod room_pass;

use crate::camera::{CameraBinding, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::scene::{PlanPoint, RoomVertex};
use plan_pass::PlanPass;
use room_pass::RoomPass;

/// Background colour of both views.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.05,
    b: 0.10,
    a: 1.0,
};

/// Everything needed to draw one frame, computed from session state.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Top-down floor plan.
    Plan {
        /// Pixel-space orthographic camera.
        camera: CameraUniform,
        /// Pixels to plot.
        points: Vec<PlanPoint>,
    },
    /// First-person walkthrough.
    Room {
        /// Perspective camera at the walker's eye.
        camera: CameraUniform,
        /// World-space lit triangles.
        vertices: Vec<RoomVertex>,
    },
}

/// Owns the GPU side of both views.
pub struct SceneRenderer {
    camera: CameraBinding,
    depth_view: wgpu::TextureView,
    room: RoomPass,
    plan: PlanPass,
}

impl SceneRenderer {
    /// Build pipelines and the depth target for the context's surface.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let camera = CameraBinding::new(&context.device, "Camera Buffer");
        let room = RoomPass::new(context, &camera);
        let plan = PlanPass::new(context, &camera);
        Self {
            depth_view: context.create_depth_view(),
            camera,
            room,
            plan,
        }
    }

    /// Recreate size-dependent targets after the surface was reconfigured.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth_view = context.create_depth_view();
    }

    /// Upload `frame` and record its pass into `encoder`, targeting `view`.
    pub fn render(
        &mut self,
        context: &RenderContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        frame: &Frame,
    ) {
        match frame {
            Frame::Plan { camera, points } => {
                self.camera.write(&context.queue, camera);
                self.plan.upload(context, points);

                let mut pass =
                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("Plan Pass"),
                        color_attachments: &[Some(color_attachment(view))],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });
                pass.set_bind_group(0, &self.camera.bind_group, &[]);
                self.plan.draw(&mut pass);
            }
            Frame::Room { camera, vertices } => {
                self.camera.write(&context.queue, camera);
                self.room.upload(context, vertices);

                let mut pass =
                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("Room Pass"),
                        color_attachments: &[Some(color_attachment(view))],
                        depth_stencil_attachment: Some(
                            wgpu::RenderPassDepthStencilAttachment {
                                view: &self.depth_view,
                                depth_ops: Some(wgpu::Operations {
                                    load: wgpu::LoadOp::Clear(1.0),
                                    store: wgpu::StoreOp::Store,
                                }),
                                stencil_ops: None,
                            },
                        ),
                        ..Default::default()
                    });
                pass.set_bind_group(0, &self.camera.bind_group, &[]);
                self.room.draw(&mut pass);
            }
        }
    }
}

fn color_attachment(
    view: &wgpu::TextureView,
) -> wgpu::RenderPassColorAttachment<'_> {
    wgpu::RenderPassColorAttachment {
        view,
        depth_slice: None,
        resolve_target: None,
        ops: wgpu::Operations {
            load: wgpu::LoadOp::Clear(CLEAR_COLOR),
            store: wgpu::StoreOp::Store,
        },
    }
}

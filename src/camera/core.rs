use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera with the projection from `options` for a `width`×`height`
    /// viewport. Eye and target are filled in by the controller.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }
}

/// Width over height, treating zero dimensions as one pixel.
#[must_use]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Pixel-space orthographic projection with the origin at the bottom-left
/// corner of a `width`×`height` viewport.
#[must_use]
pub fn plan_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width.max(1.0), 0.0, height.max(1.0), -1.0, 1.0)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
    }

    /// Uniform for the floor plan: pixel-space orthographic, no eye.
    #[must_use]
    pub fn plan(width: f32, height: f32) -> Self {
        Self {
            view_proj: plan_projection(width, height).to_cols_array_2d(),
            ..Self::new()
        }
    }
}

/// Uniform buffer and bind group carrying a [`CameraUniform`].
pub struct CameraBinding {
    /// Uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout used by every pipeline that reads the camera.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group at slot 0.
    pub bind_group: wgpu::BindGroup,
}

impl CameraBinding {
    /// Allocate the buffer and bind group, visible to both shader stages.
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&[CameraUniform::new()]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Camera Bind Group"),
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload a new uniform value.
    pub fn write(&self, queue: &wgpu::Queue, uniform: &CameraUniform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniform));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn plan_projection_maps_pixels_to_clip_space() {
        let proj = plan_projection(1000.0, 900.0);
        let bl = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let tr = proj * Vec4::new(1000.0, 900.0, 0.0, 1.0);
        assert!(bl.truncate().abs_diff_eq(Vec3::new(-1.0, -1.0, 0.5), 1e-5));
        assert!(tr.truncate().abs_diff_eq(Vec3::new(1.0, 1.0, 0.5), 1e-5));
    }

    #[test]
    fn target_lands_in_front_of_the_near_plane() {
        let mut camera = Camera::new(&CameraOptions::default(), 1000, 900);
        camera.eye = Vec3::new(0.0, 1.7, 7.0);
        camera.target = Vec3::new(0.0, 1.7, 6.0);
        let clip = camera.build_matrix() * Vec4::new(0.0, 1.7, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..1.0).contains(&ndc.z));
    }

    #[test]
    fn zero_sized_viewport_keeps_a_finite_aspect() {
        assert_eq!(aspect_ratio(0, 0), 1.0);
        assert!((aspect_ratio(1000, 900) - 1000.0 / 900.0).abs() < 1e-6);
    }
}

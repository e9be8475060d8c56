//! Single point light over the room.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::bounds::ROOM_HEIGHT;

/// GPU uniform for the room light.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// World-space light position (`w` = 1).
    pub position: [f32; 4],
    /// Light ambient colour.
    pub ambient: [f32; 4],
    /// Light diffuse colour.
    pub diffuse: [f32; 4],
    /// Scene-wide ambient term added regardless of the light.
    pub global_ambient: [f32; 4],
}

impl LightUniform {
    /// Hanging just below the ceiling, towards the back of the room.
    pub const POSITION: Vec3 = Vec3::new(0.0, ROOM_HEIGHT - 0.1, -2.0);
}

impl Default for LightUniform {
    fn default() -> Self {
        Self {
            position: Self::POSITION.extend(1.0).to_array(),
            ambient: [0.25, 0.25, 0.30, 1.0],
            diffuse: [0.9, 0.9, 0.9, 1.0],
            global_ambient: [0.2, 0.2, 0.2, 1.0],
        }
    }
}

/// Uniform buffer and bind group for [`LightUniform`].
pub struct LightBinding {
    /// Layout for slot 1 of the room pipeline.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group at slot 1.
    pub bind_group: wgpu::BindGroup,
    _buffer: wgpu::Buffer,
}

impl LightBinding {
    /// Upload `uniform` once; the light never moves.
    #[must_use]
    pub fn new(device: &wgpu::Device, uniform: &LightUniform) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Buffer"),
                contents: bytemuck::bytes_of(uniform),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Light Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Light Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self {
            layout,
            bind_group,
            _buffer: buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_sits_under_the_ceiling() {
        let light = LightUniform::default();
        let p = glam::Vec4::from_array(light.position);
        assert!(p.abs_diff_eq(glam::Vec4::new(0.0, 2.9, -2.0, 1.0), 1e-6));
        assert_eq!(size_of::<LightUniform>(), 64);
    }
}

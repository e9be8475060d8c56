//! Tessellation of scene shapes into lit triangle lists.

use std::f32::consts::TAU;

use glam::{Mat3, Mat4, Vec3};

use super::node::{DrawItem, Shape};

/// One world-space vertex of the lit room mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RoomVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space unit normal.
    pub normal: [f32; 3],
    /// Linear RGB material colour.
    pub color: [f32; 3],
}

impl RoomVertex {
    /// Vertex buffer layout matching `room.wgsl` locations 0..=2.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> =
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3,
                1 => Float32x3,
                2 => Float32x3,
            ],
        };
}

/// Position/normal pair in a shape's local space.
type LocalVertex = (Vec3, Vec3);

fn push_quad(out: &mut Vec<LocalVertex>, c: [Vec3; 4], n: Vec3) {
    out.extend_from_slice(&[
        (c[0], n),
        (c[1], n),
        (c[2], n),
        (c[0], n),
        (c[2], n),
        (c[3], n),
    ]);
}

/// Unit cube centred on the origin, 36 vertices.
fn unit_box(out: &mut Vec<LocalVertex>) {
    let h = 0.5;
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Y,
            [
                Vec3::new(-h, h, -h),
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, -h, -h),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
                Vec3::new(h, -h, h),
            ],
        ),
    ];
    for (normal, corners) in faces {
        push_quad(out, corners, normal);
    }
}

/// Y-aligned capped cylinder centred on the origin, `12 * segments`
/// vertices.
fn cylinder(
    out: &mut Vec<LocalVertex>,
    radius: f32,
    height: f32,
    segments: u32,
) {
    let segments = segments.max(3);
    let half = height * 0.5;
    let rim = |i: u32| {
        let theta = TAU * i as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        Vec3::new(cos, 0.0, sin)
    };

    for i in 0..segments {
        let (a, b) = (rim(i), rim(i + 1));
        let (pa, pb) = (a * radius, b * radius);
        let lo = Vec3::new(0.0, -half, 0.0);
        let hi = Vec3::new(0.0, half, 0.0);

        // side, smooth-shaded
        out.extend_from_slice(&[
            (pa + lo, a),
            (pa + hi, a),
            (pb + hi, b),
            (pa + lo, a),
            (pb + hi, b),
            (pb + lo, b),
        ]);
        out.extend_from_slice(&[
            (hi, Vec3::Y),
            (pb + hi, Vec3::Y),
            (pa + hi, Vec3::Y),
            (lo, Vec3::NEG_Y),
            (pa + lo, Vec3::NEG_Y),
            (pb + lo, Vec3::NEG_Y),
        ]);
    }
}

fn local_vertices(shape: &Shape, out: &mut Vec<LocalVertex>) {
    match *shape {
        Shape::UnitBox => unit_box(out),
        Shape::Cylinder {
            radius,
            height,
            segments,
        } => cylinder(out, radius, height, segments),
        Shape::Quad { corners, normal } => push_quad(out, corners, normal),
    }
}

/// Matrix taking local normals to world normals.
fn normal_matrix(world: &Mat4) -> Mat3 {
    let linear = Mat3::from_mat4(*world);
    if linear.determinant().abs() > f32::EPSILON {
        linear.inverse().transpose()
    } else {
        linear
    }
}

/// Tessellate every draw item into one world-space triangle list.
#[must_use]
pub fn tessellate(items: &[DrawItem]) -> Vec<RoomVertex> {
    let mut out = Vec::new();
    let mut local = Vec::new();

    for item in items {
        local.clear();
        local_vertices(&item.shape, &mut local);
        let normals = normal_matrix(&item.world);
        let color = item.color.to_array();

        out.extend(local.iter().map(|&(p, n)| RoomVertex {
            position: item.world.transform_point3(p).to_array(),
            normal: (normals * n).normalize_or_zero().to_array(),
            color,
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    fn item(shape: Shape, world: Mat4) -> DrawItem {
        DrawItem {
            name: "test",
            world,
            shape,
            color: Vec3::ONE,
        }
    }

    #[test]
    fn box_and_cylinder_vertex_counts() {
        let verts = tessellate(&[
            item(Shape::UnitBox, Mat4::IDENTITY),
            item(
                Shape::Cylinder {
                    radius: 1.0,
                    height: 1.0,
                    segments: 10,
                },
                Mat4::IDENTITY,
            ),
        ]);
        assert_eq!(verts.len(), 36 + 12 * 10);
    }

    #[test]
    fn scaled_box_spans_its_size() {
        let world = Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 0.5, 4.0),
            Quat::IDENTITY,
            Vec3::new(1.0, 1.0, 1.0),
        );
        let verts = tessellate(&[item(Shape::UnitBox, world)]);
        let (mut min, mut max) = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
        for v in &verts {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        assert!(min.abs_diff_eq(Vec3::new(0.0, 0.75, -1.0), 1e-5));
        assert!(max.abs_diff_eq(Vec3::new(2.0, 1.25, 3.0), 1e-5));
    }

    #[test]
    fn normals_stay_unit_and_perpendicular_under_non_uniform_scale() {
        let world = Mat4::from_scale(Vec3::new(5.0, 0.1, 1.0))
            * Mat4::from_rotation_z(0.3);
        let verts = tessellate(&[item(Shape::UnitBox, world)]);
        for tri in verts.chunks_exact(3) {
            let [a, b, c] =
                [tri[0], tri[1], tri[2]].map(|v| Vec3::from(v.position));
            let n = Vec3::from(tri[0].normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(b - a).abs() < 1e-3);
            assert!(n.dot(c - a).abs() < 1e-3);
        }
    }

    #[test]
    fn degenerate_cylinder_gets_three_facets() {
        let verts = tessellate(&[item(
            Shape::Cylinder {
                radius: 1.0,
                height: 1.0,
                segments: 0,
            },
            Mat4::IDENTITY,
        )]);
        assert_eq!(verts.len(), 36);
    }
}

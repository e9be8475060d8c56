//! The furnished office room as a transform tree.
//!
//! Units are metres. The room spans `x ∈ [-6, 6]`, `z ∈ [-8, 8]`,
//! `y ∈ [0, 3]`; the front wall (`z = +8`) has a 3 m door gap centred on
//! `x = 0`.

use glam::{Mat4, Quat, Vec3};

use super::node::{SceneNode, Shape};
use crate::camera::bounds::{ROOM_HALF_DEPTH, ROOM_HALF_WIDTH, ROOM_HEIGHT};

/// Door panel width; also the width of the gap in the front wall.
pub const DOOR_WIDTH: f32 = 3.0;
/// Door panel height.
pub const DOOR_HEIGHT: f32 = 2.2;
/// Door panel thickness.
pub const DOOR_THICKNESS: f32 = 0.08;
/// X coordinate of the door's vertical hinge axis.
pub const DOOR_HINGE_X: f32 = -DOOR_WIDTH * 0.5;

/// Ceiling fan blade length.
const FAN_BLADE_LENGTH: f32 = 2.8;

fn rgb(r: f32, g: f32, b: f32) -> Vec3 {
    Vec3::new(r, g, b)
}

fn trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

fn yaw(deg: f32) -> Quat {
    Quat::from_rotation_y(deg.to_radians())
}

fn cylinder(
    name: &'static str,
    center: Vec3,
    y_scale: f32,
    (radius, height, segments): (f32, f32, u32),
    color: Vec3,
) -> SceneNode {
    SceneNode::shape(
        name,
        trs(center, Quat::IDENTITY, Vec3::new(1.0, y_scale, 1.0)),
        Shape::Cylinder {
            radius,
            height,
            segments,
        },
        color,
    )
}

fn quad(
    name: &'static str,
    corners: [Vec3; 4],
    normal: Vec3,
    color: Vec3,
) -> SceneNode {
    SceneNode::shape(
        name,
        Mat4::IDENTITY,
        Shape::Quad { corners, normal },
        color,
    )
}

/// Floor, ceiling, ceiling lights and the four inward-facing walls.
fn shell() -> SceneNode {
    let (w, d, h) = (ROOM_HALF_WIDTH, ROOM_HALF_DEPTH, ROOM_HEIGHT);
    let wall = rgb(0.80, 0.80, 0.86);
    let panel = rgb(0.95, 0.95, 1.0);
    let gap = DOOR_WIDTH * 0.5;

    SceneNode::group("shell", Mat4::IDENTITY).with_children([
        quad(
            "floor",
            [
                Vec3::new(-w, 0.0, -d),
                Vec3::new(w, 0.0, -d),
                Vec3::new(w, 0.0, d),
                Vec3::new(-w, 0.0, d),
            ],
            Vec3::Y,
            rgb(0.12, 0.12, 0.16),
        ),
        quad(
            "ceiling",
            [
                Vec3::new(-w, h, -d),
                Vec3::new(-w, h, d),
                Vec3::new(w, h, d),
                Vec3::new(w, h, -d),
            ],
            Vec3::NEG_Y,
            rgb(0.20, 0.20, 0.25),
        ),
        SceneNode::cuboid(
            "ceiling_light_left",
            Vec3::new(-1.5, h - 0.02, -1.0),
            Vec3::new(3.0, 0.05, 0.8),
            panel,
        ),
        SceneNode::cuboid(
            "ceiling_light_right",
            Vec3::new(1.5, h - 0.02, -1.0),
            Vec3::new(3.0, 0.05, 0.8),
            panel,
        ),
        quad(
            "back_wall",
            [
                Vec3::new(-w, 0.0, -d),
                Vec3::new(-w, h, -d),
                Vec3::new(w, h, -d),
                Vec3::new(w, 0.0, -d),
            ],
            Vec3::Z,
            wall,
        ),
        quad(
            "front_wall_left",
            [
                Vec3::new(-w, 0.0, d),
                Vec3::new(-w, h, d),
                Vec3::new(-gap, h, d),
                Vec3::new(-gap, 0.0, d),
            ],
            Vec3::NEG_Z,
            wall,
        ),
        quad(
            "front_wall_right",
            [
                Vec3::new(gap, 0.0, d),
                Vec3::new(gap, h, d),
                Vec3::new(w, h, d),
                Vec3::new(w, 0.0, d),
            ],
            Vec3::NEG_Z,
            wall,
        ),
        quad(
            "left_wall",
            [
                Vec3::new(-w, 0.0, -d),
                Vec3::new(-w, 0.0, d),
                Vec3::new(-w, h, d),
                Vec3::new(-w, h, -d),
            ],
            Vec3::X,
            wall,
        ),
        quad(
            "right_wall",
            [
                Vec3::new(w, 0.0, -d),
                Vec3::new(w, h, -d),
                Vec3::new(w, h, d),
                Vec3::new(w, 0.0, d),
            ],
            Vec3::NEG_X,
            wall,
        ),
    ])
}

/// Blocky figure seated at the desk, positioned by its parent at the
/// chair seat's floor projection.
fn seated_person() -> SceneNode {
    let pants = rgb(0.1, 0.1, 0.3);
    let shirt = rgb(0.0, 0.4, 0.8);
    let arm = |name, x: f32, tilt_deg: f32| {
        SceneNode::shape(
            name,
            trs(
                Vec3::new(x, 0.95, -0.25),
                Quat::from_rotation_x(tilt_deg.to_radians()),
                Vec3::new(0.12, 0.4, 0.12),
            ),
            Shape::UnitBox,
            shirt,
        )
    };

    SceneNode::group(
        "person",
        Mat4::from_translation(Vec3::new(-1.5, 0.0, -1.0)),
    )
    .with_children([
        SceneNode::cuboid(
            "person_leg_left",
            Vec3::new(-0.18, 0.4, 0.1),
            Vec3::new(0.12, 0.8, 0.12),
            pants,
        ),
        SceneNode::cuboid(
            "person_leg_right",
            Vec3::new(0.18, 0.4, 0.1),
            Vec3::new(0.12, 0.8, 0.12),
            pants,
        ),
        SceneNode::cuboid(
            "person_torso",
            Vec3::new(0.0, 0.9, -0.05),
            Vec3::new(0.45, 0.7, 0.25),
            shirt,
        ),
        SceneNode::cuboid(
            "person_head",
            Vec3::new(0.0, 1.4, -0.05),
            Vec3::new(0.30, 0.35, 0.30),
            rgb(1.0, 0.8, 0.6),
        ),
        arm("person_arm_left", -0.32, -20.0),
        arm("person_arm_right", 0.32, -15.0),
    ])
}

/// Table, desk, chair, cabinet, whiteboard, computer, lamp and plant.
fn furniture() -> SceneNode {
    let (w, d) = (ROOM_HALF_WIDTH, ROOM_HALF_DEPTH);
    let leg = rgb(0.4, 0.25, 0.18);
    let chair = rgb(0.2, 0.6, 1.0);
    let black = rgb(0.05, 0.05, 0.05);
    let leg_height = 0.8;
    let leg_size = Vec3::new(0.1, leg_height, 0.1);

    SceneNode::group("furniture", Mat4::IDENTITY).with_children([
        cylinder(
            "meeting_table",
            Vec3::new(0.0, 0.75, 0.0),
            0.5,
            (1.5, 1.0, 40),
            rgb(1.0, 0.8, 0.2),
        ),
        SceneNode::cuboid(
            "desk",
            Vec3::new(-3.5, 0.8, -1.2),
            Vec3::new(2.6, 0.2, 1.2),
            rgb(0.90, 0.55, 0.25),
        ),
        SceneNode::cuboid(
            "desk_leg_left",
            Vec3::new(-4.6, leg_height * 0.5, -1.8),
            leg_size,
            leg,
        ),
        SceneNode::cuboid(
            "desk_leg_right",
            Vec3::new(-2.4, leg_height * 0.5, -1.8),
            leg_size,
            leg,
        ),
        SceneNode::cuboid(
            "chair_seat",
            Vec3::new(-1.5, 0.5, -1.0),
            Vec3::new(0.9, 0.18, 0.9),
            chair,
        ),
        SceneNode::cuboid(
            "chair_back",
            Vec3::new(-1.5, 1.0, -1.6),
            Vec3::new(0.9, 0.7, 0.15),
            chair,
        ),
        seated_person(),
        SceneNode::cuboid(
            "cabinet",
            Vec3::new(w - 1.0, 1.1, -d + 2.0),
            Vec3::new(1.0, 2.2, 0.7),
            rgb(0.7, 0.7, 0.75),
        ),
        SceneNode::cuboid(
            "whiteboard",
            Vec3::new(0.0, 1.6, -d + 0.02),
            Vec3::new(3.0, 1.4, 0.05),
            rgb(0.95, 0.95, 1.0),
        ),
        SceneNode::cuboid(
            "monitor",
            Vec3::new(-3.4, 1.15, -1.2),
            Vec3::new(0.9, 0.6, 0.1),
            black,
        ),
        SceneNode::cuboid(
            "monitor_stand",
            Vec3::new(-3.4, 0.95, -1.25),
            Vec3::new(0.1, 0.4, 0.1),
            black,
        ),
        SceneNode::cuboid(
            "keyboard",
            Vec3::new(-2.9, 0.9, -1.2),
            Vec3::new(0.9, 0.05, 0.25),
            rgb(0.15, 0.15, 0.18),
        ),
        cylinder(
            "lamp_base",
            Vec3::new(-3.0, 0.9, -0.9),
            0.3,
            (0.12, 0.08, 20),
            rgb(0.3, 0.2, 0.1),
        ),
        cylinder(
            "lamp_neck",
            Vec3::new(-3.0, 1.05, -0.9),
            1.0,
            (0.05, 0.35, 16),
            rgb(0.7, 0.7, 0.7),
        ),
        cylinder(
            "lamp_shade",
            Vec3::new(-3.0, 1.3, -0.9),
            1.0,
            (0.18, 0.30, 24),
            rgb(1.0, 0.95, 0.75),
        ),
        cylinder(
            "plant_pot",
            Vec3::new(-w + 1.0, 0.4, d - 1.0),
            0.8,
            (0.3, 0.6, 24),
            rgb(0.6, 0.3, 0.15),
        ),
        SceneNode::cuboid(
            "plant_leaves",
            Vec3::new(-w + 1.0, 1.1, d - 1.0),
            Vec3::new(0.6, 1.0, 0.6),
            rgb(0.1, 0.6, 0.2),
        ),
    ])
}

/// Door panel and handle swinging about the hinge at `x = -1.5`.
fn door(angle_deg: f32) -> SceneNode {
    let hinge = trs(
        Vec3::new(DOOR_HINGE_X, 0.0, ROOM_HALF_DEPTH + 0.01),
        yaw(angle_deg),
        Vec3::ONE,
    );
    SceneNode::group("door_hinge", hinge).with_children([
        SceneNode::cuboid(
            "door_panel",
            Vec3::new(DOOR_WIDTH * 0.5, DOOR_HEIGHT * 0.5, 0.0),
            Vec3::new(DOOR_WIDTH, DOOR_HEIGHT, DOOR_THICKNESS),
            rgb(0.95, 0.95, 0.98),
        ),
        SceneNode::cuboid(
            "door_handle",
            Vec3::new(0.9, DOOR_HEIGHT * 0.7, 0.26),
            Vec3::new(0.25, 0.12, 0.12),
            rgb(0.9, 0.75, 0.25),
        ),
    ])
}

/// Hub and four blades spinning about the room's vertical axis.
fn ceiling_fan(angle_deg: f32) -> SceneNode {
    let blade_color = rgb(0.9, 0.9, 0.9);
    let blades = (0..4u8).map(move |i| {
        SceneNode::shape(
            "fan_blade",
            Mat4::from_quat(yaw(f32::from(i) * 90.0))
                * trs(
                    Vec3::new(FAN_BLADE_LENGTH * 0.5, 0.0, 0.0),
                    Quat::IDENTITY,
                    Vec3::new(FAN_BLADE_LENGTH, 0.05, 0.3),
                ),
            Shape::UnitBox,
            blade_color,
        )
    });

    SceneNode::group(
        "fan",
        trs(
            Vec3::new(0.0, ROOM_HEIGHT - 0.25, 0.0),
            yaw(angle_deg),
            Vec3::ONE,
        ),
    )
    .with_child(SceneNode::cuboid(
        "fan_hub",
        Vec3::new(0.0, 0.05, 0.0),
        Vec3::new(0.3, 0.1, 0.3),
        rgb(0.85, 0.85, 0.85),
    ))
    .with_children(blades)
}

/// The whole room for the given animation angles.
#[must_use]
pub fn room_scene(door_angle_deg: f32, fan_angle_deg: f32) -> SceneNode {
    SceneNode::group("room", Mat4::IDENTITY).with_children([
        shell(),
        furniture(),
        door(door_angle_deg),
        ceiling_fan(fan_angle_deg),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::DrawItem;

    const EPS: f32 = 1e-4;

    fn world_center(tree: &SceneNode, name: &str) -> Vec3 {
        let (_, world) = tree.find(name).unwrap();
        world.transform_point3(Vec3::ZERO)
    }

    #[test]
    fn closed_door_fills_the_wall_gap() {
        let tree = room_scene(0.0, 0.0);
        let c = world_center(&tree, "door_panel");
        assert!(c.abs_diff_eq(Vec3::new(0.0, 1.1, 8.01), EPS));
        let h = world_center(&tree, "door_handle");
        assert!(h.abs_diff_eq(Vec3::new(-0.6, 1.54, 8.27), EPS));
    }

    #[test]
    fn handle_follows_the_hinge() {
        let tree = room_scene(90.0, 0.0);
        // a +90° yaw maps local +X onto world -Z
        let c = world_center(&tree, "door_panel");
        assert!(c.abs_diff_eq(Vec3::new(-1.5, 1.1, 8.01 - 1.5), EPS));
        let h = world_center(&tree, "door_handle");
        assert!(h.abs_diff_eq(Vec3::new(-1.5 + 0.26, 1.54, 8.01 - 0.9), EPS));

        let hinge = Vec3::new(DOOR_HINGE_X, 0.0, 8.01);
        for angle in [0.0, 33.0, 61.5, 90.0] {
            let tree = room_scene(angle, 0.0);
            let p = world_center(&tree, "door_panel") - hinge;
            let h = world_center(&tree, "door_handle") - hinge;
            let horizontal = |v: Vec3| Vec3::new(v.x, 0.0, v.z).length();
            assert!((horizontal(p) - 1.5).abs() < EPS);
            assert!((horizontal(h) - (0.9f32.hypot(0.26))).abs() < EPS);
        }
    }

    #[test]
    fn fan_blades_rotate_with_the_fan_angle() {
        let items = room_scene(0.0, 30.0).flatten();
        let blades: Vec<_> =
            items.iter().filter(|i| i.name == "fan_blade").collect();
        assert_eq!(blades.len(), 4);

        let centre = Vec3::new(0.0, 2.75, 0.0);
        let first = blades[0].world.transform_point3(Vec3::ZERO) - centre;
        let expected = Quat::from_rotation_y(30f32.to_radians())
            * Vec3::new(1.4, 0.0, 0.0);
        assert!(first.abs_diff_eq(expected, EPS));

        let still = room_scene(0.0, 0.0).flatten();
        let hub = |items: &[DrawItem]| {
            items
                .iter()
                .find(|i| i.name == "fan_hub")
                .map(|i| i.world.transform_point3(Vec3::ZERO))
        };
        assert!(hub(&items)
            .unwrap()
            .abs_diff_eq(Vec3::new(0.0, 2.8, 0.0), EPS));
        assert_eq!(hub(&still), hub(&items));
    }

    #[test]
    fn static_content_ignores_animation_angles() {
        let a = room_scene(0.0, 0.0);
        let b = room_scene(45.0, 123.0);
        assert_eq!(a.find("furniture"), b.find("furniture"));
        assert_eq!(a.find("shell"), b.find("shell"));
        assert!(world_center(&a, "person_head")
            .abs_diff_eq(Vec3::new(-1.5, 1.4, -1.05), EPS));
    }

    #[test]
    fn room_has_every_named_piece() {
        let tree = room_scene(0.0, 0.0);
        for name in [
            "floor",
            "ceiling",
            "ceiling_light_left",
            "ceiling_light_right",
            "back_wall",
            "front_wall_left",
            "front_wall_right",
            "left_wall",
            "right_wall",
            "meeting_table",
            "desk",
            "desk_leg_left",
            "desk_leg_right",
            "chair_seat",
            "chair_back",
            "person_torso",
            "person_arm_right",
            "cabinet",
            "whiteboard",
            "monitor",
            "monitor_stand",
            "keyboard",
            "lamp_base",
            "lamp_neck",
            "lamp_shade",
            "plant_pot",
            "plant_leaves",
            "door_panel",
            "door_handle",
            "fan_hub",
            "fan_blade",
        ] {
            assert!(tree.find(name).is_some(), "missing {name}");
        }
    }
}

//! Transform tree of primitive shapes.

use glam::{Mat4, Quat, Vec3};

/// Primitive drawn by a scene node, in the node's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned cube of side 1 centred on the origin.
    UnitBox,
    /// Y-aligned capped cylinder centred on the origin.
    Cylinder {
        /// Radius in the XZ plane.
        radius: f32,
        /// Extent along Y.
        height: f32,
        /// Number of side facets.
        segments: u32,
    },
    /// Flat quad given by four corners in winding order.
    Quad {
        /// Corners in local space.
        corners: [Vec3; 4],
        /// Face normal in local space.
        normal: Vec3,
    },
}

/// A node in the room's transform tree.
///
/// A node's world transform is its parent's world transform times its own
/// `local`. Siblings never affect each other.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Label used in logs and tests.
    pub name: &'static str,
    /// Transform relative to the parent.
    pub local: Mat4,
    /// Primitive drawn at this node, if any.
    pub shape: Option<Shape>,
    /// Linear RGB material colour.
    pub color: Vec3,
    /// Nodes positioned relative to this one.
    pub children: Vec<SceneNode>,
}

/// A shape resolved to world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Name of the node that produced it.
    pub name: &'static str,
    /// Local-to-world transform.
    pub world: Mat4,
    /// Primitive to draw.
    pub shape: Shape,
    /// Linear RGB material colour.
    pub color: Vec3,
}

impl SceneNode {
    /// Transform-only node.
    #[must_use]
    pub fn group(name: &'static str, local: Mat4) -> Self {
        Self {
            name,
            local,
            shape: None,
            color: Vec3::ONE,
            children: Vec::new(),
        }
    }

    /// Node drawing `shape` in `color`.
    #[must_use]
    pub fn shape(
        name: &'static str,
        local: Mat4,
        shape: Shape,
        color: Vec3,
    ) -> Self {
        Self {
            name,
            local,
            shape: Some(shape),
            color,
            children: Vec::new(),
        }
    }

    /// Unit box scaled to `size` and centred at `center`.
    #[must_use]
    pub fn cuboid(
        name: &'static str,
        center: Vec3,
        size: Vec3,
        color: Vec3,
    ) -> Self {
        Self::shape(
            name,
            Mat4::from_scale_rotation_translation(
                size,
                Quat::IDENTITY,
                center,
            ),
            Shape::UnitBox,
            color,
        )
    }

    /// Builder-style child attachment.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style attachment of several children.
    #[must_use]
    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = SceneNode>,
    ) -> Self {
        self.children.extend(children);
        self
    }

    /// Every shape in the subtree with its world transform, depth first,
    /// parents before children.
    #[must_use]
    pub fn flatten(&self) -> Vec<DrawItem> {
        let mut out = Vec::new();
        self.flatten_into(Mat4::IDENTITY, &mut out);
        out
    }

    fn flatten_into(&self, parent: Mat4, out: &mut Vec<DrawItem>) {
        let world = parent * self.local;
        if let Some(shape) = self.shape {
            out.push(DrawItem {
                name: self.name,
                world,
                shape,
                color: self.color,
            });
        }
        for child in &self.children {
            child.flatten_into(world, out);
        }
    }

    /// First node in the subtree named `name`, with its world transform.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(&SceneNode, Mat4)> {
        self.find_from(name, Mat4::IDENTITY)
    }

    fn find_from(
        &self,
        name: &str,
        parent: Mat4,
    ) -> Option<(&SceneNode, Mat4)> {
        let world = parent * self.local;
        if self.name == name {
            return Some((self, world));
        }
        self.children
            .iter()
            .find_map(|child| child.find_from(name, world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_world_is_parent_times_local() {
        let parent_local = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_rotation_y(0.7);
        let child_local = Mat4::from_translation(Vec3::X)
            * Mat4::from_scale(Vec3::splat(2.0));
        let tree = SceneNode::group("root", parent_local).with_child(
            SceneNode::shape("leaf", child_local, Shape::UnitBox, Vec3::ONE),
        );

        let items = tree.flatten();
        assert_eq!(items.len(), 1);
        assert!(items[0].world.abs_diff_eq(parent_local * child_local, 1e-6));
    }

    #[test]
    fn siblings_are_independent_of_order() {
        let a = SceneNode::cuboid("a", Vec3::X, Vec3::ONE, Vec3::ONE);
        let b = SceneNode::cuboid("b", Vec3::Z, Vec3::ONE, Vec3::ONE);
        let ab = SceneNode::group("g", Mat4::IDENTITY)
            .with_children([a.clone(), b.clone()])
            .flatten();
        let ba = SceneNode::group("g", Mat4::IDENTITY)
            .with_children([b, a])
            .flatten();
        assert_eq!(ab[0], ba[1]);
        assert_eq!(ab[1], ba[0]);
    }

    #[test]
    fn groups_emit_nothing_themselves() {
        let tree = SceneNode::group("g", Mat4::IDENTITY);
        assert!(tree.flatten().is_empty());
        assert!(tree.find("g").is_some());
        assert!(tree.find("missing").is_none());
    }
}

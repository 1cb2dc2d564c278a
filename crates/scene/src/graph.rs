use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;
use tracing::debug;

use crate::math::point::Point3d;
use crate::math::transform::Transform;
use crate::math::vector::Vec3;
use crate::primitives::{Color, Material, MaterialId, MeshInstance};

new_key_type! {
    /// Key into the scene's node arena.
    pub struct NodeId;
}

/// Parent-chain walks longer than this indicate a corrupted hierarchy.
const MAX_PARENT_DEPTH: usize = 256;

/// Errors from scene-graph misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("node not found in scene graph")]
    NodeNotFound,

    #[error("material not found in scene graph")]
    MaterialNotFound,

    #[error("node is already attached to a parent")]
    AlreadyAttached,

    #[error("parent chain exceeded {MAX_PARENT_DEPTH} nodes")]
    ParentChainTooDeep,
}

/// A transform node. Local transform is translation followed by a yaw
/// rotation about the node's own Y axis (the hinge axis).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub translation: Vec3,
    pub yaw: f64,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub mesh: Option<MeshInstance>,
}

impl Node {
    fn group(name: &str) -> Self {
        Self {
            name: name.to_string(),
            translation: Vec3::ZERO,
            yaw: 0.0,
            parent: None,
            children: Vec::new(),
            mesh: None,
        }
    }
}

/// Arena-backed scene graph with exclusive parent/child ownership.
///
/// Each node has at most one parent; attaching an already-attached node
/// is an error rather than a silent re-parent. World transforms are
/// composed from the root down the parent chain, never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    materials: SlotMap<MaterialId, Material>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound)
    }

    // ── Materials ───────────────────────────────────────────────────────

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.insert(material)
    }

    pub fn material(&self, id: MaterialId) -> Result<&Material, SceneError> {
        self.materials.get(id).ok_or(SceneError::MaterialNotFound)
    }

    pub fn set_material_color(&mut self, id: MaterialId, color: Color) -> Result<(), SceneError> {
        let material = self
            .materials
            .get_mut(id)
            .ok_or(SceneError::MaterialNotFound)?;
        material.color = color;
        Ok(())
    }

    // ── Node construction ───────────────────────────────────────────────

    /// Create a detached empty group node.
    pub fn create_group(&mut self, name: &str) -> NodeId {
        self.nodes.insert(Node::group(name))
    }

    /// Create an empty group node attached under `parent`.
    pub fn create_child_group(&mut self, name: &str, parent: NodeId) -> Result<NodeId, SceneError> {
        let id = self.create_group(name);
        self.attach(parent, id)?;
        Ok(id)
    }

    /// Create a mesh-bearing node attached under `parent`.
    pub fn create_mesh_node(
        &mut self,
        name: &str,
        parent: NodeId,
        mesh: MeshInstance,
        translation: Vec3,
    ) -> Result<NodeId, SceneError> {
        let mut node = Node::group(name);
        node.translation = translation;
        node.mesh = Some(mesh);
        let id = self.nodes.insert(node);
        self.attach(parent, id)?;
        Ok(id)
    }

    /// Attach `child` under `parent`. The child must currently be
    /// detached.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::NodeNotFound);
        }
        let child_node = self.node_mut(child)?;
        if child_node.parent.is_some() {
            return Err(SceneError::AlreadyAttached);
        }
        child_node.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Detach `child` from its parent, leaving it a free root.
    pub fn detach(&mut self, child: NodeId) -> Result<(), SceneError> {
        let parent = match self.node(child)?.parent {
            Some(p) => p,
            None => return Ok(()),
        };
        self.node_mut(child)?.parent = None;
        let parent_node = self.node_mut(parent)?;
        parent_node.children.retain(|&c| c != child);
        Ok(())
    }

    /// Remove a node and everything beneath it.
    pub fn remove_subtree(&mut self, root: NodeId) -> Result<(), SceneError> {
        self.detach(root)?;
        let mut stack = vec![root];
        let mut removed = 0usize;
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        debug!(removed, "removed scene subtree");
        Ok(())
    }

    // ── Transforms ──────────────────────────────────────────────────────

    pub fn set_translation(&mut self, id: NodeId, translation: Vec3) -> Result<(), SceneError> {
        self.node_mut(id)?.translation = translation;
        Ok(())
    }

    pub fn set_yaw(&mut self, id: NodeId, yaw: f64) -> Result<(), SceneError> {
        self.node_mut(id)?.yaw = yaw;
        Ok(())
    }

    pub fn yaw(&self, id: NodeId) -> Result<f64, SceneError> {
        Ok(self.node(id)?.yaw)
    }

    pub fn translation(&self, id: NodeId) -> Result<Vec3, SceneError> {
        Ok(self.node(id)?.translation)
    }

    /// The node's transform relative to its parent: translate, then yaw.
    pub fn local_transform(&self, id: NodeId) -> Result<Transform, SceneError> {
        let node = self.node(id)?;
        Ok(Transform::from_translation_vec(node.translation).then(&Transform::rotation_y(node.yaw)))
    }

    /// Compose the node's world transform from the root of its parent
    /// chain down.
    pub fn world_transform(&self, id: NodeId) -> Result<Transform, SceneError> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            if chain.len() > MAX_PARENT_DEPTH {
                return Err(SceneError::ParentChainTooDeep);
            }
            chain.push(node_id);
            current = self.node(node_id)?.parent;
        }

        let mut world = Transform::identity();
        for node_id in chain.into_iter().rev() {
            world = world.then(&self.local_transform(node_id)?);
        }
        Ok(world)
    }

    /// Convert a world-space point into `id`'s local space.
    pub fn world_to_local(&self, id: NodeId, point: &Point3d) -> Result<Point3d, SceneError> {
        let world = self.world_transform(id)?;
        Ok(world.rigid_inverse().transform_point(point))
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], SceneError> {
        Ok(&self.node(id)?.children)
    }
}

//! In-memory scene graph for the wall configurator.
//!
//! Provides the capabilities the core expects from a rendering
//! collaborator: transform nodes with parent/child nesting, per-node
//! local position and yaw, world-matrix composition, world-point to
//! node-local conversion, and box/cylinder mesh primitives carrying a
//! material handle. Rendering itself lives elsewhere; this crate only
//! owns the transform hierarchy.

pub mod graph;
pub mod math;
pub mod primitives;

pub use graph::{Node, NodeId, SceneError, SceneGraph};
pub use math::point::Point3d;
pub use math::transform::Transform;
pub use math::vector::Vec3;
pub use primitives::{Color, Material, MaterialId, MeshInstance, MeshPrimitive};

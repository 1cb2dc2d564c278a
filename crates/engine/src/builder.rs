//! Constructs the nested pivot/panel node hierarchy for a wall.
//!
//! The chain is self-similar: each pivot owns one panel node, and the
//! panel owns the next pivot, so yawing pivot k carries panels k..N-1 as
//! a rigid unit. Panel meshes are always modeled about their own local
//! origin; the pivot chain alone carries the z zig-zag, which keeps
//! every rotation a pure yaw about the hinge axis.

use tracing::{info, instrument};

use wall_scene::{MeshInstance, MeshPrimitive, NodeId, SceneGraph, Vec3};
use wall_scene::{Color, Material, MaterialId};
use wall_types::{Config, Dimensions, FoldDirection, PanelSpec, Variant};

use crate::variant::VariantPolicy;
use crate::EngineError;

/// Width of panel frame rails and stiles (mm).
const FRAME_WIDTH: f64 = 10.0;
/// Hinge cylinder radius (mm) and tessellation.
const HINGE_RADIUS: f64 = 5.0;
const HINGE_SEGMENTS: u32 = 16;
/// Wheel puck dimensions (mm) and tessellation.
const WHEEL_RADIUS: f64 = 20.0;
const WHEEL_HEIGHT: f64 = 40.0;
const WHEEL_SEGMENTS: u32 = 32;
/// Flush subframe profile (mm).
const PROFILE_WIDTH: f64 = 80.0;
const PROFILE_DEPTH: f64 = 90.0;
const SUBFRAME_TOP_GAP: f64 = 10.0;
const SUBFRAME_RIGHT_GAP: f64 = 10.0;
/// Depth of the leg/track structural boxes (mm).
const STATIC_DEPTH: f64 = 50.0;

/// Material handles shared by every rebuild.
#[derive(Debug, Clone, Copy)]
pub struct MaterialPalette {
    pub frame: MaterialId,
    pub paint: MaterialId,
    pub hinge: MaterialId,
    pub wheel: MaterialId,
    pub seal: MaterialId,
}

impl MaterialPalette {
    /// Register the stock wall materials.
    pub fn standard(graph: &mut SceneGraph) -> Self {
        Self {
            frame: graph.add_material(Material::new("frame", Color::WHITE, 0.7, 0.1)),
            paint: graph.add_material(Material::new(
                "paint",
                Color::from_hex(0xeeeeee),
                0.1,
                0.2,
            )),
            hinge: graph.add_material(Material::new("hinge", Color::from_hex(0x111111), 0.0, 0.8)),
            wheel: graph.add_material(Material::new("wheel", Color::from_hex(0x111111), 0.0, 0.5)),
            seal: graph.add_material(Material::new("seal", Color::from_hex(0x111111), 0.0, 0.9)),
        }
    }
}

/// One hinge joint: the pivot transform node and the panel it swings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLink {
    pub pivot: NodeId,
    pub panel: NodeId,
}

/// A wheel mesh and the panel whose travel it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelBinding {
    pub panel: NodeId,
    pub wheel: NodeId,
}

/// The built wall: node handles plus the typed pivot chain. Destroyed
/// and rebuilt wholesale on every configuration or direction change.
#[derive(Debug, Clone)]
pub struct WallAssembly {
    /// Holds statics and the chain; positioned in world by the variant.
    pub wall_group: NodeId,
    /// Parent of all wheel meshes (leg/track variant only).
    pub wheel_group: Option<NodeId>,
    pub root_pivot: NodeId,
    /// Pivot/panel pairs in chain order. `links[0].pivot == root_pivot`.
    pub links: Vec<ChainLink>,
    pub wheels: Vec<WheelBinding>,
    pub specs: Vec<PanelSpec>,
}

impl WallAssembly {
    pub fn sections(&self) -> usize {
        self.specs.len()
    }
}

/// Build the full node tree for a wall configuration.
///
/// `specs` must come from the same solve as `dims`; the solver has
/// already rejected degenerate widths by the time this runs.
#[instrument(skip_all, fields(sections = specs.len(), variant = ?config.variant))]
pub fn build(
    graph: &mut SceneGraph,
    palette: &MaterialPalette,
    config: &Config,
    dims: &Dimensions,
    specs: &[PanelSpec],
    direction: FoldDirection,
) -> Result<WallAssembly, EngineError> {
    let policy = VariantPolicy::new(config.variant);

    let wall_group = graph.create_group("wall");
    graph.set_translation(wall_group, policy.wall_group_translation(config))?;

    match config.variant {
        Variant::Flush => build_flush_subframe(graph, palette, config, wall_group)?,
        Variant::LegTrack {
            leg_width,
            track_height,
            ..
        } => build_leg_track_statics(graph, palette, config, wall_group, leg_width, track_height)?,
    }

    let wheel_group = if policy.has_wheels() {
        Some(graph.create_child_group("wheels", wall_group)?)
    } else {
        None
    };

    let root_pivot = graph.create_child_group("pivot-0", wall_group)?;
    graph.set_translation(
        root_pivot,
        policy.root_pivot_translation(config, dims, direction),
    )?;

    let mut links = Vec::with_capacity(specs.len());
    let mut wheels = Vec::new();
    let mut pivot = root_pivot;
    let mut pivot_z = policy.root_pivot_z(direction, config.thickness);

    for spec in specs {
        debug_assert!(
            (spec.face.sign() * config.thickness / 2.0 - pivot_z).abs() < 1e-9,
            "panel face side disagrees with the pivot zig-zag at index {}",
            spec.index
        );

        // The panel node cancels the pivot's accumulated z so its meshes
        // stay centered on the wall plane while at rest.
        let panel_x = policy.panel_edge_offset(spec.index, dims.gap) + spec.width / 2.0;
        let panel = graph.create_child_group(&format!("panel-{}", spec.index), pivot)?;
        graph.set_translation(panel, Vec3::new(panel_x, 0.0, -pivot_z))?;
        build_panel_members(graph, palette, &policy, spec, panel)?;
        links.push(ChainLink { pivot, panel });

        if spec.role.has_wheel() {
            if let Some(group) = wheel_group {
                let wheel = graph.create_mesh_node(
                    "wheel",
                    group,
                    MeshInstance {
                        primitive: MeshPrimitive::cylinder(
                            WHEEL_RADIUS,
                            WHEEL_HEIGHT,
                            WHEEL_SEGMENTS,
                        ),
                        material: palette.wheel,
                    },
                    Vec3::ZERO,
                )?;
                wheels.push(WheelBinding { panel, wheel });
            }
        }

        if spec.index < specs.len() - 1 {
            // The hinge sits half a panel plus half a gap past the panel
            // center, on the face the next panel folds against.
            let joint = Vec3::new(spec.width / 2.0 + dims.gap / 2.0, 0.0, -pivot_z);
            graph.create_mesh_node(
                "hinge",
                panel,
                MeshInstance {
                    primitive: MeshPrimitive::cylinder(HINGE_RADIUS, spec.height, HINGE_SEGMENTS),
                    material: palette.hinge,
                },
                joint,
            )?;

            let next = graph.create_child_group(&format!("pivot-{}", spec.index + 1), panel)?;
            graph.set_translation(next, joint)?;
            pivot = next;
            pivot_z = -pivot_z;
        }
    }

    info!(
        panels = links.len(),
        wheels = wheels.len(),
        "built panel chain"
    );

    Ok(WallAssembly {
        wall_group,
        wheel_group,
        root_pivot,
        links,
        wheels,
        specs: specs.to_vec(),
    })
}

/// Rails, stiles and infill, centered on the panel's local origin.
fn build_panel_members(
    graph: &mut SceneGraph,
    palette: &MaterialPalette,
    policy: &VariantPolicy,
    spec: &PanelSpec,
    panel: NodeId,
) -> Result<(), EngineError> {
    let w = spec.width;
    let h = spec.height;
    let frame_t = policy.frame_thickness(spec.thickness);
    let stile_h = h - 2.0 * FRAME_WIDTH;

    let rail = MeshPrimitive::cuboid(w, FRAME_WIDTH, frame_t);
    graph.create_mesh_node(
        "top-rail",
        panel,
        MeshInstance {
            primitive: rail,
            material: palette.frame,
        },
        Vec3::new(0.0, h / 2.0 - FRAME_WIDTH / 2.0, 0.0),
    )?;
    graph.create_mesh_node(
        "bottom-rail",
        panel,
        MeshInstance {
            primitive: rail,
            material: palette.frame,
        },
        Vec3::new(0.0, -h / 2.0 + FRAME_WIDTH / 2.0, 0.0),
    )?;

    let stile = MeshPrimitive::cuboid(FRAME_WIDTH, stile_h, frame_t);
    for side in [-1.0, 1.0] {
        graph.create_mesh_node(
            "stile",
            panel,
            MeshInstance {
                primitive: stile,
                material: palette.frame,
            },
            Vec3::new(side * (w / 2.0 - FRAME_WIDTH / 2.0), 0.0, 0.0),
        )?;
    }

    let infill_w = w - 2.0 * FRAME_WIDTH;
    if infill_w > 0.0 {
        graph.create_mesh_node(
            "infill",
            panel,
            MeshInstance {
                primitive: MeshPrimitive::cuboid(
                    infill_w,
                    stile_h,
                    policy.infill_thickness(spec.thickness),
                ),
                material: palette.paint,
            },
            Vec3::ZERO,
        )?;
    }
    Ok(())
}

/// Jambs, top rail and rubber seal around the flush wall opening.
fn build_flush_subframe(
    graph: &mut SceneGraph,
    palette: &MaterialPalette,
    config: &Config,
    wall_group: NodeId,
) -> Result<(), EngineError> {
    let subframe = graph.create_child_group("subframe", wall_group)?;
    let length = config.total_length;
    let h = config.height;
    let jamb_h = h + SUBFRAME_TOP_GAP;

    let jamb = MeshPrimitive::cuboid(PROFILE_WIDTH, jamb_h, PROFILE_DEPTH);
    graph.create_mesh_node(
        "left-jamb",
        subframe,
        MeshInstance {
            primitive: jamb,
            material: palette.frame,
        },
        Vec3::new(-PROFILE_WIDTH / 2.0, SUBFRAME_TOP_GAP / 2.0, 0.0),
    )?;
    graph.create_mesh_node(
        "right-jamb",
        subframe,
        MeshInstance {
            primitive: jamb,
            material: palette.frame,
        },
        Vec3::new(
            length + SUBFRAME_RIGHT_GAP + PROFILE_WIDTH / 2.0,
            SUBFRAME_TOP_GAP / 2.0,
            0.0,
        ),
    )?;

    graph.create_mesh_node(
        "head-rail",
        subframe,
        MeshInstance {
            primitive: MeshPrimitive::cuboid(
                length + SUBFRAME_RIGHT_GAP + 2.0 * PROFILE_WIDTH,
                PROFILE_WIDTH,
                PROFILE_DEPTH,
            ),
            material: palette.frame,
        },
        Vec3::new(
            (length + SUBFRAME_RIGHT_GAP) / 2.0,
            h / 2.0 + SUBFRAME_TOP_GAP + PROFILE_WIDTH / 2.0,
            0.0,
        ),
    )?;

    graph.create_mesh_node(
        "head-seal",
        subframe,
        MeshInstance {
            primitive: MeshPrimitive::cuboid(length, SUBFRAME_TOP_GAP, config.thickness),
            material: palette.seal,
        },
        Vec3::new(length / 2.0, h / 2.0 + SUBFRAME_TOP_GAP / 2.0, 0.0),
    )?;
    Ok(())
}

/// Top track and the two support legs it rests on.
fn build_leg_track_statics(
    graph: &mut SceneGraph,
    palette: &MaterialPalette,
    config: &Config,
    wall_group: NodeId,
    leg_width: f64,
    track_height: f64,
) -> Result<(), EngineError> {
    let length = config.total_length;
    let h = config.height;
    let leg_h = h - track_height;

    graph.create_mesh_node(
        "track",
        wall_group,
        MeshInstance {
            primitive: MeshPrimitive::cuboid(length, track_height, STATIC_DEPTH),
            material: palette.paint,
        },
        Vec3::new(length / 2.0, h - track_height / 2.0, 0.0),
    )?;

    let leg = MeshPrimitive::cuboid(leg_width, leg_h, STATIC_DEPTH);
    graph.create_mesh_node(
        "left-leg",
        wall_group,
        MeshInstance {
            primitive: leg,
            material: palette.paint,
        },
        Vec3::new(leg_width / 2.0, leg_h / 2.0, 0.0),
    )?;
    graph.create_mesh_node(
        "right-leg",
        wall_group,
        MeshInstance {
            primitive: leg,
            material: palette.paint,
        },
        Vec3::new(length - leg_width / 2.0, leg_h / 2.0, 0.0),
    )?;
    Ok(())
}

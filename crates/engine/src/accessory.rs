//! Repositions track wheels from the live world transform of their
//! panels.

use wall_scene::{Point3d, SceneGraph, Vec3};
use wall_types::Config;

use crate::builder::WallAssembly;
use crate::variant::VariantPolicy;
use crate::EngineError;

/// Recompute every wheel position for the current frame.
///
/// The panel's world x changes continuously while it swings, so this
/// runs every tick of an active fold, not just at rest. The wheel's x
/// follows the panel center through the wheel group's local space; y is
/// pinned to mid-track; z is pinned to the wheel group's own plane.
pub fn update_wheels(
    graph: &mut SceneGraph,
    assembly: &WallAssembly,
    config: &Config,
) -> Result<(), EngineError> {
    let Some(wheel_group) = assembly.wheel_group else {
        return Ok(());
    };
    let policy = VariantPolicy::new(config.variant);
    let Some(wheel_y) = policy.wheel_center_y(config) else {
        return Ok(());
    };

    for binding in &assembly.wheels {
        let world = graph.world_transform(binding.panel)?;
        let panel_center = world.transform_point(&Point3d::ORIGIN);
        let local = graph.world_to_local(wheel_group, &panel_center)?;
        graph.set_translation(binding.wheel, Vec3::new(local.x, wheel_y, 0.0))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{self, MaterialPalette};
    use crate::{sequence, solver, FoldAnimator};
    use wall_types::FoldDirection;

    fn leg_wall() -> (SceneGraph, WallAssembly, Config) {
        let config = Config::leg_track_default();
        let direction = FoldDirection::Forward;
        let mut graph = SceneGraph::new();
        let palette = MaterialPalette::standard(&mut graph);
        let dims = solver::solve(&config).unwrap();
        let roles = VariantPolicy::new(config.variant).roles(config.sections, direction);
        let specs = sequence::panel_specs(&dims, &roles, direction);
        let assembly =
            builder::build(&mut graph, &palette, &config, &dims, &specs, direction).unwrap();
        (graph, assembly, config)
    }

    #[test]
    fn test_wheel_tracks_panel_x_at_rest() {
        let (mut graph, assembly, config) = leg_wall();
        update_wheels(&mut graph, &assembly, &config).unwrap();

        let binding = &assembly.wheels[0];
        let wheel_pos = graph.translation(binding.wheel).unwrap();
        let panel_world = graph
            .world_transform(binding.panel)
            .unwrap()
            .transform_point(&Point3d::ORIGIN);

        // Wheel group sits at the wall group origin, so local x is
        // panel world x shifted back by the wall offset.
        assert!((wheel_pos.x - (panel_world.x + config.total_length / 2.0)).abs() < 1e-9);
        assert!((wheel_pos.y - 2475.0).abs() < 1e-9);
        assert_eq!(wheel_pos.z, 0.0);
    }

    #[test]
    fn test_wheel_follows_panel_during_fold() {
        let (mut graph, assembly, config) = leg_wall();
        update_wheels(&mut graph, &assembly, &config).unwrap();
        let rest_x = graph.translation(assembly.wheels[0].wheel).unwrap().x;

        let mut animator = FoldAnimator::new(FoldDirection::Forward);
        animator.set_target_folded(FoldDirection::Forward);
        for _ in 0..60 {
            animator.tick(&mut graph, &assembly).unwrap();
            update_wheels(&mut graph, &assembly, &config).unwrap();
        }

        let folded_x = graph.translation(assembly.wheels[0].wheel).unwrap().x;
        // The panel swings back toward the wall start as the fold
        // concertinas, dragging the wheel with it.
        assert!(
            folded_x < rest_x - 1.0,
            "wheel did not travel: {rest_x} -> {folded_x}"
        );
        // y stays pinned to the track the whole way.
        assert!((graph.translation(assembly.wheels[0].wheel).unwrap().y - 2475.0).abs() < 1e-9);
    }

    #[test]
    fn test_flush_wall_is_a_no_op() {
        let config = Config::flush_default();
        let direction = FoldDirection::Backward;
        let mut graph = SceneGraph::new();
        let palette = MaterialPalette::standard(&mut graph);
        let dims = solver::solve(&config).unwrap();
        let roles = VariantPolicy::new(config.variant).roles(config.sections, direction);
        let specs = sequence::panel_specs(&dims, &roles, direction);
        let assembly =
            builder::build(&mut graph, &palette, &config, &dims, &specs, direction).unwrap();
        let before = graph.node_count();
        update_wheels(&mut graph, &assembly, &config).unwrap();
        assert_eq!(graph.node_count(), before);
    }
}

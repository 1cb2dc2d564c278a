//! Property-based tests for scene-graph transform invariants.

use proptest::prelude::*;

use wall_scene::{Point3d, SceneGraph, Transform, Vec3};

fn arb_point() -> impl Strategy<Value = (f64, f64, f64)> {
    (-5000.0f64..5000.0, -5000.0f64..5000.0, -5000.0f64..5000.0)
}

fn arb_yaw() -> impl Strategy<Value = f64> {
    -std::f64::consts::PI..std::f64::consts::PI
}

const TOL: f64 = 1e-8;

proptest! {
    // Rigid transforms preserve distances.
    #[test]
    fn rigid_transform_preserves_distance(
        (ax, ay, az) in arb_point(),
        (bx, by, bz) in arb_point(),
        (tx, ty, tz) in arb_point(),
        yaw in arb_yaw(),
    ) {
        let t = Transform::translation(tx, ty, tz).then(&Transform::rotation_y(yaw));
        let a = Point3d::new(ax, ay, az);
        let b = Point3d::new(bx, by, bz);
        let d_before = a.distance_to(&b);
        let d_after = t.transform_point(&a).distance_to(&t.transform_point(&b));
        prop_assert!((d_before - d_after).abs() < TOL * (1.0 + d_before),
            "distance changed: {} -> {}", d_before, d_after);
    }

    // rigid_inverse is a true inverse for translate-then-yaw transforms.
    #[test]
    fn rigid_inverse_round_trips(
        (px, py, pz) in arb_point(),
        (tx, ty, tz) in arb_point(),
        yaw in arb_yaw(),
    ) {
        let t = Transform::translation(tx, ty, tz).then(&Transform::rotation_y(yaw));
        let p = Point3d::new(px, py, pz);
        let back = t.rigid_inverse().transform_point(&t.transform_point(&p));
        prop_assert!(back.distance_to(&p) < 1e-6);
    }

    // world_to_local inverts world_transform anywhere in a nested chain.
    #[test]
    fn world_to_local_inverts_world_transform(
        offsets in proptest::collection::vec((arb_point(), arb_yaw()), 1..6),
        (px, py, pz) in arb_point(),
    ) {
        let mut graph = SceneGraph::new();
        let mut current = graph.create_group("root");
        for ((tx, ty, tz), yaw) in &offsets {
            let child = graph.create_child_group("link", current).unwrap();
            graph.set_translation(child, Vec3::new(*tx, *ty, *tz)).unwrap();
            graph.set_yaw(child, *yaw).unwrap();
            current = child;
        }

        let local = Point3d::new(px, py, pz);
        let world = graph.world_transform(current).unwrap().transform_point(&local);
        let back = graph.world_to_local(current, &world).unwrap();
        prop_assert!(back.distance_to(&local) < 1e-5,
            "round trip drifted by {}", back.distance_to(&local));
    }

    // Composing a child's local transform onto its parent's world
    // transform equals the child's world transform.
    #[test]
    fn world_transform_is_parent_times_local(
        (tx, ty, tz) in arb_point(),
        parent_yaw in arb_yaw(),
        child_yaw in arb_yaw(),
    ) {
        let mut graph = SceneGraph::new();
        let parent = graph.create_group("parent");
        let child = graph.create_child_group("child", parent).unwrap();
        graph.set_translation(parent, Vec3::new(tx, ty, tz)).unwrap();
        graph.set_yaw(parent, parent_yaw).unwrap();
        graph.set_translation(child, Vec3::new(ty, tz, tx)).unwrap();
        graph.set_yaw(child, child_yaw).unwrap();

        let composed = graph
            .world_transform(parent)
            .unwrap()
            .then(&graph.local_transform(child).unwrap());
        let direct = graph.world_transform(child).unwrap();

        let probe = Point3d::new(1.0, 2.0, 3.0);
        let a = composed.transform_point(&probe);
        let b = direct.transform_point(&probe);
        prop_assert!(a.distance_to(&b) < 1e-6);
    }
}

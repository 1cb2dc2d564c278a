//! End-to-end workflow scenarios.

use approx::assert_relative_eq;

use wall_test_harness::{assertions, helpers, WallWorkflow};
use wall_types::{Config, FoldState, Variant};

#[test]
fn flush_default_readout_and_budget() {
    WallWorkflow::new(Config::flush_default())
        .unwrap()
        .verify(|e| assertions::assert_readout(e, 662.0, 662.0, "flush default"))
        .unwrap()
        .verify(|e| assertions::assert_length_budget(e, "flush default"))
        .unwrap();
}

#[test]
fn leg_track_default_readout_and_budget() {
    WallWorkflow::new(Config::leg_track_default())
        .unwrap()
        .verify(|e| assertions::assert_readout(e, 754.0, 377.0, "leg-track default"))
        .unwrap()
        .verify(|e| assertions::assert_length_budget(e, "leg-track default"))
        .unwrap();
}

#[test]
fn length_budget_survives_resizing() {
    let mut flow = WallWorkflow::new(Config::leg_track_default()).unwrap();
    for (length, height, sections) in [
        (1500.0, 2200.0, 2),
        (3200.0, 2600.0, 5),
        (4800.0, 2800.0, 7),
    ] {
        flow = flow
            .resize(length, height, sections)
            .unwrap()
            .verify(|e| assertions::assert_length_budget(e, "resized"))
            .unwrap();
    }
}

#[test]
fn folded_chain_alternates() {
    WallWorkflow::new(Config::leg_track_default())
        .unwrap()
        .fold_forward()
        .unwrap()
        .settle()
        .unwrap()
        .verify(|e| assertions::assert_alternating_rotation(e, "folded forward"))
        .unwrap();
}

#[test]
fn fold_then_unfold_returns_to_rest() {
    WallWorkflow::new(Config::flush_default())
        .unwrap()
        .fold_backward()
        .unwrap()
        .settle()
        .unwrap()
        .unfold()
        .unwrap()
        .settle()
        .unwrap()
        .verify(|e| assertions::assert_chain_at_rest(e, 1e-2, "after round trip"))
        .unwrap();
}

#[test]
fn toggle_twice_round_trips() {
    let flow = WallWorkflow::new(Config::leg_track_default())
        .unwrap()
        .toggle()
        .unwrap()
        .settle()
        .unwrap();
    assert_eq!(flow.engine().fold_state(), FoldState::Folded);

    let flow = flow
        .toggle()
        .unwrap()
        .settle()
        .unwrap()
        .verify(|e| assertions::assert_chain_at_rest(e, 1e-2, "after second toggle"))
        .unwrap();
    assert_eq!(flow.engine().fold_state(), FoldState::Open);
}

#[test]
fn folding_pulls_panels_toward_the_hinge_side() {
    let mut engine = WallWorkflow::new(Config::leg_track_default())
        .unwrap()
        .into_engine();

    let rest = helpers::panel_world_xs(&engine).unwrap();
    engine.fold_forward().unwrap();
    helpers::settle(&mut engine).unwrap();
    let folded = helpers::panel_world_xs(&engine).unwrap();

    // The far end of the chain swings the furthest; the leader barely moves.
    let last = rest.len() - 1;
    assert!(
        (folded[last] - rest[last]).abs() > (folded[0] - rest[0]).abs(),
        "tail moved {:.1}, leader moved {:.1}",
        (folded[last] - rest[last]).abs(),
        (folded[0] - rest[0]).abs(),
    );
}

#[test]
fn rejected_resize_keeps_previous_geometry() {
    let mut engine = WallWorkflow::new(Config::leg_track_default())
        .unwrap()
        .into_engine();
    let before = engine.readout();

    // Two 50 mm legs alone overflow a 100 mm opening.
    assert!(engine.set_dimensions(100.0, 2500.0, 5).is_err());
    assert_eq!(engine.readout(), before);
}

#[test]
fn variant_switch_mid_session() {
    let mut engine = WallWorkflow::new(Config::flush_default())
        .unwrap()
        .into_engine();
    assert!(engine.assembly().wheels.is_empty());

    let mut config = *engine.config();
    config.variant = Variant::leg_track();
    engine.set_config(config).unwrap();

    assert_relative_eq!(
        engine.dimensions().leader_width * 2.0,
        engine.dimensions().standard_width
    );
    assert!(!engine.assembly().wheels.is_empty());
    assertions::assert_length_budget(&engine, "after variant switch").unwrap();
}

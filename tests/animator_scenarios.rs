//! End-to-end scenarios driving `EntityAnimator` with synthetic frame deltas.

use animus::animation::EngineSnapshot;
use animus::form::{ActiveForm, Layer, ParticleForm};
use animus::input::handle_key_press;
use animus::{EntityAnimator, EntityCommand, EntityState, FormKind, Options};

const DT: f32 = 1.0 / 60.0;

fn animator(seed: u64) -> EntityAnimator {
    EntityAnimator::with_seed(Options::default(), seed).unwrap()
}

fn shells_preset(core_inner: &str, edge_outer: &str) -> String {
    format!(
        "[cloud.shells.core]\ninner_radius = {core_inner}\nouter_radius = 0.8\n\
         count = 1500\nsize = 0.06\n\n\
         [cloud.shells.mid]\ninner_radius = 0.8\nouter_radius = 1.6\n\
         count = 1200\nsize = 0.045\n\n\
         [cloud.shells.edge]\ninner_radius = 1.6\nouter_radius = {edge_outer}\n\
         count = 800\nsize = 0.03\n"
    )
}

fn run_for(animator: &mut EntityAnimator, seconds: f32) {
    let frames = (seconds / DT).round() as usize;
    for _ in 0..frames {
        let _ = animator.tick(DT);
    }
}

#[test]
fn starts_resting_with_ring_form() {
    let a = animator(1);
    assert_eq!(a.state(), EntityState::Resting);
    let frame = a.render_frame();
    assert_eq!(frame.form, FormKind::Rings);
    assert_eq!(frame.snapshot, EngineSnapshot::Idle(EntityState::Resting));
    assert!(frame.batch("rings").is_some());
    assert!(frame.batch("eyes").is_some());
}

#[test]
fn full_state_cycle_commits_each_target() {
    let mut a = animator(2);
    for target in [
        EntityState::Thinking,
        EntityState::Acting,
        EntityState::Resting,
    ] {
        assert!(a.transition_to(target));
        run_for(&mut a, 2.5);
        assert_eq!(a.state(), target);
        assert!(!a.engine().is_transitioning());
    }
}

#[test]
fn requests_during_transition_are_ignored() {
    let mut a = animator(3);
    assert!(a.transition_to(EntityState::Thinking));
    run_for(&mut a, 0.2);
    assert!(!a.transition_to(EntityState::Acting));
    run_for(&mut a, 2.0);
    assert_eq!(a.state(), EntityState::Thinking);
}

#[test]
fn eased_progress_is_monotonic_over_ticks() {
    let mut a = animator(4);
    assert!(a.transition_to(EntityState::Acting));
    let mut last = 0.0;
    loop {
        match a.tick(DT) {
            EngineSnapshot::Transitioning { progress_eased, .. } => {
                assert!(progress_eased >= last);
                last = progress_eased;
            }
            EngineSnapshot::Idle(state) => {
                assert_eq!(state, EntityState::Acting);
                break;
            }
        }
    }
}

#[test]
fn opacity_blends_during_transition() {
    let mut a = animator(5);
    let _ = a.tick(DT);
    let resting = a.render_frame().batches[0].scalar("u_opacity").unwrap();
    assert!(a.transition_to(EntityState::Acting));
    run_for(&mut a, 0.5);
    let mid = a.render_frame().batches[0].scalar("u_opacity").unwrap();
    run_for(&mut a, 1.0);
    let acting = a.render_frame().batches[0].scalar("u_opacity").unwrap();
    assert!((resting - 0.6).abs() < 1e-6);
    assert!(mid > resting && mid < acting);
    assert!((acting - 1.0).abs() < 1e-6);
}

#[test]
fn cloud_stays_contained_through_transitions() {
    let mut a = animator(6);
    assert!(a.select_form(FormKind::Cloud).unwrap());
    let schedule = [
        EntityState::Acting,
        EntityState::Thinking,
        EntityState::Resting,
        EntityState::Acting,
    ];
    for target in schedule {
        let _ = a.transition_to(target);
        for _ in 0..150 {
            let _ = a.tick(DT);
            let ActiveForm::Cloud(cloud) = a.form() else {
                panic!("expected cloud form");
            };
            for (p, layer) in cloud.positions().iter().zip(cloud.layers()) {
                assert!(p.length() <= cloud.containment_radius(*layer) + 1e-4);
            }
        }
    }
}

#[test]
fn particle_counts_survive_ticks_and_transitions() {
    let mut a = animator(7);
    let rings = a.form().particle_count();
    assert!(a.transition_to(EntityState::Acting));
    run_for(&mut a, 1.0);
    assert_eq!(a.form().particle_count(), rings);
    assert_eq!(a.render_frame().particle_count(), rings);

    let _ = a.select_form(FormKind::Cloud).unwrap();
    let cloud = a.form().particle_count();
    run_for(&mut a, 1.0);
    assert_eq!(a.form().particle_count(), cloud);
}

#[test]
fn same_seed_reproduces_frames() {
    let drive = |seed| {
        let mut a = animator(seed);
        let _ = a.select_form(FormKind::Cloud).unwrap();
        let _ = a.transition_to(EntityState::Thinking);
        run_for(&mut a, 0.5);
        a.render_frame()
    };
    assert_eq!(drive(11), drive(11));
    assert_ne!(drive(11).batches, drive(12).batches);
}

#[test]
fn key_presses_drive_the_animator() {
    let mut a = animator(8);
    let bindings = a.options().keybindings.clone();

    let cmd = handle_key_press(&bindings, "KeyT").unwrap();
    assert!(a.execute(cmd).unwrap());
    run_for(&mut a, 2.0);
    assert_eq!(a.state(), EntityState::Thinking);

    let cmd = handle_key_press(&bindings, "Digit2").unwrap();
    assert_eq!(cmd, EntityCommand::SelectForm(FormKind::Cloud));
    assert!(a.execute(cmd).unwrap());
    assert_eq!(a.form().kind(), FormKind::Cloud);

    let cmd = handle_key_press(&bindings, "Digit3").unwrap();
    assert!(a.execute(cmd).unwrap());
    assert_eq!(a.form().kind(), FormKind::Rings);
}

#[test]
fn auto_rotate_moves_the_camera() {
    let mut a = animator(9);
    let before = a.camera().eye();
    run_for(&mut a, 1.0);
    let after = a.camera().eye();
    assert!(before.distance(after) > 0.1);
    assert!((before.length() - after.length()).abs() < 1e-4);

    let _ = a.execute(EntityCommand::ToggleAutoRotate).unwrap();
    let paused = a.camera().eye();
    run_for(&mut a, 1.0);
    assert!(paused.distance(a.camera().eye()) < 1e-6);
}

#[test]
fn cloud_layers_are_tagged_in_render_data() {
    let mut a = animator(10);
    let _ = a.select_form(FormKind::Cloud).unwrap();
    let _ = a.tick(DT);
    let frame = a.render_frame();
    let batch = frame.batch("cloud").unwrap();
    let core = batch
        .instances
        .iter()
        .filter(|i| i.layer == Layer::Core.index() as u32)
        .count();
    assert_eq!(core, a.options().cloud.shells.core.count);
}

#[test]
fn non_finite_preset_is_rejected_at_construction() {
    let toml = "[rings]\nsize_min = nan\n";
    let options = Options::from_toml_str(toml).unwrap();
    assert!(matches!(
        EntityAnimator::with_seed(options, 1),
        Err(animus::AnimusError::InvalidConfig(_))
    ));

    let toml = format!(
        "initial_form = \"cloud\"\n\n{}",
        shells_preset("nan", "2.4")
    );
    let options = Options::from_toml_str(&toml).unwrap();
    assert!(EntityAnimator::with_seed(options, 1).is_err());
}

#[test]
fn huge_frame_delta_does_not_advance_or_panic() {
    let mut a = animator(13);
    let _ = a.tick(1e20);
    assert_eq!(a.clock(), std::time::Duration::ZERO);
    run_for(&mut a, 0.5);
    assert!(a.time() > 0.4);
}

#[test]
fn partial_preset_drives_a_custom_animator() {
    let toml = r#"
        initial_form = "cloud"
        seed = 99

        [[transitions.durations]]
        from = "resting"
        to = "acting"
        millis = 100
    "#;
    let options = Options::from_toml_str(toml).unwrap();
    let mut a = EntityAnimator::new(options).unwrap();
    assert_eq!(a.form().kind(), FormKind::Cloud);
    assert!(a.transition_to(EntityState::Acting));
    run_for(&mut a, 0.2);
    assert_eq!(a.state(), EntityState::Acting);
    // Unlisted pairs fall back to one second.
    assert!(a.transition_to(EntityState::Thinking));
    run_for(&mut a, 0.9);
    assert!(a.engine().is_transitioning());
    run_for(&mut a, 0.2);
    assert_eq!(a.state(), EntityState::Thinking);
}

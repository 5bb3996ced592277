//! Headless driver: runs the animator for a while and logs what it does.
//!
//! Usage: `animus [options.toml] [seconds]`

use std::path::Path;
use std::process::ExitCode;

use animus::input::handle_key_press;
use animus::util::frame_timing::FrameTiming;
use animus::{AnimusError, EngineSnapshot, EntityAnimator, Options};

/// Key presses replayed by the driver, one every `SCRIPT_INTERVAL` seconds.
const SCRIPT: [&str; 8] = [
    "KeyT", "KeyA", "Digit2", "KeyR", "KeyO", "KeyT", "Digit3", "KeyA",
];
const SCRIPT_INTERVAL: f32 = 2.0;
const DEFAULT_SECONDS: f32 = 16.0;

fn run() -> Result<(), AnimusError> {
    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let bindings = options.keybindings.clone();
    let mut animator = EntityAnimator::new(options)?;
    let mut timing = FrameTiming::new(60);
    let dt = timing.nominal_dt();

    let mut next_key = 0;
    let mut next_report = 1.0;
    while animator.time() < seconds {
        if !timing.should_render() {
            std::thread::sleep(timing.remaining());
        }

        if animator.time() >= SCRIPT_INTERVAL * (next_key + 1) as f32 {
            let key = SCRIPT[next_key % SCRIPT.len()];
            next_key += 1;
            if let Some(command) = handle_key_press(&bindings, key) {
                let changed = animator.execute(command)?;
                log::info!("{key} -> {command:?} (changed: {changed})");
            }
        }

        let snapshot = animator.tick(dt);
        let _ = timing.end_frame();

        if animator.time() >= next_report {
            next_report += 1.0;
            report(&animator, snapshot, timing.fps());
        }
    }

    log::info!(
        "done after {} frames, final state {}",
        timing.frames(),
        animator.state()
    );
    Ok(())
}

fn report(animator: &EntityAnimator, snapshot: EngineSnapshot, fps: f32) {
    let frame = animator.render_frame();
    match snapshot {
        EngineSnapshot::Idle(state) => log::info!(
            "t={:.1}s {state} {} form: {} particles, glow {:.2}, {fps:.0} fps",
            frame.time,
            frame.form,
            frame.particle_count(),
            frame.glow.intensity,
        ),
        EngineSnapshot::Transitioning {
            from,
            to,
            progress_eased,
            ..
        } => log::info!(
            "t={:.1}s {from} -> {to} at {:.0}% {} form: {} particles, glow \
             {:.2}, {fps:.0} fps",
            frame.time,
            progress_eased * 100.0,
            frame.form,
            frame.particle_count(),
            frame.glow.intensity,
        ),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

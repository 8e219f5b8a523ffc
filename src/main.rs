/// Entry point and frame clock.

mod config;
mod domain;
mod logging;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use config::SceneConfig;
use sim::event::SceneEvent;
use sim::scene::Scene;
use ui::input::InputState;
use ui::renderer::TerminalSession;

/// How long the loop sleeps between input polls.
const POLL_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    let log_gate = logging::init();

    let config = SceneConfig::load();
    let mut scene = Scene::new(config);
    log::info!(
        "{:?} scene, seed {}, {} ms per frame",
        scene.config.variant,
        scene.seed(),
        scene.config.frame_delay_ms
    );

    let mut session = match TerminalSession::start() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Terminal init failed: {e}");
            return;
        }
    };

    // The screen belongs to the animation until the session ends
    log_gate.divert();
    let result = frame_loop(&mut scene, &mut session);

    if let Err(e) = session.finish() {
        eprintln!("Terminal cleanup failed: {e}");
    }
    log_gate.restore();

    if let Err(e) = result {
        eprintln!("Animation error: {e}");
    }
}

fn frame_loop(
    scene: &mut Scene,
    session: &mut TerminalSession<std::io::Stdout>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = InputState::new();
    let frame_delay = Duration::from_millis(scene.config.frame_delay_ms);

    // First frame goes out immediately
    let mut last_tick = Instant::now()
        .checked_sub(frame_delay)
        .unwrap_or_else(Instant::now);

    loop {
        input.drain_events();
        if input.quit_requested() {
            break;
        }
        if input.resized {
            session.invalidate()?;
        }

        if last_tick.elapsed() >= frame_delay {
            last_tick = Instant::now();
            let events = scene.tick();
            log_events(&events);
            let frame = scene.render_frame();
            session.present(&frame)?;
        }

        std::thread::sleep(POLL_SLEEP);
    }

    Ok(())
}

fn log_events(events: &[SceneEvent]) {
    for event in events {
        match event {
            SceneEvent::StarsRegenerated { batch } => log::debug!("starfield regenerated (batch {batch})"),
            SceneEvent::OffsetWrapped { layer } => log::trace!("{layer:?} offset wrapped"),
            SceneEvent::AgentJumped { tree_x } => log::debug!("agent jumped, tree at column {tree_x}"),
            SceneEvent::AgentLanded => log::debug!("agent landed"),
            SceneEvent::AgentRecovered => log::trace!("agent running again"),
        }
    }
}

/// Lifecycle input: the only keys the program listens for are the ones
/// that end it.
///
/// Raw mode swallows SIGINT, so Ctrl+C arrives as an ordinary key event and
/// has to be polled for here. The scene itself never sees input.

use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct InputState {
    /// Raw key events collected during the most recent drain.
    pub raw_events: Vec<KeyEvent>,
    /// The terminal reported a resize since the last drain.
    pub resized: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            raw_events: Vec::with_capacity(8),
            resized: false,
        }
    }

    /// Drain all pending terminal events without blocking.
    /// Call this once per loop iteration.
    pub fn drain_events(&mut self) {
        self.raw_events.clear();
        self.resized = false;

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    self.raw_events.push(key);
                }
                Ok(Event::Resize(..)) => self.resized = true,
                _ => {}
            }
        }
    }

    /// Ctrl+C, `q` or Esc.
    pub fn quit_requested(&self) -> bool {
        self.raw_events.iter().any(is_quit)
    }
}

fn is_quit(k: &KeyEvent) -> bool {
    let ctrl_c = k.modifiers.contains(KeyModifiers::CONTROL)
        && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'));
    ctrl_c || matches!(k.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

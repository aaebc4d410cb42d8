//! Audio cues emitted by the game
//!
//! The engine only reports what happened; an [`AudioSink`] decides how (or
//! whether) to make it audible.

use std::io::{Write, stderr};

use tracing::{debug, warn};

/// One-shot events worth a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    FoodCollected,
    GameOver,
}

/// Receiver for cues and the background loop
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
    fn start_loop(&mut self);
    fn stop_loop(&mut self);
}

/// Rings the terminal bell on cues.
///
/// Terminals have no way to play a background track, so the loop is only
/// tracked as a flag.
#[derive(Debug, Default)]
pub struct TerminalBell {
    looping: bool,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: AudioCue) {
        let mut err = stderr();
        if let Err(e) = err.write_all(b"\x07").and_then(|_| err.flush()) {
            warn!(?cue, error = %e, "Failed to ring bell");
        }
    }

    fn start_loop(&mut self) {
        debug!("Background loop started");
        self.looping = true;
    }

    fn stop_loop(&mut self) {
        debug!("Background loop stopped");
        self.looping = false;
    }
}

/// Discards everything
#[derive(Debug, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: AudioCue) {}

    fn start_loop(&mut self) {}

    fn stop_loop(&mut self) {}
}

/// Pick the sink for the `sound` setting
pub fn sink_for(sound: bool) -> Box<dyn AudioSink> {
    if sound {
        Box::new(TerminalBell::new())
    } else {
        Box::new(Muted)
    }
}

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, Write, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::audio::{AudioCue, AudioSink, sink_for};
use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, ScreenBuffer, ScreenLayout, ScreenProjector};

const WINDOW_TITLE: &str = "Snake";

/// Keyboard-driven play in the terminal.
///
/// Everything runs on one task: key events only record the latest direction,
/// which the next tick consumes.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    projector: ScreenProjector,
    screen: ScreenBuffer,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Box<dyn AudioSink>,
    tick_interval: Duration,
    should_quit: bool,
    cursor_visible: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let audio = sink_for(config.sound);
        Self::with_audio(config, audio)
    }

    pub fn with_audio(config: GameConfig, audio: Box<dyn AudioSink>) -> Self {
        let layout = ScreenLayout::new(config.field_size, config.panel_width);
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config);
        let state = engine.new_game(0);

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            projector: ScreenProjector::new(layout),
            screen: layout.buffer(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            tick_interval,
            should_quit: false,
            cursor_visible: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        enter_screen(&mut stderr)?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            field_size = self.state.field_size,
            tick_ms = self.tick_interval.as_millis() as u64,
            "Game started"
        );
        self.audio.start_loop();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.audio.stop_loop();
        self.cleanup_terminal(&mut terminal)?;
        info!(high_score = self.state.high_score, "Quit");

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, then draw the result
                _ = tick_timer.tick() => {
                    self.update_game();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let action = self.input_handler.handle_key_event(key);
            let running = self.state.phase.is_running();

            // Once the round has ended only restart and quit are accepted
            match action {
                KeyAction::GameAction(Action::Move(dir)) if running => {
                    self.pending_direction = Some(dir);
                }
                KeyAction::ToggleCursor if running => {
                    self.cursor_visible = !self.cursor_visible;
                }
                KeyAction::Restart if !running => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) {
        if !self.state.phase.is_running() {
            return;
        }

        let intent = self.pending_direction.take();
        let result = self.engine.tick(&mut self.state, intent);

        for cue in result.cues {
            if cue == AudioCue::FoodCollected {
                self.metrics.on_food();
            }
            self.audio.play(cue);
        }

        if !result.phase.is_running() {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.projector.project(&self.state, &mut self.screen);

        let screen = &self.screen;
        let renderer = &self.renderer;
        let cursor_visible = self.cursor_visible;
        terminal
            .draw(|frame| renderer.render(frame, screen, cursor_visible))
            .context("Failed to draw frame")?;

        Ok(())
    }

    fn reset_game(&mut self) {
        self.engine.restart(&mut self.state);
        self.metrics.on_game_start();
        self.pending_direction = None;
        debug!("Round reset");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn enter_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
        .context("Failed to enter alternate screen")
}

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{Stream, StreamExt};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::info;

use crate::game::{Action, Direction, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven game: polls input, steps the engine once per frame and
/// draws the result.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    pub fn new(mut engine: GameEngine) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(config = ?self.engine.config(), "game started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(score = self.state.score(), frames = self.state.frames, "game stopped");
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let fps = u64::from(self.engine.config().frames_per_second.max(1));
        let mut frame_timer = interval(Duration::from_micros(1_000_000 / fps));
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One simulation step and one draw per frame
                _ = frame_timer.tick() => {
                    self.update_game()?;
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit || self.state.won {
                break;
            }
        }

        if self.state.won && !self.should_quit {
            self.hold_win_screen(&mut event_stream).await;
        }

        Ok(())
    }

    /// Keep the win screen up for the configured time. Quit keys still end it early.
    async fn hold_win_screen<S>(&mut self, events: &mut S)
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let hold = sleep(Duration::from_secs(self.engine.config().win_screen_secs));
        tokio::pin!(hold);

        let mut input_closed = false;

        loop {
            tokio::select! {
                _ = &mut hold => break,

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(_)) => {}
                    None => input_closed = true,
                },

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            // No more input can arrive; wait out the screen
            if input_closed {
                hold.await;
                break;
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                // First direction key of the frame wins
                KeyAction::Turn(dir) => {
                    self.pending_direction.get_or_insert(dir);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let action = Action::from(self.pending_direction.take());
        self.engine
            .step(&mut self.state, action)
            .context("Simulation step failed")?;
        self.metrics.update(self.state.score());
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.state, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        HumanMode::new(GameEngine::with_seed(GameConfig::default(), 1))
    }

    fn won_mode(win_screen_secs: u64) -> HumanMode {
        let config = GameConfig {
            win_screen_secs,
            ..Default::default()
        };
        let mut mode = HumanMode::new(GameEngine::with_seed(config, 1));
        mode.state.won = true;
        mode
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(!mode.state.won);
        assert_eq!(mode.state.score(), 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_first_direction_in_frame_wins() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Up));
        mode.handle_event(key(KeyCode::Left));
        assert_eq!(mode.pending_direction, Some(Direction::Up));

        mode.update_game().unwrap();
        assert_eq!(mode.state.snake.direction(), Some(Direction::Up));
        assert_eq!(mode.pending_direction, None);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Esc));
        assert!(mode.should_quit);
    }

    #[tokio::test]
    async fn test_quit_key_cuts_win_screen_short() {
        let mut mode = won_mode(3600);
        let mut events = futures::stream::iter(vec![Ok::<_, io::Error>(key(KeyCode::Char('q')))]);

        tokio::time::timeout(Duration::from_secs(5), mode.hold_win_screen(&mut events))
            .await
            .expect("win screen ignored the quit key");
        assert!(mode.should_quit);
    }

    #[tokio::test]
    async fn test_win_screen_times_out_without_input() {
        let mut mode = won_mode(0);
        let mut events = futures::stream::pending::<io::Result<Event>>();

        tokio::time::timeout(Duration::from_secs(5), mode.hold_win_screen(&mut events))
            .await
            .expect("win screen never closed");
        assert!(!mode.should_quit);
    }
}

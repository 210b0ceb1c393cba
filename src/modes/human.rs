use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tracing::info;

use super::scheduler::TickScheduler;
use crate::game::{Direction, GameConfig, GameEngine, GameState, StepResult};
use crate::input::{InputHandler, KeyAction};
use crate::render::{FramePainter, Renderer, Scene};

/// One play session at the keyboard, from launch until the player quits
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    painter: FramePainter,
    scene: Scene,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_delay: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config.clone())?;
        let state = engine.reset();

        let painter = FramePainter::new(&config);
        let area = painter.area();
        let renderer = Renderer::new(config.tile_size);
        let tick_delay = config.tick_delay();

        Ok(Self {
            engine,
            state,
            painter,
            scene: Scene::new(area.width, area.height),
            renderer,
            input_handler: InputHandler::new(),
            tick_delay,
            should_quit: false,
        })
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

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut scheduler = TickScheduler::new();

        info!(
            tiles_x = self.state.tile_count_x,
            tiles_y = self.state.tile_count_y,
            tick_ms = self.tick_delay.as_millis() as u64,
            "Game started"
        );

        // The first tick runs immediately and produces the first frame
        self.tick_and_reschedule(&mut scheduler);

        loop {
            terminal
                .draw(|frame| self.renderer.render(frame, &self.scene))
                .context("Failed to draw frame")?;

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = scheduler.fired() => {
                    self.tick_and_reschedule(&mut scheduler);
                }

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

    fn tick_and_reschedule(&mut self, scheduler: &mut TickScheduler) {
        let result = self.tick();
        if !result.terminated() {
            scheduler.after(self.tick_delay);
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.steer(direction),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Applied immediately; the next tick moves along whatever velocity is current
    fn steer(&mut self, direction: Direction) {
        self.engine.handle_direction(&mut self.state, direction);
    }

    /// Advance one step and repaint. A fatal move is still painted before
    /// the game over message goes on top of it.
    fn tick(&mut self) -> StepResult {
        let result = self.engine.step(&mut self.state);

        self.painter.paint_frame(&mut self.scene, &self.state);

        if let Some(reason) = result.collision() {
            let head = self.state.snake.head();
            info!(
                %reason,
                head_x = head.x,
                head_y = head.y,
                length = self.state.snake.len(),
                steps = self.state.steps,
                "Game over"
            );
            self.painter.paint_game_over(&mut self.scene);
        }

        result
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

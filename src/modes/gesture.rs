use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::game::{ControlState, GameConfig, GameEngine, GameStatus};
use crate::hand::{ControlResolver, FrameSource, GestureSet, Landmark};
use crate::input::{InputHandler, KeyCommand};
use crate::metrics::{PipelineStats, SessionMetrics};
use crate::render::Renderer;

/// Where the landmark stream comes from: a tracker process piped into
/// stdin, or a recorded session file.
#[derive(Debug, Clone)]
pub enum FrameInput {
    Stdin,
    Path(PathBuf),
}

/// Latest output of the frame pipeline. The game only ever wants the
/// newest value, so a watch channel carries it and stale snapshots are
/// overwritten rather than queued.
#[derive(Debug, Clone, Default)]
struct PipelineSnapshot {
    controls: ControlState,
    gestures: GestureSet,
    hands: Vec<Vec<Landmark>>,
    stats: PipelineStats,
}

/// Gesture-driven play: landmark frames steer the snake, with the
/// keyboard kept as a fallback
pub struct GestureMode {
    engine: GameEngine,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    input: FrameInput,
    latest: PipelineSnapshot,
    pipeline_done: bool,
    should_quit: bool,
}

impl GestureMode {
    pub fn new(config: GameConfig, input: FrameInput) -> Self {
        let mut engine = GameEngine::new(config);
        engine.start();

        Self {
            engine,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            input,
            latest: PipelineSnapshot::default(),
            pipeline_done: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Open the stream before touching the terminal so a bad path
        // fails with a readable error
        let source = match &self.input {
            FrameInput::Stdin => FrameSource::stdin(),
            FrameInput::Path(path) => FrameSource::open(path).await?,
        };

        let (tx, frames) = watch::channel(PipelineSnapshot::default());
        let reader = tokio::spawn(pump_frames(source, tx));

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal, frames).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;
        reader.abort();

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        mut frames: watch::Receiver<PipelineSnapshot>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Pipeline snapshot; the guard keeps a closed channel
                // from waking the loop on every pass
                changed = frames.changed(), if !self.pipeline_done => {
                    match changed {
                        Ok(()) => {
                            let update = frames.borrow_and_update().clone();
                            self.engine.set_controls(update.controls);
                            self.latest = update;
                        }
                        // Sender gone: keep the last snapshot on screen
                        Err(_) => self.pipeline_done = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.advance_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let state = self.engine.snapshot();
                    let controls = self.engine.controls();
                    terminal.draw(|frame| {
                        self.renderer.render_with_hands(
                            frame,
                            &state,
                            controls,
                            &self.metrics,
                            &self.latest.hands,
                            self.latest.gestures,
                            &self.latest.stats,
                        );
                    }).context("Failed to draw frame")?;
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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyCommand::Steer(direction) => {
                    self.engine.set_controls(ControlState::pressed(direction));
                }
                KeyCommand::TogglePause => self.toggle_pause(),
                KeyCommand::Restart => self.restart_game(),
                KeyCommand::Quit => self.should_quit = true,
                KeyCommand::None => {}
            }
        }
    }

    fn toggle_pause(&mut self) {
        match self.engine.status() {
            GameStatus::Running => self.engine.pause(),
            GameStatus::Paused => self.engine.resume(),
            _ => {}
        }
    }

    fn advance_game(&mut self) {
        let outcome = self.engine.tick();
        if outcome.collision.is_some() {
            self.metrics.on_game_over(self.engine.score());
        }
    }

    fn restart_game(&mut self) {
        self.engine.reset();
        self.engine.start();
        self.metrics.on_game_start();
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

/// Reads frames until the stream ends, resolving each into controls and
/// publishing the result. Malformed lines are counted and skipped; read
/// failures end the stream.
async fn pump_frames(mut source: FrameSource, tx: watch::Sender<PipelineSnapshot>) {
    let resolver = ControlResolver::new();
    let mut stats = PipelineStats::default();

    loop {
        match source.next_frame().await {
            Ok(Some(frame)) => {
                stats.record_frame(&frame);
                let snapshot = PipelineSnapshot {
                    controls: resolver.resolve(&frame),
                    gestures: resolver.detect_hands(&frame),
                    hands: frame.hands,
                    stats,
                };
                if tx.send(snapshot).is_err() {
                    return;
                }
            }
            Ok(None) => break,
            Err(err) => {
                if err.downcast_ref::<std::io::Error>().is_some() {
                    warn!(error = %err, "frame stream failed");
                    break;
                }
                stats.record_parse_error();
                debug!(error = %err, "skipping malformed frame");
            }
        }
    }

    // Stream over: a stale gesture must not keep steering the snake
    let _ = tx.send(PipelineSnapshot {
        stats,
        ..PipelineSnapshot::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncWriteExt, BufReader};

    #[tokio::test]
    async fn test_pump_counts_frames_and_ends_neutral() {
        let input = concat!(
            "{\"hands\": [], \"labels\": [{\"category\": \"Pointing_Up\"}]}\n",
            "this is not a frame\n",
            "{\"hands\": [], \"labels\": []}\n",
        );
        let source = FrameSource::from_reader(BufReader::new(input.as_bytes()));
        let (tx, rx) = watch::channel(PipelineSnapshot::default());

        pump_frames(source, tx).await;

        let last = rx.borrow();
        assert!(last.controls.is_neutral());
        assert_eq!(last.stats.frames, 2);
        assert_eq!(last.stats.parse_errors, 1);
    }

    #[tokio::test]
    async fn test_pump_publishes_resolved_controls() {
        let (mut writer, server) = tokio::io::duplex(1024);
        let source = FrameSource::from_reader(BufReader::new(server));
        let (tx, mut rx) = watch::channel(PipelineSnapshot::default());
        let pump = tokio::spawn(pump_frames(source, tx));

        writer
            .write_all(b"{\"hands\": [], \"labels\": [{\"category\": \"Pointing_Up\"}]}\n")
            .await
            .unwrap();

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().controls.up);

        // Closing the writer ends the stream and clears the controls
        drop(writer);
        pump.await.unwrap();
        assert!(rx.borrow().controls.is_neutral());
    }
}

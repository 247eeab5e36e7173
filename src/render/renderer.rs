use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, ControlState, GameState, GameStatus};
use crate::hand::{GestureSet, HandLandmark, Landmark};
use crate::metrics::{PipelineStats, SessionMetrics};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Keyboard layout: stats header, centered board, controls footer
    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        controls: ControlState,
        metrics: &SessionMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(4), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let board = self.board_widget(game_area, state, metrics);
        frame.render_widget(board, game_area);

        let footer = self.render_footer(chunks[2], controls);
        frame.render_widget(footer, chunks[2]);
    }

    /// Gesture layout: board on the left, the tracked hand and pipeline
    /// counters on the right
    pub fn render_with_hands(
        &self,
        frame: &mut Frame,
        state: &GameState,
        controls: ControlState,
        metrics: &SessionMetrics,
        hands: &[Vec<Landmark>],
        gestures: GestureSet,
        stats: &PipelineStats,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(frame.area());

        let header = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(header, chunks[0]);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);

        let board = self.board_widget(halves[0], state, metrics);
        frame.render_widget(board, halves[0]);

        let panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(halves[1]);

        let hand_panel = self.render_hand_panel(panel[0], hands, gestures);
        frame.render_widget(hand_panel, panel[0]);

        let pipeline = self.render_pipeline_stats(panel[1], stats);
        frame.render_widget(pipeline, panel[1]);

        let footer = self.render_footer(chunks[2], controls);
        frame.render_widget(footer, chunks[2]);
    }

    fn board_widget(
        &self,
        area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        match state.status {
            GameStatus::GameOver => self.render_game_over(area, state, metrics),
            GameStatus::Paused => self.render_paused(area, state),
            _ => self.render_grid(area, state),
        }
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for row in 0..state.grid_height {
            let mut spans = Vec::new();

            for col in 0..state.grid_width {
                let cell = Cell::new(col as i32, row as i32);

                let span = if cell == state.snake.head() {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(cell) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == state.food {
                    // Food
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Last: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.last_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let reason = state
            .collision
            .map(|collision| collision.message())
            .unwrap_or("");

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                reason,
                Style::default().fg(Color::White),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_paused(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to resume", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_hand_panel(
        &self,
        area: Rect,
        hands: &[Vec<Landmark>],
        gestures: GestureSet,
    ) -> Paragraph<'_> {
        let cols = area.width.saturating_sub(2).max(1) as usize;
        let rows = area.height.saturating_sub(2).max(1) as usize;

        let mut marks: Vec<Vec<Option<(char, Color)>>> = vec![vec![None; cols]; rows];
        for (hand_index, hand) in hands.iter().enumerate() {
            let color = if hand_index == 0 {
                Color::Cyan
            } else {
                Color::Magenta
            };
            for (index, landmark) in hand.iter().enumerate() {
                let col = (landmark.x.clamp(0.0, 1.0) * (cols - 1) as f32).round() as usize;
                let row = (landmark.y.clamp(0.0, 1.0) * (rows - 1) as f32).round() as usize;
                let mark = if index == HandLandmark::Wrist.index() {
                    ('◆', Color::Yellow)
                } else {
                    ('●', color)
                };
                marks[row][col] = Some(mark);
            }
        }

        let lines: Vec<Line> = marks
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|mark| match mark {
                        Some((glyph, color)) => {
                            Span::styled(glyph.to_string(), Style::default().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Hand ");

        // Name the gestures currently firing along the bottom border
        let names = gestures.active_names();
        if !names.is_empty() {
            block = block.title_bottom(Line::styled(
                format!(" {} ", names.join("  ")),
                Style::default().fg(Color::Green),
            ));
        }

        Paragraph::new(lines).block(block)
    }

    fn render_pipeline_stats(&self, _area: Rect, stats: &PipelineStats) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![
                Span::styled("Frames: ", Style::default().fg(Color::Yellow)),
                Span::styled(stats.frames.to_string(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled("Hands: ", Style::default().fg(Color::Yellow)),
                Span::styled(stats.hands.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Dropped: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.incomplete_hands.to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled("Bad lines: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.parse_errors.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_footer(&self, _area: Rect, controls: ControlState) -> Paragraph<'_> {
        let bit = |label: &'static str, on: bool| {
            if on {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(Color::DarkGray))
            }
        };

        let text = vec![
            Line::from(vec![
                Span::styled("Controls: ", Style::default().fg(Color::Yellow)),
                bit("↑", controls.up),
                Span::raw(" "),
                bit("↓", controls.down),
                Span::raw(" "),
                bit("←", controls.left),
                Span::raw(" "),
                bit("→", controls.right),
            ]),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Space", Style::default().fg(Color::Cyan)),
                Span::raw(" to pause | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

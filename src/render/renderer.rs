use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CELL_SIZE, GameState, Position, Rgb};
use crate::metrics::GameMetrics;

pub const BACKGROUND: Rgb = Rgb::CADET_BLUE;
pub const SNAKE_COLOR: Rgb = Rgb::GREEN;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Color of every playfield cell, row by row. Food is painted over the snake.
/// Positions outside the playfield are skipped.
pub fn cell_colors(state: &GameState) -> Vec<Vec<Rgb>> {
    let cols = (state.screen_width / CELL_SIZE).max(0) as usize;
    let rows = (state.screen_height / CELL_SIZE).max(0) as usize;
    let mut grid = vec![vec![BACKGROUND; cols]; rows];

    let mut paint = |pos: Position, color: Rgb| {
        if !state.is_in_bounds(pos) {
            return;
        }
        let (col, row) = pos.cell();
        grid[row as usize][col as usize] = color;
    };

    for segment in state.snake.body() {
        paint(*segment, SNAKE_COLOR);
    }
    for item in state.food.items() {
        for pos in item.positions() {
            paint(*pos, item.color());
        }
    }

    grid
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        if state.won {
            frame.render_widget(self.render_win(state), chunks[1]);
        } else {
            frame.render_widget(self.render_grid(state), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = cell_colors(state)
            .into_iter()
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|rgb| Span::styled(" ", Style::default().bg(to_color(rgb))))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" SSnake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                format!("Score: {:03}", state.score()),
                Style::default()
                    .fg(to_color(Rgb::BLACK))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(to_color(Rgb::GOLDENROD))),
            Span::styled(metrics.peak_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(to_color(Rgb::GOLDENROD))),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().style(Style::default().bg(to_color(BACKGROUND))))
    }

    fn render_win(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "YOU WON!",
                Style::default()
                    .fg(to_color(Rgb::INDIAN_RED))
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(to_color(Rgb::GOLDENROD))),
                Span::styled(
                    format!("{:03}", state.score()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(to_color(Rgb::INDIAN_RED))),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw("/"),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

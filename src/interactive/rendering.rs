//! TUI rendering with ratatui
//!
//! Draws the board snapshot reported by the session; no game logic lives here.

use super::app::{App, MessageStyle};
use crate::animation::Clock;
use crate::core::{GRID_SIZE, LetterState, NUM_ATTEMPTS};
use crate::game::{Banner, RowView, TileView};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const GRID_WIDTH: u16 = GRID_SIZE as u16 * (TILE_WIDTH + TILE_GAP) - TILE_GAP;
const GRID_HEIGHT: u16 = NUM_ATTEMPTS as u16 * TILE_HEIGHT;
const BUTTON_WIDTH: u16 = 18;

/// Jiggle offsets are in pixel-like units; a column is roughly this wide
const OFFSET_UNITS_PER_COLUMN: i32 = 3;

const CORRECT: Color = Color::Rgb(88, 163, 81);
const PRESENT: Color = Color::Rgb(181, 159, 59);
const ABSENT: Color = Color::Rgb(58, 58, 60);
const UNREVEALED: Color = Color::Rgb(128, 128, 128);

/// Screen regions of the game view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub grid: Rect,
    pub banner: Rect,
    pub button: Rect,
    pub messages: Rect,
    pub status: Rect,
}

/// Split the frame into regions; shared with mouse hit-testing
#[must_use]
pub fn layout(area: Rect) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(GRID_HEIGHT), // Board
            Constraint::Length(1),           // Banner
            Constraint::Length(3),           // Play again
            Constraint::Min(3),              // Messages
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    BoardLayout {
        header: chunks[0],
        grid: centered(chunks[1], GRID_WIDTH),
        banner: chunks[2],
        button: centered(chunks[3], BUTTON_WIDTH),
        messages: chunks[4],
        status: chunks[5],
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Main UI rendering function
pub fn ui<C: Clock, R: Rng>(f: &mut Frame, app: &App<'_, C, R>) {
    let regions = layout(f.area());

    render_header(f, regions.header);
    render_board(f, app, regions.grid);
    render_banner(f, app, regions.banner);
    if app.session.shows_restart() {
        render_button(f, regions.button);
    }
    render_messages(f, app, regions.messages);
    render_status(f, app, regions.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<C: Clock, R: Rng>(f: &mut Frame, app: &App<'_, C, R>, area: Rect) {
    for (row_index, row) in app.session.board().iter().enumerate() {
        render_row(f, row, row_index as u16, area);
    }
}

fn render_row(f: &mut Frame, row: &RowView, row_index: u16, grid: Rect) {
    let bounds = f.area();
    let shift = row.offset / OFFSET_UNITS_PER_COLUMN;

    for (col, tile) in row.tiles.iter().enumerate() {
        let x = i32::from(grid.x) + col as i32 * i32::from(TILE_WIDTH + TILE_GAP) + shift;
        let max_x = i32::from(bounds.right().saturating_sub(TILE_WIDTH));
        let rect = Rect {
            x: x.clamp(0, max_x.max(0)) as u16,
            y: grid.y + row_index * TILE_HEIGHT,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        }
        .intersection(bounds);

        render_tile(f, *tile, rect);
    }
}

fn render_tile(f: &mut Frame, tile: TileView, area: Rect) {
    match tile {
        TileView::Empty => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            f.render_widget(block, area);
        }
        TileView::Pending(letter) => {
            let paragraph = Paragraph::new(letter.to_string())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Gray)),
                );
            f.render_widget(paragraph, area);
        }
        TileView::Flipping {
            letter,
            state,
            scale,
            glyph_visible,
        } => {
            let height = (f64::from(area.height) * scale).round() as u16;
            let squashed = Rect {
                y: area.y + (area.height - height.min(area.height)) / 2,
                height: height.min(area.height),
                ..area
            };
            filled_tile(f, squashed, letter, state_color(state), glyph_visible);
        }
        TileView::Settled(result) => {
            filled_tile(f, area, result.letter, state_color(result.state), true);
        }
    }
}

fn filled_tile(f: &mut Frame, area: Rect, letter: char, color: Color, glyph_visible: bool) {
    if area.height == 0 {
        return;
    }

    let middle = area.height / 2;
    let lines: Vec<Line> = (0..area.height)
        .map(|line| {
            if line == middle && glyph_visible {
                Line::from(letter.to_string())
            } else {
                Line::default()
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).style(
        Style::default()
            .bg(color)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(paragraph, area);
}

const fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => CORRECT,
        LetterState::Present => PRESENT,
        LetterState::Absent => ABSENT,
        LetterState::Unevaluated => UNREVEALED,
    }
}

fn render_banner<C: Clock, R: Rng>(f: &mut Frame, app: &App<'_, C, R>, area: Rect) {
    let line = match app.session.banner() {
        Some(Banner::Won { attempts }) => Line::from(Span::styled(
            format!("Great! Solved in {attempts}/{NUM_ATTEMPTS}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(Banner::Lost { target }) => Line::from(Span::styled(
            target,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => return,
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_button(f: &mut Frame, area: Rect) {
    let button = Paragraph::new("Play Again")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(button, area);
}

fn render_messages<C: Clock, R: Rng>(f: &mut Frame, app: &App<'_, C, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<C: Clock, R: Rng>(f: &mut Frame, app: &App<'_, C, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let guess_text = format!(
        "Guess: {}/{NUM_ATTEMPTS}",
        (app.session.attempt() + 1).min(NUM_ATTEMPTS)
    );
    f.render_widget(
        Paragraph::new(guess_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.shows_restart() {
        "Enter: Play Again | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-R: Restart | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

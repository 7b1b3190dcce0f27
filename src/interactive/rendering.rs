//! TUI rendering with ratatui
//!
//! Letter grid, word chain, countdown and messages.

use super::app::{App, MessageStyle};
use crate::game::{GameState, Phase, StateStore};
use crate::output::formatters::format_timer;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: StateStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Selection
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let Ok(state) = app.state() else {
        let closed = Paragraph::new("No active game").alignment(Alignment::Center);
        f.render_widget(closed, chunks[1]);
        return;
    };

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Chain, timer, messages
        ])
        .split(chunks[1]);

    render_grid(f, state, app.side, main_chunks[0]);
    render_info_panel(f, app, state, main_chunks[1]);
    render_selection(f, state, chunks[2]);
    render_status(f, app, state, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔗 CHAIN REACTION")
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

fn render_grid(f: &mut Frame, state: &GameState, side: usize, area: Rect) {
    let selected = state.selected_letters();
    let lines: Vec<Line> = if side == 0 {
        Vec::new()
    } else {
        state
            .letter_grid()
            .chunks(side)
            .enumerate()
            .flat_map(|(row, letters)| {
                let spans: Vec<Span> = letters
                    .iter()
                    .enumerate()
                    .map(|(col, c)| {
                        let index = row * side + col;
                        let style = if selected.contains(&index) {
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                    })
                    .collect();
                [Line::from(spans), Line::from("")]
            })
            .collect()
    };

    let title = format!(" Base word: {} ", state.base_word().to_uppercase());
    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn render_info_panel<S: StateStore, R: Rng>(
    f: &mut Frame,
    app: &App<'_, S, R>,
    state: &GameState,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Timer
            Constraint::Percentage(50), // Chain
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_timer(f, state, app.duration, chunks[0]);
    render_chain(f, state, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_timer(f: &mut Frame, state: &GameState, duration: u32, area: Rect) {
    let ratio = if duration == 0 {
        0.0
    } else {
        (f64::from(state.timer()) / f64::from(duration)).clamp(0.0, 1.0)
    };
    let color = match state.timer() {
        0..=10 => Color::Red,
        11..=30 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format_timer(state.timer()));

    f.render_widget(gauge, area);
}

fn render_chain(f: &mut Frame, state: &GameState, area: Rect) {
    let items: Vec<ListItem> = state
        .word_chain()
        .iter()
        .rev()
        .map(|node| {
            let style = if node.is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let text = if node.id == 0 {
                format!("{} (base)", node.word.to_uppercase())
            } else {
                format!("{}. {} +{}", node.id, node.word.to_uppercase(), node.score)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let chain = List::new(items).block(
        Block::default()
            .title(format!(" Chain ({}) ", state.word_chain().len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(chain, area);
}

fn render_messages<S: StateStore, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
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

fn render_selection(f: &mut Frame, state: &GameState, area: Rect) {
    let (title, color) = match state.phase() {
        Phase::NotStarted => (" Press Enter to start ", Color::Cyan),
        Phase::Playing => (" Type letters | Enter: submit | Esc: clear ", Color::Yellow),
        Phase::GameOver => (" Game over | n: new game | q: quit ", Color::Green),
    };

    let input = Paragraph::new(state.selected_word().to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: StateStore, R: Rng>(
    f: &mut Frame,
    app: &App<'_, S, R>,
    state: &GameState,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", state.score())).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let streak =
        Paragraph::new(format!("Streak: {}", state.streak_count())).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let playable =
        Paragraph::new(format!("Playable: {}", app.playable_count())).alignment(Alignment::Center);
    f.render_widget(playable, chunks[2]);

    let help = Paragraph::new("Ctrl+C: Quit | Ctrl+R: Reset | Tab: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

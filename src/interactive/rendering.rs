//! TUI rendering with ratatui
//!
//! Board, keyboard, and message panels for the daily game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, ScoredGuess, alphabet};
use crate::game::{KeyStatus, MAX_GUESSES, key_statuses};
use crate::output::formatters::{GREEN_RGB, YELLOW_RGB};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Background for matched letters, same palette as the plain CLI rows.
const MATCHED_BG: Color = Color::Rgb(GREEN_RGB.0, GREEN_RGB.1, GREEN_RGB.2);
/// Background for present letters.
const PRESENT_BG: Color = Color::Rgb(YELLOW_RGB.0, YELLOW_RGB.1, YELLOW_RGB.2);

/// Rows of the Turkish Q keyboard, top to bottom.
const KEYBOARD_ROWS: [&str; 3] = ["ertyuıopğü", "asdfghjklşi", "zcvbnmöç"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Keyboard: 3 rows with spacing, plus borders
            Constraint::Min(5),    // Messages
        ])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🇹🇷 KELİMECE - Daily Turkish Word Game")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.session.target().len();
    let mut lines = vec![Line::default()];

    for scored in app.session.history() {
        lines.push(scored_line(scored));
        lines.push(Line::default());
    }

    let mut rows = app.session.history().len();

    if !app.session.is_over() {
        lines.push(input_line(app.session.input(), length));
        lines.push(Line::default());
        rows += 1;
    }

    while rows < MAX_GUESSES {
        lines.push(empty_line(length));
        lines.push(Line::default());
        rows += 1;
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn scored_line(scored: &ScoredGuess) -> Line<'static> {
    let mut spans = Vec::with_capacity(scored.len() * 2);
    for letter in scored.letters() {
        let style = match letter.status {
            LetterStatus::Matched => Style::default()
                .fg(Color::White)
                .bg(MATCHED_BG)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Present => Style::default()
                .fg(Color::Black)
                .bg(PRESENT_BG)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!(" {} ", alphabet::upper_char(letter.ch)),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn input_line(input: &str, length: usize) -> Line<'static> {
    let typed: Vec<char> = input.chars().collect();
    let mut spans = Vec::with_capacity(length * 2);

    for i in 0..length {
        let span = if let Some(&ch) = typed.get(i) {
            Span::styled(
                format!(" {} ", alphabet::upper_char(ch)),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(" · ", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn empty_line(length: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(length * 2);
    for _ in 0..length {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = key_statuses(app.session.history());

    let mut lines = vec![Line::default()];
    for row in KEYBOARD_ROWS {
        let mut spans = Vec::new();
        for ch in row.chars() {
            let style = match statuses.get(&ch).copied().unwrap_or_default() {
                KeyStatus::Matched => Style::default()
                    .fg(Color::White)
                    .bg(MATCHED_BG)
                    .add_modifier(Modifier::BOLD),
                KeyStatus::Present => Style::default()
                    .fg(Color::Black)
                    .bg(PRESENT_BG)
                    .add_modifier(Modifier::BOLD),
                KeyStatus::Absent => Style::default().fg(Color::DarkGray),
                KeyStatus::Unused => Style::default().fg(Color::White),
            };
            spans.push(Span::styled(ch.to_string(), style));
            spans.push(Span::raw(" "));
        }
        spans.pop();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let word_text = format!("Word: {} letters", app.session.target().len());
    let word = Paragraph::new(word_text).alignment(Alignment::Center);
    f.render_widget(word, chunks[0]);

    let guess_text = format!("Guess: {}/{MAX_GUESSES}", app.session.guesses_used());
    let guesses = Paragraph::new(guess_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let day_text = format!("Day: {}", app.day);
    let day = Paragraph::new(day_text).alignment(Alignment::Center);
    f.render_widget(day, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Typing => "q: Quit | Enter: Submit | Backspace: Erase",
        InputMode::GameOver => "q: Quit | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

//! TUI rendering with ratatui
//!
//! Hive, score gauge and word lists for the Spelling Bee game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::CENTER_INDEX;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Hive
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_hive(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn letter_span(letter: char, center: bool) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    if center {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    }
}

fn render_hive(f: &mut Frame, app: &App, area: Rect) {
    let hive = &app.hive;
    let gap = || Span::raw("   ");

    let content = vec![
        Line::from(""),
        Line::from(vec![
            letter_span(hive[0], false),
            gap(),
            letter_span(hive[1], false),
        ]),
        Line::from(""),
        Line::from(vec![
            letter_span(hive[2], false),
            gap(),
            letter_span(hive[CENTER_INDEX], true),
            gap(),
            letter_span(hive[4], false),
        ]),
        Line::from(""),
        Line::from(vec![
            letter_span(hive[5], false),
            gap(),
            letter_span(hive[6], false),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Hive ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Min(5),    // Words
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let percent = (session.progress() * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!(
            "{} / {} points",
            session.current_score(),
            session.maximum_score()
        ));

    f.render_widget(gauge, area);
}

/// Word panel lines: newest find first, missed words on top after a reveal
///
/// The panel does not scroll, so whatever overflows at the bottom is the
/// oldest.
fn word_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let puzzle = session.puzzle();

    let styled = |word: &str, found: bool| {
        let style = match (puzzle.is_pangram(word), found) {
            (true, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Yellow),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        Line::from(Span::styled(word.to_uppercase(), style))
    };

    let mut lines = Vec::new();
    if app.input_mode == InputMode::Revealed {
        lines.extend(
            session
                .remaining_words()
                .into_iter()
                .map(|word| styled(word, false)),
        );
        lines.push(Line::from(Span::styled(
            "── found ──",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.extend(
        session
            .found_words()
            .iter()
            .rev()
            .map(|word| styled(word, true)),
    );
    lines
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title = format!(
        " Words {}/{} ",
        session.found_words().len(),
        session.puzzle().words().len()
    );
    let paragraph = Paragraph::new(word_lines(app))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Complete => (
            " 🐝 QUEEN BEE! 🐝 | Press 'n' for new puzzle or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Revealed => (
            " Answers revealed | Press 'n' for new puzzle or 'q' to quit ",
            "",
            Color::Cyan,
        ),
        InputMode::Playing => (
            " Enter a word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let stats_text = format!(
        "Puzzles: {} | Completed: {}",
        app.stats.puzzles_played, app.stats.puzzles_completed
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let pangrams_text = format!("Pangrams found: {}", app.stats.pangrams_found);
    let pangrams = Paragraph::new(pangrams_text).alignment(Alignment::Center);
    f.render_widget(pangrams, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Enter: Submit | Space: Shuffle | TAB: Reveal | Esc: New | ^C: Quit",
        InputMode::Revealed | InputMode::Complete => "n: New Puzzle | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

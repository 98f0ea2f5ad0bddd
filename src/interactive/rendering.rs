//! TUI rendering with ratatui
//!
//! Visualizations for the drill interface.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
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

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Round history
            Constraint::Percentage(40), // Session info
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📖 WORD POWER - Spelling Drill")
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

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(12)
        .enumerate()
        .map(|(i, entry)| {
            let verdict = if entry.correct { "🟩" } else { "🟥" };
            let weight = entry.weight_change.map_or(String::new(), |change| {
                format!("  {:.2} -> {:.2}", change.old, change.new)
            });
            let content = format!(
                "{}: {} {} (guessed '{}', distance {}){}",
                app.history.len() - i,
                verdict,
                entry.revealed,
                entry.guess,
                entry.distance,
                weight
            );
            let style = if entry.correct {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" Rounds ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Accuracy gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_accuracy(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_accuracy(f: &mut Frame, app: &App, area: Rect) {
    let accuracy_pct = (app.accuracy() * 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Session Accuracy ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(accuracy_pct)
        .label(format!(
            "{}/{} correct | best streak {}",
            app.stats.correct, app.stats.rounds, app.stats.best_streak
        ));

    f.render_widget(gauge, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guess => (
            " Spell the hidden word | TAB: probe mode | ESC: skip word ",
            Color::Yellow,
        ),
        InputMode::Probe => (
            " Probe edit distance (round continues) | TAB/ESC: back to guessing ",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player_text = match &app.player {
        Some(player) => format!("Player: {player} (adaptive)"),
        None => "Player: anonymous (uniform)".to_string(),
    };
    let player = Paragraph::new(player_text).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Accuracy: {:.0}%",
        app.stats.rounds,
        app.accuracy() * 100.0
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let catalogue_text = format!("Catalogue: {} entries", app.trainer.catalogue().len());
    let catalogue = Paragraph::new(catalogue_text).alignment(Alignment::Center);
    f.render_widget(catalogue, chunks[2]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("Ctrl-R: reveal  "),
        Span::raw("Ctrl-C: quit"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

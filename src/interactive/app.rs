//! TUI application state and logic

use crate::core::translate_accents;
use crate::store::{self, SaveData};
use crate::trainer::{Trainer, WeightChange};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// Application state
pub struct App {
    pub trainer: Trainer,
    pub player: Option<String>,
    pub save_path: Option<PathBuf>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub history: Vec<RoundEntry>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a spelling; Enter ends the round
    Guess,
    /// Typing a probe; Enter shows the distance without ending the round
    Probe,
}

/// One finished round, for the history panel
#[derive(Debug, Clone)]
pub struct RoundEntry {
    pub revealed: String,
    pub guess: String,
    pub correct: bool,
    pub distance: usize,
    pub weight_change: Option<WeightChange>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds: usize,
    pub correct: usize,
    pub streak: usize,
    pub best_streak: usize,
}

impl App {
    #[must_use]
    pub fn new(trainer: Trainer, player: Option<String>, save_path: Option<PathBuf>) -> Self {
        Self {
            trainer,
            player,
            save_path,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! A hidden word is drawn each round; type its spelling."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Accent markers work here too: espan~ol becomes español.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            history: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Draw the first secret
    pub fn start(&mut self) {
        match self.trainer.next_secret(self.player.as_deref(), &mut rand::rng()) {
            Ok(secret) => {
                let flagged = secret.reveals_definition();
                self.announce_new_word(flagged);
            }
            Err(e) => {
                self.add_message(&format!("Cannot start: {e}"), MessageStyle::Error);
                self.should_quit = true;
            }
        }
    }

    /// Handle Enter in the current input mode
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if input.is_empty() {
            return;
        }
        match self.input_mode {
            InputMode::Guess => self.submit_guess(&input),
            InputMode::Probe => self.submit_probe(&input),
        }
    }

    fn submit_guess(&mut self, input: &str) {
        let normalized = translate_accents(input);
        let report =
            match self
                .trainer
                .resolve_guess(self.player.as_deref(), &normalized, &mut rand::rng())
            {
                Ok(report) => report,
                Err(e) => {
                    self.add_message(&format!("{e}"), MessageStyle::Error);
                    return;
                }
            };

        self.stats.rounds += 1;
        if report.correct {
            self.stats.correct += 1;
            self.stats.streak += 1;
            self.stats.best_streak = self.stats.best_streak.max(self.stats.streak);
            self.add_message(
                &format!("🟩 Correct! The word was: {}", report.revealed.raw()),
                MessageStyle::Success,
            );
        } else {
            self.stats.streak = 0;
            self.add_message(
                &format!(
                    "🟥 Miss (distance {}). The word was: {}",
                    report.distance,
                    report.revealed.raw()
                ),
                MessageStyle::Error,
            );
        }

        if let Some(change) = report.weight_change {
            self.add_message(
                &format!("weight change: {:.2} -> {:.2}", change.old, change.new),
                MessageStyle::Info,
            );
        }

        self.history.push(RoundEntry {
            revealed: report.revealed.raw().to_string(),
            guess: normalized,
            correct: report.correct,
            distance: report.distance,
            weight_change: report.weight_change,
        });

        self.autosave();
        self.announce_new_word(report.next.reveals_definition());
    }

    fn submit_probe(&mut self, input: &str) {
        let normalized = translate_accents(input);
        if let Some(distance) = self.trainer.probe(&normalized) {
            self.add_message(
                &format!("'{normalized}' is {distance} edit(s) from the closest spelling"),
                MessageStyle::Info,
            );
        } else {
            self.add_message("No word is active to probe against", MessageStyle::Error);
        }
    }

    /// Skip to a new word without answering
    pub fn skip_word(&mut self) {
        match self.trainer.skip(self.player.as_deref(), &mut rand::rng()) {
            Ok(report) => {
                if let Some(revealed) = report.revealed {
                    self.add_message(
                        &format!("Skipped. The word was: {}", revealed.raw()),
                        MessageStyle::Info,
                    );
                }
                self.announce_new_word(report.next.reveals_definition());
            }
            Err(e) => self.add_message(&format!("{e}"), MessageStyle::Error),
        }
    }

    /// Show the hidden word without ending the round
    pub fn reveal_word(&mut self) {
        if let Some(secret) = self.trainer.secret() {
            self.add_message(&format!("|| {} ||", secret.raw()), MessageStyle::Info);
        }
    }

    fn announce_new_word(&mut self, reveals_definition: bool) {
        self.add_message("🔄 A new hidden word has been drawn.", MessageStyle::Info);
        if reveals_definition {
            self.add_message(
                "(this one is marked for definition review)",
                MessageStyle::Info,
            );
        }
    }

    fn autosave(&mut self) {
        let Some(path) = self.save_path.clone() else {
            return;
        };
        let data = SaveData::from_state(
            self.trainer.aggression(),
            self.trainer.weights(),
            self.trainer.catalogue(),
        );
        if let Err(e) = store::save(&path, &data) {
            self.add_message(&format!("Could not save progress: {e}"), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the recent tail
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Session accuracy in [0, 1]
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.stats.rounds == 0 {
            0.0
        } else {
            self.stats.correct as f64 / self.stats.rounds as f64
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.reveal_word();
                }
                KeyCode::Esc => match app.input_mode {
                    InputMode::Guess => app.skip_word(),
                    InputMode::Probe => {
                        app.input_mode = InputMode::Guess;
                        app.input_buffer.clear();
                    }
                },
                KeyCode::Tab => {
                    app.input_buffer.clear();
                    app.input_mode = match app.input_mode {
                        InputMode::Guess => InputMode::Probe,
                        InputMode::Probe => InputMode::Guess,
                    };
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI application state and logic

use crate::core::alphabet;
use crate::game::{GameSession, SessionStore, SubmitOutcome, resume_or_start};
use crate::wordlists::WordList;
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

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub store: &'a dyn SessionStore,
    pub session: GameSession,
    pub length: usize,
    pub day: u64,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
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

impl<'a> App<'a> {
    /// Build the app, resuming today's saved session when one exists.
    ///
    /// The word of the day is fixed at construction; a game kept open
    /// past midnight keeps its word until the app is restarted.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list has no words of the requested
    /// length or the session store cannot be read.
    pub fn new(
        words: &'a WordList,
        store: &'a dyn SessionStore,
        length: usize,
        day: u64,
        fresh: bool,
    ) -> Result<Self> {
        let session = resume_or_start(store, words, length, day, fresh)?;

        let mut app = Self {
            words,
            store,
            session,
            length,
            day,
            messages: Vec::new(),
            input_mode: InputMode::Typing,
            should_quit: false,
        };

        app.add_message(
            &format!("Welcome! Guess the {length}-letter Turkish word of the day."),
            MessageStyle::Info,
        );
        app.add_message(
            "Type letters, Enter submits, Backspace deletes.",
            MessageStyle::Info,
        );

        if app.session.is_over() {
            app.input_mode = InputMode::GameOver;
            if app.session.finished() {
                app.add_message("Today's word is already solved.", MessageStyle::Success);
            } else {
                let answer = alphabet::upper(app.session.target().text());
                app.add_message(
                    &format!("Today's game is over. The answer was \"{answer}\""),
                    MessageStyle::Info,
                );
            }
            app.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else if !app.session.history().is_empty() {
            app.add_message(
                &format!("Resumed today's game at guess {}.", app.session.guesses_used() + 1),
                MessageStyle::Info,
            );
        }

        Ok(app)
    }

    /// Feed one typed character into the session.
    ///
    /// Characters outside the Turkish alphabet are dropped silently, the
    /// same way the game ignores unknown keys.
    pub fn type_letter(&mut self, ch: char) {
        self.session.push_letter(ch);
    }

    /// Remove the last typed letter.
    pub fn erase_letter(&mut self) {
        self.session.pop_letter();
    }

    /// Submit the current input and react to the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be saved.
    pub fn submit(&mut self) -> Result<()> {
        match self.session.submit(self.words) {
            SubmitOutcome::Won(_) => {
                self.store.save(self.length, &self.session)?;

                let answer = alphabet::upper(self.session.target().text());
                let celebration = match self.session.guesses_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };

                self.add_message(
                    &format!("You found the answer: \"{answer}\""),
                    MessageStyle::Success,
                );
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            SubmitOutcome::Scored(_) => {
                self.store.save(self.length, &self.session)?;

                if self.session.out_of_guesses() {
                    let answer = alphabet::upper(self.session.target().text());
                    self.add_message(
                        &format!("Out of guesses! The answer was \"{answer}\""),
                        MessageStyle::Error,
                    );
                    self.add_message(
                        "Press 'n' for a new game or 'q' to quit.",
                        MessageStyle::Info,
                    );
                    self.input_mode = InputMode::GameOver;
                }
            }
            SubmitOutcome::NotAWord => {
                self.add_message(
                    &format!("Word not found: \"{}\"", self.session.input()),
                    MessageStyle::Error,
                );
            }
            // Short input and closed sessions are silently ignored
            SubmitOutcome::Incomplete | SubmitOutcome::AlreadyFinished => {}
        }
        Ok(())
    }

    /// Throw the current session away and start over on today's word.
    ///
    /// # Errors
    ///
    /// Returns an error when the fresh session cannot be saved.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = resume_or_start(self.store, self.words, self.length, self.day, true)?;
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
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
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game()?;
                    }
                    _ => {
                        // After the game nothing else reacts
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // 'q' is not a Turkish letter, so it is free to quit on
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.type_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.erase_letter();
                    }
                    KeyCode::Enter => {
                        app.submit()?;
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Keep half-typed input across restarts
    app.store.save(app.length, &app.session)?;

    Ok(())
}

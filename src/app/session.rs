//! Interactive terminal session
//!
//! The session is the outermost coordination layer: it reads lines from
//! the terminal, decodes them into button presses, feeds the input
//! coordinator, and echoes the display after each line.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::app::coordinator::InputCoordinator;
use crate::config::{ConfigError, Settings};
use crate::domain::engine::EngineState;
use crate::input::{Button, Keymap};
use crate::ui::ScreenDisplay;

/// Application errors that can occur while running a session
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded or applied
    Config(ConfigError),
    /// Terminal I/O failed
    Io(io::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Config error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

/// Owns the coordinator and keymap for one terminal session
pub struct Session {
    coordinator: InputCoordinator<ScreenDisplay>,
    keymap: Keymap,
    show_state: bool,
}

impl Session {
    /// Resolves settings and builds a session
    ///
    /// # Arguments
    /// * `config_path` - Explicit config file, or `None` for the
    ///   platform default location
    pub fn bootstrap(config_path: Option<&Path>) -> Result<Self, AppError> {
        let settings = match config_path
            .map(Path::to_path_buf)
            .or_else(Settings::default_path)
        {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                Settings::load(&path)?
            }
            None => Settings::default(),
        };

        Ok(Self::from_settings(&settings))
    }

    /// Builds a session from resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            coordinator: InputCoordinator::new(ScreenDisplay::new()),
            keymap: settings.build_keymap(),
            show_state: settings.show_state,
        }
    }

    /// Feeds every button of `line` to the coordinator
    ///
    /// # Returns
    /// The display text after the whole line is consumed
    pub fn handle_line(&mut self, line: &str) -> &str {
        for button in self.keymap.tokenize(line) {
            match button {
                Button::Digit(digit) => self.coordinator.press_digit(digit),
                Button::Operation(symbol) => self.coordinator.press_operation(&symbol),
                Button::Unrecognized(ch) => {
                    debug!(key = %ch, "ignoring key with no keypad meaning");
                }
            }
        }

        self.coordinator.display_text()
    }

    fn prompt(&self) -> String {
        if !self.show_state {
            return "> ".to_string();
        }

        let state = match self.coordinator.engine_state() {
            EngineState::Empty => "empty",
            EngineState::HasValue => "value",
            EngineState::AwaitingSecondOperand => "awaiting operand",
        };
        format!("[{state}] > ")
    }

    /// Runs the interactive loop until EOF or an exit command
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("starting interactive session");

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut input = String::new();

        loop {
            write!(stdout, "{}", self.prompt())?;
            stdout.flush()?;

            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                break; // EOF
            }

            let line = input.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            let text = self.handle_line(line);
            writeln!(stdout, "{}", text)?;
        }

        info!("session finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_settings(&Settings::default())
    }

    #[test]
    fn addition_via_line_input() {
        let mut session = session();
        assert_eq!(session.handle_line("3 + 4 ="), "7");
    }

    #[test]
    fn aliases_work_end_to_end() {
        let mut session = session();
        // 16 r = √16; the alias comes from the built-in keymap
        assert_eq!(session.handle_line("16r"), "4");
    }

    #[test]
    fn state_carries_across_lines() {
        let mut session = session();
        session.handle_line("2 +");
        assert_eq!(session.handle_line("3 ="), "5");
    }

    #[test]
    fn chained_operators_across_lines() {
        let mut session = session();
        session.handle_line("2 + 3");
        assert_eq!(session.handle_line("x 4 ="), "12");
    }

    #[test]
    fn unrecognized_keys_do_not_disturb_the_calculation() {
        let mut session = session();
        assert_eq!(session.handle_line("3 q + 4 ="), "7");
    }

    #[test]
    fn division_by_zero_prints_inf() {
        let mut session = session();
        assert_eq!(session.handle_line("10 / 0 ="), "inf");
    }

    #[test]
    fn prompt_reflects_engine_state_when_enabled() {
        let settings = Settings {
            show_state: true,
            ..Settings::default()
        };
        let mut session = Session::from_settings(&settings);

        assert_eq!(session.prompt(), "[empty] > ");
        session.handle_line("2 +");
        assert_eq!(session.prompt(), "[awaiting operand] > ");
        session.handle_line("3 =");
        assert_eq!(session.prompt(), "[value] > ");
    }

    #[test]
    fn plain_prompt_by_default() {
        let session = session();
        assert_eq!(session.prompt(), "> ");
    }
}

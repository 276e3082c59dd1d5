//! Input coordinator between the keypad and the arithmetic engine
//!
//! The coordinator owns the typing flag: while the user is composing a
//! number the display text is the in-progress operand; an operation
//! press commits that text to the engine and renders the engine's
//! result back onto the display.

use tracing::warn;

use crate::domain::engine::{CalcEngine, EngineState};
use crate::ui::display::DisplaySurface;

/// Mediates between button presses, the engine, and the display
#[derive(Debug)]
pub struct InputCoordinator<D: DisplaySurface> {
    engine: CalcEngine,
    display: D,
    /// True while digits of an uncommitted operand are being composed
    typing: bool,
}

impl<D: DisplaySurface> InputCoordinator<D> {
    /// Creates a coordinator rendering into `display`
    pub fn new(display: D) -> Self {
        Self {
            engine: CalcEngine::new(),
            display,
            typing: false,
        }
    }

    /// Handles a digit or decimal point press
    ///
    /// While typing, the character is appended to the in-progress
    /// operand text as-is; a fresh press starts a new operand. There is
    /// no second-decimal-point or leading-zero rejection, so free-form
    /// sequences like `1.2.3` reach the display (see DESIGN.md).
    pub fn press_digit(&mut self, digit: char) {
        if self.typing {
            let mut text = self.display.text().to_string();
            text.push(digit);
            self.display.set_text(&text);
        } else {
            self.display.set_text(&digit.to_string());
            self.typing = true;
        }
    }

    /// Handles an operation symbol press
    ///
    /// Commits the in-progress operand first when one is being typed,
    /// then forwards the symbol to the engine, then renders a defined
    /// result back to the display as its decimal string form.
    pub fn press_operation(&mut self, symbol: &str) {
        if self.typing {
            match self.display.text().parse::<f64>() {
                Ok(operand) => self.engine.set_operand(operand),
                // Free-form entry can leave text like "1.2.3" on the
                // display; skip the commit instead of tearing down the
                // session (see DESIGN.md).
                Err(_) => warn!(text = %self.display.text(), "operand text does not parse, commit skipped"),
            }
            self.typing = false;
        }

        self.engine.perform_operation(symbol);

        if let Some(result) = self.engine.result() {
            self.display.set_text(&result.to_string());
        }
    }

    /// Current display text
    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    /// Engine state view, for prompts and logging
    pub fn engine_state(&self) -> EngineState {
        self.engine.state()
    }

    /// Engine result, when one is displayable
    pub fn result(&self) -> Option<f64> {
        self.engine.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::display::ScreenDisplay;

    fn coordinator() -> InputCoordinator<ScreenDisplay> {
        InputCoordinator::new(ScreenDisplay::new())
    }

    fn press_all(coordinator: &mut InputCoordinator<ScreenDisplay>, digits: &str) {
        for digit in digits.chars() {
            coordinator.press_digit(digit);
        }
    }

    #[test]
    fn digits_accumulate_while_typing() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "12.5");
        assert_eq!(coordinator.display_text(), "12.5");
    }

    #[test]
    fn first_digit_after_commit_starts_a_new_operand() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "12");
        coordinator.press_operation("+");
        press_all(&mut coordinator, "34");

        // The display must show the fresh operand, not "1234"
        assert_eq!(coordinator.display_text(), "34");
    }

    #[test]
    fn operation_press_commits_and_renders_result() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "3");
        coordinator.press_operation("+");
        press_all(&mut coordinator, "4");
        coordinator.press_operation("=");

        assert_eq!(coordinator.result(), Some(7.0));
        assert_eq!(coordinator.display_text(), "7");
    }

    #[test]
    fn constant_press_replaces_typed_operand() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "5");
        coordinator.press_operation("π");
        assert_eq!(coordinator.result(), Some(std::f64::consts::PI));
    }

    #[test]
    fn division_by_zero_renders_inf() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "10");
        coordinator.press_operation("÷");
        press_all(&mut coordinator, "0");
        coordinator.press_operation("=");

        assert_eq!(coordinator.display_text(), "inf");
    }

    #[test]
    fn display_keeps_operand_text_while_awaiting_second_operand() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "2");
        coordinator.press_operation("+");

        // The engine has no result while the pair is pending; the
        // display is left showing the committed first operand.
        assert_eq!(coordinator.result(), None);
        assert_eq!(coordinator.display_text(), "2");
        assert_eq!(coordinator.engine_state(), EngineState::AwaitingSecondOperand);
    }

    #[test]
    fn free_form_text_skips_the_commit() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "1.2.3");
        assert_eq!(coordinator.display_text(), "1.2.3");

        coordinator.press_operation("+");

        // Nothing was committed, so the operator was dropped too
        assert_eq!(coordinator.result(), None);
        assert_eq!(coordinator.engine_state(), EngineState::Empty);
    }

    #[test]
    fn chained_operators_follow_replacement_semantics() {
        let mut coordinator = coordinator();
        press_all(&mut coordinator, "2");
        coordinator.press_operation("+");
        press_all(&mut coordinator, "3");
        coordinator.press_operation("×");
        press_all(&mut coordinator, "4");
        coordinator.press_operation("=");

        assert_eq!(coordinator.display_text(), "12");
    }
}

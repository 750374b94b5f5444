//! Session controller and coordination layer
//!
//! The controller sits between the input surface and the state engine: it
//! takes classified key events, runs exactly one engine operation per
//! event, and exposes the display text the collaborator should render
//! afterwards. Each event runs to completion before the next is accepted;
//! there is no queueing and no concurrency.

use crate::app::state::{Calculator, EngineState};
use crate::input::keyboard::KeyEvent;

/// Outcome of dispatching one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The engine ran one operation; render the display text again
    Handled,
    /// The session should end
    Quit,
}

/// Drives a calculator engine from classified key events
#[derive(Debug, Default)]
pub struct SessionController {
    engine: Calculator,
}

impl SessionController {
    /// Creates a controller around the given engine
    pub fn new(engine: Calculator) -> Self {
        Self { engine }
    }

    /// The text to render verbatim after the last dispatched event
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Read access to the underlying engine
    pub fn engine(&self) -> &Calculator {
        &self.engine
    }

    /// Dispatches one classified key event to its engine operation
    pub fn dispatch(&mut self, event: KeyEvent) -> Dispatch {
        match event {
            KeyEvent::Digit(digit) => self.engine.input_digit(digit),
            KeyEvent::Point => self.engine.input_point(),
            KeyEvent::Operator(op) => self.engine.set_operator(op),
            KeyEvent::Equals => self.engine.calculate(),
            KeyEvent::Percent => self.engine.percent(),
            KeyEvent::SquareRoot => self.engine.sqrt(),
            KeyEvent::Delete => self.engine.delete_last(),
            KeyEvent::Clear => self.engine.clear(),
            KeyEvent::MemoryAdd => self.engine.memory_add(),
            KeyEvent::MemorySubtract => self.engine.memory_subtract(),
            KeyEvent::MemoryRecall => self.engine.memory_recall(),
            KeyEvent::MemoryClear => self.engine.memory_clear(),
            KeyEvent::Quit => return Dispatch::Quit,
        }
        tracing::debug!(
            ?event,
            display = self.engine.display(),
            state = ?self.engine.state(),
            "dispatched key event"
        );
        Dispatch::Handled
    }

    /// Classifies and dispatches every character of a keystroke string
    ///
    /// Spaces and tabs between keystrokes are skipped; unmapped characters
    /// are logged and ignored rather than disturbing the session.
    pub fn feed_keys(&mut self, keys: &str) -> Dispatch {
        for raw in keys.chars() {
            if raw == ' ' || raw == '\t' {
                continue;
            }
            match KeyEvent::from_char(raw) {
                Ok(event) => {
                    if self.dispatch(event) == Dispatch::Quit {
                        return Dispatch::Quit;
                    }
                }
                Err(err) => tracing::trace!(%err, "ignoring key"),
            }
        }
        Dispatch::Handled
    }

    /// Current coarse engine state
    pub fn state(&self) -> EngineState {
        self.engine.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &str) -> SessionController {
        let mut session = SessionController::default();
        session.feed_keys(keys);
        session
    }

    #[test]
    fn keystrokes_drive_a_full_calculation() {
        assert_eq!(run("2+3=").display(), "5");
        assert_eq!(run("2+3=*4=").display(), "20");
        assert_eq!(run("10/4=").display(), "2.5");
    }

    #[test]
    fn spaces_between_keystrokes_are_skipped() {
        assert_eq!(run("2 + 3 =").display(), "5");
    }

    #[test]
    fn divide_by_zero_then_fresh_digit() {
        let mut session = run("8/0=");
        assert_eq!(session.display(), "Cannot divide by zero");
        session.feed_keys("5");
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn percent_keystrokes() {
        assert_eq!(run("50+10%").display(), "55");
        assert_eq!(run("25%").display(), "0.25");
    }

    #[test]
    fn sqrt_keystroke() {
        assert_eq!(run("16s").display(), "4");
        assert_eq!(run("0-1=s").display(), "Error");
    }

    #[test]
    fn precision_bound_end_to_end() {
        assert_eq!(run(".1+.2=").display(), "0.3");
    }

    #[test]
    fn delete_and_clear_keystrokes() {
        assert_eq!(run("12\u{8}").display(), "1");
        assert_eq!(run("12\u{8}\u{8}").display(), "0");
        assert_eq!(run("12+34c").display(), "0");
    }

    #[test]
    fn unmapped_characters_are_ignored() {
        assert_eq!(run("2#+@3=!").display(), "5");
    }

    #[test]
    fn memory_keystrokes() {
        let session = run("5m c 3 + r =");
        assert_eq!(session.display(), "8");
        assert_eq!(session.engine().memory(), 5.0);
    }

    #[test]
    fn quit_stops_the_feed() {
        let mut session = SessionController::default();
        let flow = session.feed_keys("2+2q=");
        assert_eq!(flow, Dispatch::Quit);
        // The trailing equals was never dispatched.
        assert_eq!(session.display(), "2");
        assert_eq!(session.state(), EngineState::AwaitingOperand);
    }

    #[test]
    fn enter_acts_as_equals() {
        assert_eq!(run("2+3\n").display(), "5");
    }
}

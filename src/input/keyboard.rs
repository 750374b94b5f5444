//! Character classification for calculator input
//!
//! Maps one raw character from the terminal surface to one classified key
//! event. The mapping is the input surface's whole responsibility: the
//! state engine only ever sees already-classified events, so nothing
//! downstream needs to know which physical key produced them.
//!
//! Letter keys are case insensitive. Control characters cover the usual
//! terminal encodings: Enter doubles as equals, Backspace and DEL both
//! delete, Escape clears.

use crate::domain::operator::Operator;

/// Errors that can occur during input classification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("no calculator mapping for key {0:?}")]
    Unmapped(char),
}

/// Key events the calculator session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Digit key, `'0'` through `'9'`
    Digit(char),
    /// Decimal point
    Point,
    /// Binary operator key
    Operator(Operator),
    /// Equals, also produced by Enter
    Equals,
    /// Percentage key
    Percent,
    /// Square root key
    SquareRoot,
    /// Backspace/DEL, removes the last entered character
    Delete,
    /// Clear key, also produced by Escape
    Clear,
    /// Adds the displayed value to memory
    MemoryAdd,
    /// Subtracts the displayed value from memory
    MemorySubtract,
    /// Recalls the memory value onto the display
    MemoryRecall,
    /// Zeroes the memory accumulator
    MemoryClear,
    /// Ends the interactive session; never reaches the engine
    Quit,
}

impl KeyEvent {
    /// Classifies a raw character into a key event
    ///
    /// # Arguments
    /// * `raw` - Character as read from the terminal
    ///
    /// # Returns
    /// The classified event, or [`KeyError::Unmapped`] for characters with
    /// no calculator meaning
    pub fn from_char(raw: char) -> Result<Self, KeyError> {
        let key = raw.to_ascii_lowercase();
        match key {
            '0'..='9' => Ok(Self::Digit(key)),
            '.' => Ok(Self::Point),
            '+' | '-' | '*' | '/' => Operator::from_symbol(key)
                .map(Self::Operator)
                .ok_or(KeyError::Unmapped(raw)),
            '=' | '\r' | '\n' => Ok(Self::Equals),
            '%' => Ok(Self::Percent),
            's' => Ok(Self::SquareRoot),
            '\u{8}' | '\u{7f}' => Ok(Self::Delete),
            'c' | '\u{1b}' => Ok(Self::Clear),
            'm' => Ok(Self::MemoryAdd),
            'n' => Ok(Self::MemorySubtract),
            'r' => Ok(Self::MemoryRecall),
            'x' => Ok(Self::MemoryClear),
            'q' => Ok(Self::Quit),
            _ => Err(KeyError::Unmapped(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_point() {
        assert_eq!(KeyEvent::from_char('0'), Ok(KeyEvent::Digit('0')));
        assert_eq!(KeyEvent::from_char('9'), Ok(KeyEvent::Digit('9')));
        assert_eq!(KeyEvent::from_char('.'), Ok(KeyEvent::Point));
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(
            KeyEvent::from_char('+'),
            Ok(KeyEvent::Operator(Operator::Add))
        );
        assert_eq!(
            KeyEvent::from_char('-'),
            Ok(KeyEvent::Operator(Operator::Subtract))
        );
        assert_eq!(
            KeyEvent::from_char('*'),
            Ok(KeyEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            KeyEvent::from_char('/'),
            Ok(KeyEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn enter_doubles_as_equals() {
        assert_eq!(KeyEvent::from_char('='), Ok(KeyEvent::Equals));
        assert_eq!(KeyEvent::from_char('\r'), Ok(KeyEvent::Equals));
        assert_eq!(KeyEvent::from_char('\n'), Ok(KeyEvent::Equals));
    }

    #[test]
    fn control_characters() {
        assert_eq!(KeyEvent::from_char('\u{8}'), Ok(KeyEvent::Delete));
        assert_eq!(KeyEvent::from_char('\u{7f}'), Ok(KeyEvent::Delete));
        assert_eq!(KeyEvent::from_char('\u{1b}'), Ok(KeyEvent::Clear));
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(KeyEvent::from_char('c'), Ok(KeyEvent::Clear));
        assert_eq!(KeyEvent::from_char('C'), Ok(KeyEvent::Clear));
        assert_eq!(KeyEvent::from_char('s'), Ok(KeyEvent::SquareRoot));
        assert_eq!(KeyEvent::from_char('S'), Ok(KeyEvent::SquareRoot));
        assert_eq!(KeyEvent::from_char('Q'), Ok(KeyEvent::Quit));
    }

    #[test]
    fn memory_keys() {
        assert_eq!(KeyEvent::from_char('m'), Ok(KeyEvent::MemoryAdd));
        assert_eq!(KeyEvent::from_char('n'), Ok(KeyEvent::MemorySubtract));
        assert_eq!(KeyEvent::from_char('r'), Ok(KeyEvent::MemoryRecall));
        assert_eq!(KeyEvent::from_char('x'), Ok(KeyEvent::MemoryClear));
    }

    #[test]
    fn unmapped_keys_error() {
        assert_eq!(KeyEvent::from_char('#'), Err(KeyError::Unmapped('#')));
        assert_eq!(KeyEvent::from_char('a'), Err(KeyError::Unmapped('a')));
        assert_eq!(KeyEvent::from_char(' '), Err(KeyError::Unmapped(' ')));
    }
}

pub mod terminal;

pub use terminal::{TerminalDisplay, KEY_REFERENCE};

//! Input classification layer
//!
//! Turns raw characters into classified calculator key events. Raw input
//! capture itself belongs to the terminal collaborator.

pub mod keyboard;

pub use keyboard::{KeyError, KeyEvent};

//! Configuration module for tactile-calc
//!
//! Concentrates the user-facing knobs shared between the command line and
//! the rest of the application. Values are validated at the boundary and
//! clamped before they reach the domain layer.

pub mod display;

pub use display::{DisplayConfig, DisplayConfigError};

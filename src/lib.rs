//! tactile-calc: keystroke-driven arithmetic evaluator
//!
//! The crate splits into layers that never reach around each other:
//! `domain` holds pure calculator logic (operator set, display formatting),
//! `app` owns the state machine and event dispatch, `input` classifies raw
//! characters into key events, `ui` renders display text to the terminal,
//! and `config` validates the user-facing knobs.
//!
//! Evaluation is strictly left to right with at most one staged operator;
//! there is no expression parsing and no precedence.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::controller::{Dispatch, SessionController};
pub use app::state::{Calculator, EngineState};
pub use domain::operator::Operator;

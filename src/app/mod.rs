//! Application orchestration layer
//!
//! This module coordinates between input, domain, and UI layers.
//! It owns the calculator state machine and event dispatch.

pub mod controller;
pub mod state;

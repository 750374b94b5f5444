//! tactile-calc entry point
//!
//! Two modes: an interactive session that classifies every character of
//! each input line as a keystroke, and a one-shot mode that evaluates a
//! keystroke string passed on the command line and prints the final
//! display text.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tactile_calc::app::controller::{Dispatch, SessionController};
use tactile_calc::app::state::Calculator;
use tactile_calc::config::display::DisplayConfig;
use tactile_calc::ui::terminal::{TerminalDisplay, KEY_REFERENCE};

#[derive(Debug, Parser)]
#[command(name = "tactile-calc", about = "Keystroke-driven arithmetic evaluator")]
struct Args {
    /// Keystroke string to evaluate in one shot, e.g. "2+3="
    keys: Option<String>,

    /// Significant decimal digits used when rendering results
    #[arg(long, default_value_t = DisplayConfig::DEFAULT_SIGNIFICANT_DIGITS)]
    precision: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = DisplayConfig::new(args.precision)?;
    let formatter = config.build_formatter()?;
    let mut session = SessionController::new(Calculator::with_formatter(formatter));

    match args.keys {
        Some(keys) => {
            session.feed_keys(&keys);
            println!("{}", session.display());
            Ok(())
        }
        None => run_interactive(&mut session),
    }
}

fn run_interactive(session: &mut SessionController) -> Result<()> {
    let stdin = io::stdin();
    let mut display = TerminalDisplay::new(io::stdout());

    println!("{KEY_REFERENCE}");
    display.render(session.display())?;

    for line in stdin.lock().lines() {
        let line = line?;
        if session.feed_keys(&line) == Dispatch::Quit {
            break;
        }
        display.render(session.display())?;
    }
    Ok(())
}

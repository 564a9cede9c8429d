//! Console front end: runs the demo against any writer and waits for a key.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::info;

use crate::config::DemoConfig;
use crate::duck::MallardDuck;
use crate::error::{DemoError, Result};
use crate::roster;

/// Dispatches the demo flock to `out`, then narrows the duck back out of it.
///
/// Returns the number of lines written.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<usize> {
    let (human, student) = roster::grounded();
    info!(name = human.name(), "human stays on the ground");
    info!(
        name = student.name(),
        discipline = student.discipline(),
        "student stays on the ground"
    );

    let flock = roster::demo_flock(config);
    let mut written = flock.dispatch(out)?;
    info!(count = written, "flock dispatched");

    // The duck is the second to take off.
    if let Some(duck) = flock.narrow_at::<MallardDuck>(1) {
        writeln!(out, "Wing-span of Mallard Duck = {}", duck.wing_span())?;
        written += 1;
    }

    Ok(written)
}

/// Warns about each config problem the demo recovered from.
pub fn report_problems<W: Write>(problems: &[DemoError], out: &mut W) -> io::Result<()> {
    for problem in problems {
        writeln!(out, "{} {}", "warning:".yellow().bold(), problem.to_string().yellow())?;
    }
    Ok(())
}

/// Blocks until a single key press. The terminal is restored before returning.
pub fn wait_for_key() -> Result<()> {
    terminal::enable_raw_mode()?;
    let outcome = read_key_press();
    first_failure(outcome, terminal::disable_raw_mode())
}

/// A failed read wins over a failed terminal restore.
fn first_failure(outcome: Result<()>, restored: io::Result<()>) -> Result<()> {
    outcome?;
    restored?;
    Ok(())
}

fn read_key_press() -> Result<()> {
    loop {
        // Some terminals also report Release/Repeat
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

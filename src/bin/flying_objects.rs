use std::io::{self, IsTerminal};
use std::process::ExitCode;

use colored::Colorize;
use flying_objects::config::DEFAULT_CONFIG_FILE;
use flying_objects::{console, DemoConfig};
use tracing::Level;

fn main() -> ExitCode {
    let (config, problems) = DemoConfig::load_lenient(DEFAULT_CONFIG_FILE);
    // Best effort: a closed stderr must not stop the demo
    let _ = console::report_problems(&problems, &mut io::stderr());

    tracing_subscriber::fmt()
        .with_max_level(config.level().unwrap_or(Level::WARN))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &DemoConfig) -> flying_objects::Result<()> {
    let mut stdout = io::stdout().lock();
    console::run(config, &mut stdout)?;
    drop(stdout);

    if config.wait_for_key && io::stdin().is_terminal() {
        eprintln!("{}", "Press any key to exit...".dimmed());
        console::wait_for_key()?;
    }

    Ok(())
}

use clap::Parser;
use shelf::api::LibraryApi;
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::input::Prompter;
use shelf::logging;
use shelf::menu::{MainMenu, Menu, Session};
use shelf::store::memory::Library;
use std::io::Write;
use std::num::NonZeroUsize;
use tracing::info;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    logging::init(&logging::effective_level(&config.log_level, cli.verbose))?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let max_attempts = cli
        .max_attempts
        .map(NonZeroUsize::get)
        .or(config.max_attempts);

    let stdin = std::io::stdin();
    let input = Prompter::new(stdin.lock(), std::io::stdout()).with_max_attempts(max_attempts);
    let mut session = Session::new(LibraryApi::new(Library::new()), input);

    info!(?max_attempts, "session started");
    match MainMenu.run(&mut session) {
        Ok(()) => {}
        Err(ShelfError::EndOfInput) => {
            writeln!(session.out())?;
            info!("input closed");
        }
        Err(e) => return Err(e),
    }
    info!("session ended");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ShelfConfig> {
    match cli.config.clone().or_else(ShelfConfig::default_path) {
        Some(path) => ShelfConfig::load(path),
        None => Ok(ShelfConfig::default()),
    }
}

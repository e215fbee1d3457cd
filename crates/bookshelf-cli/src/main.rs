//! Bookshelf CLI - a menu-driven terminal catalog of book records.
//!
//! This is the interactive surface over the core library: argument
//! parsing, catalog path resolution, terminal prompts and rendering.
//! The navigation itself lives in `bookshelf_core::session`.

mod cli;
mod config;
mod constants;
mod ui;

use clap::Parser;

use bookshelf_core::{CatalogStore, JsonFileBackend, Session};
use cli::Cli;
use constants::exit_codes;
use ui::prompt::TerminalIo;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Ctrl-C during an input wait exits 1, same as a closed input stream.
    ctrlc::set_handler(|| std::process::exit(exit_codes::FAILURE))?;

    let catalog_path = config::resolve_catalog_path(cli.catalog)?;
    let store = CatalogStore::new(JsonFileBackend::new(catalog_path));
    let mut io = TerminalIo::from_env(cli.no_color);
    Session::new(&mut io, store).run()
}

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use bookshelf_core::VERSION;

/// Bookshelf - a menu-driven terminal catalog of book records
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the catalog JSON file
    #[arg(short = 'c', long, env = "BOOKSHELF_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

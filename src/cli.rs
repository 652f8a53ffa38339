use clap::Parser;

use crate::console::ConsoleOptions;

/// Play chess on the terminal with full move-legality checking.
#[derive(Debug, Parser)]
#[command(name = "chess-rules", version, about)]
pub struct Cli {
    /// Seed for the `random` command, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print only the status line after each move
    #[arg(short, long)]
    pub quiet: bool,

    /// Draw pieces with chess glyphs instead of letters
    #[arg(short, long)]
    pub unicode: bool,
}

impl Cli {
    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            seed: self.seed,
            quiet: self.quiet,
            unicode: self.unicode,
        }
    }
}

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use chess_rules::cli::Cli;
use chess_rules::console::ConsoleHandler;

fn main() -> Result<()> {
    let env = Env::default().filter_or("CHESS_RULES_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let mut console = ConsoleHandler::new(cli.console_options());
    console.run()
}

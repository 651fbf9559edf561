//! Tehran Rules - truck transportation regulations lookup for Tehran

use clap::Parser;
use tehran_rules::cli::Cli;
use tehran_rules::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

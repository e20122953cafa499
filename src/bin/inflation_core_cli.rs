use std::process;

use clap::Parser;

use inflation_core::cli::{self, Cli};

fn main() {
    inflation_core::init();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

//! Local Account CLI

use std::{
    io::{self, Write},
    process,
};

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod config;

pub fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = config::logging::init_subscriber(&cli.logging) {
        eprintln!("failed to initialize logging: {error}");
        process::exit(1);
    }

    let mut stdout = io::stdout().lock();

    if let Err(error) = cli.run(&mut io::stdin().lock(), &mut stdout) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = stdout.flush() {
        eprintln!("failed to write output: {error}");
        process::exit(1);
    }
}

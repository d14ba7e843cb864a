use clap::Parser;
use colored::Colorize;
use csvquery::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::run(args) {
        eprintln!("{} {}", "Error:".red().bold(), error);
        process::exit(1);
    }
}

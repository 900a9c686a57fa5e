//! CLI module for the password generator
//!
//! - `serve`: HTTP API server
//! - `generate`: print passwords without starting the server

pub mod generate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Password Generator - randomized passwords with tag storage
#[derive(Parser)]
#[command(name = "password-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Generate passwords locally and print them
    Generate(generate::GenerateArgs),
}

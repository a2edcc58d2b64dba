//! CLI module - Command-line interface for anigate
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// anigate - GraphQL gateway for AniList media lookups
#[derive(Debug, Parser)]
#[command(name = "anigate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Run the GraphQL server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Run the Media query once against AniList and print the result
    #[command(alias = "q")]
    Query {
        /// Episode count to match
        #[arg(long, allow_negative_numbers = true)]
        episodes: Option<i32>,
    },

    /// Create default config file
    Init,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

//! CLI module for the portfolio assistant

pub mod serve;

use clap::{Parser, Subcommand};

/// Portfolio Assistant - RAG chatbot API for a portfolio website
#[derive(Parser)]
#[command(name = "portfolio-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest the knowledge bases and run the API server
    Serve,
}

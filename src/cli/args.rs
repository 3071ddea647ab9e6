//! Command-line argument parsing for ollama-conn
//!
//! Provides clap-based CLI with one subcommand per remote verb.

use crate::connection::ModelAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ollama-conn - Query and manage models on an Ollama server
#[derive(Parser, Debug)]
#[command(name = "ollama-conn")]
#[command(version)]
#[command(about = "Query and manage models on an Ollama server", long_about = None)]
pub struct Args {
    /// Ollama base address (must end with '/')
    #[arg(short, long, global = true)]
    pub address: Option<String>,

    /// Exit when the server cannot be validated
    #[arg(long, global = true)]
    pub strict: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -v (debug), -vv (trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the server version
    Version,

    /// List installed models
    List,

    /// List models currently loaded in memory
    Ps,

    /// Show model information as JSON
    Show {
        /// Model name
        model: String,
    },

    /// Pull, delete or load a model
    Action {
        /// One of: pull, delete, load
        action: ModelAction,

        /// Model name
        model: String,
    },

    /// Generate a completion (non-streaming)
    Generate {
        /// Model name
        model: String,

        /// Prompt text
        prompt: String,
    },
}

impl Args {
    /// Tracing filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

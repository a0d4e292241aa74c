//! # CLI Argument Definitions
//!
//! Subcommands of `cargo xtask`, parsed with `clap`.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Amazing Numbers workspace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'anum-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'anum-' if missing)
        project: Option<String>,
    },
    /// Run a binary (the shell by default)
    Run {
        /// Crate to run (auto-prefixes with 'anum-' if missing)
        #[arg(default_value = "shell")]
        project: String,
        /// Arguments passed through to the program
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Run criterion benches (the classifier by default)
    Bench {
        /// Crate to bench (auto-prefixes with 'anum-' if missing)
        #[arg(default_value = "classifier")]
        project: String,
        /// Only run benchmarks whose id contains this text
        #[arg(long)]
        filter: Option<String>,
    },
}

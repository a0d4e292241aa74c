//! # Amazing Numbers Shell
//!
//! A line-oriented front end over the [`anum`] facade: read a request, answer
//! it, repeat until the user enters `0` or input ends.
//!
//! ## Example
//! ```rust
//! use anum_shell::Shell;
//!
//! let shell = Shell::builder().greeting(false).build();
//! let mut out = Vec::new();
//! shell.run("5 2\n0\n".as_bytes(), &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("5 is odd"));
//! assert!(text.ends_with("Goodbye!\n"));
//! ```

pub mod cli;
pub mod logging;
pub mod render;

use crate::render::{Format, Renderer};
use anum::domain::config::ShellConfig;
use anum::executor::{Execution, Executor, SearchScan};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const GREETING: &str = "Welcome to Amazing Numbers!";

pub const HELP: &str = "Supported requests:
- enter a natural number to know its properties;
- enter two natural numbers to obtain the properties of the list:
  * the first parameter represents a starting number;
  * the second parameter shows how many consecutive numbers are to be processed;
- two natural numbers and properties to search for;
- a property preceded by minus must not be present in numbers;
- separate the parameters with one space;
- enter 0 to exit.";

pub const PROMPT: &str = "Enter a request: ";

pub const FAREWELL: &str = "Goodbye!";

/// How a single request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Answered; keep reading.
    Answered,
    /// The request was rejected with an error message.
    Rejected,
    /// The user asked to leave.
    Exit,
}

/// A fluent builder for configuring the [`Shell`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Clone)]
pub struct ShellBuilder {
    config: ShellConfig,
    format: Format,
    greeting: bool,
}

impl ShellBuilder {
    pub fn config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Print the welcome banner before the first prompt. On by default for text output.
    pub const fn greeting(mut self, enabled: bool) -> Self {
        self.greeting = enabled;
        self
    }

    pub fn build(self) -> Shell {
        let interactive = self.format == Format::Text;
        Shell {
            executor: Executor::from(&self.config.scan),
            renderer: Renderer::new(self.format, self.config.display.width),
            greeting: self.greeting && interactive,
            prompt: interactive,
        }
    }
}

/// Reads requests, executes them and renders the answers.
#[derive(Debug, Clone)]
pub struct Shell {
    executor: Executor,
    renderer: Renderer,
    greeting: bool,
    prompt: bool,
}

impl Shell {
    pub fn builder() -> ShellBuilder {
        ShellBuilder { config: ShellConfig::default(), format: Format::Text, greeting: true }
    }

    /// Runs the request loop until `0` or end of input.
    ///
    /// Request errors are rendered and the loop continues.
    ///
    /// # Errors
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&self, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        if self.greeting {
            writeln!(out, "{GREETING}\n\n{HELP}")?;
        }

        let mut line = String::new();
        let mut handled = 0_u64;
        loop {
            if self.prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!(handled, "Input closed");
                if self.prompt {
                    writeln!(out)?;
                }
                return out.flush();
            }

            handled += 1;
            if self.respond(line.trim_end_matches(['\r', '\n']), &mut out)? == Outcome::Exit {
                info!(handled, "Session ended");
                return out.flush();
            }
        }
    }

    /// Answers one request line.
    ///
    /// # Errors
    /// Returns an error only when writing output fails.
    pub fn respond(&self, line: &str, out: &mut impl Write) -> io::Result<Outcome> {
        if line.trim().eq_ignore_ascii_case("help") {
            writeln!(out, "{HELP}\n")?;
            return Ok(Outcome::Answered);
        }

        let execution = match anum::handle_with(&self.executor, line) {
            Ok(execution) => execution,
            Err(err) => {
                debug!(kind = %err.kind(), "Request rejected");
                self.renderer.error(out, &err)?;
                out.flush()?;
                return Ok(Outcome::Rejected);
            },
        };

        match execution {
            Execution::Exit => {
                if self.renderer.format() == Format::Text {
                    writeln!(out, "{FAREWELL}")?;
                }
                return Ok(Outcome::Exit);
            },
            Execution::Single(classified) => self.renderer.single(out, &classified)?,
            Execution::Range(scan) => {
                for classified in scan {
                    self.renderer.row(out, &classified)?;
                }
                self.renderer.batch_end(out)?;
            },
            Execution::Search(scan) => self.stream(scan, out)?,
        }

        out.flush()?;
        Ok(Outcome::Answered)
    }

    /// Prints search matches as they are found.
    fn stream(&self, mut scan: SearchScan, out: &mut impl Write) -> io::Result<()> {
        for classified in scan.by_ref() {
            self.renderer.row(out, &classified)?;
            out.flush()?;
        }

        if scan.truncated() {
            self.renderer.truncated(out, scan.examined(), scan.remaining())?;
        }
        Ok(())
    }
}

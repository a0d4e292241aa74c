//! # Cargo Invocations
//!
//! Every handler builds a [`CargoCommand`] and runs it; the argument list is
//! kept inspectable so the selection rules can be tested without spawning
//! cargo.

use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};
use std::ffi::OsString;
use std::process::Command;

/// Which packages a command applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every workspace member.
    Workspace,
    /// One member, already carrying the `anum-` prefix.
    Package(String),
}

impl Target {
    /// Maps an optional CLI project name; `None` and `all` select the workspace.
    pub fn from_project(project: Option<&str>) -> Self {
        match project {
            None | Some("all") => Self::Workspace,
            Some(name) => Self::Package(normalize_project_name(name)),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::Package(_) => "crate",
        }
    }
}

/// A single `cargo <subcommand>` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoCommand {
    args: Vec<String>,
    passthrough: Vec<String>,
}

impl CargoCommand {
    pub fn new(subcommand: &str) -> Self {
        Self { args: vec![subcommand.to_owned()], passthrough: Vec::new() }
    }

    #[must_use]
    pub fn target(mut self, target: &Target) -> Self {
        match target {
            Target::Workspace => self.args.push("--workspace".into()),
            Target::Package(name) => self.args.extend(["-p".into(), name.clone()]),
        }
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Arguments handed to the program, test harness or bench runner after `--`.
    #[must_use]
    pub fn passthrough<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passthrough.extend(args.into_iter().map(Into::into));
        self
    }

    /// Full argument list, `--` included only when something follows it.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if !self.passthrough.is_empty() {
            args.push("--".into());
            args.extend(self.passthrough.iter().cloned());
        }
        args
    }

    /// Runs the command, failing with `what` when cargo exits unsuccessfully.
    ///
    /// # Errors
    /// Returns an error if cargo cannot be spawned or exits with a non-zero status.
    pub fn run(&self, what: &str) -> anyhow::Result<()> {
        let cargo = std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"));
        let status = Command::new(&cargo)
            .args(self.to_args())
            .status()
            .with_context(|| format!("Failed to spawn cargo for {what}"))?;

        if !status.success() {
            bail!("{what} failed with status {}", status.code().unwrap_or(-1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_selects_the_workspace() {
        let args = CargoCommand::new("test").target(&Target::from_project(None)).to_args();
        assert_eq!(args, ["test", "--workspace"]);
        assert_eq!(Target::from_project(Some("all")), Target::Workspace);
    }

    #[test]
    fn package_target_is_prefixed() {
        let args = CargoCommand::new("bench").target(&Target::from_project(Some("classifier"))).to_args();
        assert_eq!(args, ["bench", "-p", "anum-classifier"]);
    }

    #[test]
    fn separator_only_with_passthrough() {
        let bare = CargoCommand::new("run").arg("--quiet").to_args();
        assert!(!bare.contains(&"--".to_owned()));

        let forwarded = CargoCommand::new("run").passthrough(["5", "2", "even"]).to_args();
        assert_eq!(forwarded, ["run", "--", "5", "2", "even"]);
    }
}

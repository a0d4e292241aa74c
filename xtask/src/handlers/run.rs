use crate::services::cargo::{CargoCommand, Target};

/// Runs a workspace binary, forwarding `args` to it.
///
/// `cargo xtask run -- 10 3 even` answers one request with the shell; the
/// `json` feature is enabled when `--format json` is among the arguments.
///
/// # Errors
/// Returns an error if the build fails or the program exits with a non-zero status.
pub fn run_project(project: &str, args: &[String]) -> anyhow::Result<()> {
    println!("🚀 Starting {project}...");
    run_command(project, args).run("Run")
}

fn run_command(project: &str, args: &[String]) -> CargoCommand {
    let command = CargoCommand::new("run").target(&Target::from_project(Some(project))).arg("--quiet");
    let wants_json = args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
        || args.iter().any(|arg| arg == "--format=json");

    let command = if wants_json { command.arg("--features").arg("json") } else { command };
    command.passthrough(args.iter().cloned())
}

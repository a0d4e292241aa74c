use crate::services::cargo::{CargoCommand, Target};

/// Binary-only members; `cargo test --doc` has no library to document there.
const BINARY_ONLY: &[&str] = &["xtask"];

/// Runs unit, integration and binary tests for the workspace or one crate.
///
/// # Errors
/// Returns an error if cargo cannot be spawned or any test fails.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    println!("🧪 Running {} tests...", Target::from_project(project).label());
    test_command(project).run("Tests")
}

/// Runs doc tests for the library crates of the workspace or one crate.
///
/// # Errors
/// Returns an error if cargo cannot be spawned or any doc test fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    println!("📚 Running {} doc tests...", Target::from_project(project).label());
    doctest_command(project).run("Doc tests")
}

fn test_command(project: Option<&str>) -> CargoCommand {
    CargoCommand::new("test")
        .target(&Target::from_project(project))
        .arg("--all-features")
        .args(["--lib", "--bins", "--tests"])
        .passthrough(["-q"])
}

fn doctest_command(project: Option<&str>) -> CargoCommand {
    let target = Target::from_project(project);
    let command = CargoCommand::new("test").target(&target).arg("--all-features").arg("--doc");

    match target {
        Target::Workspace => command.args(BINARY_ONLY.iter().flat_map(|package| ["--exclude", *package])),
        Target::Package(_) => command,
    }
}

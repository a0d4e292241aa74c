use crate::services::cargo::{CargoCommand, Target};

/// Runs the `criterion` benches of a crate, optionally narrowed by `filter`
/// (e.g. `consecutive` or `search_sunny_even_not_duck`).
///
/// # Errors
/// Returns an error if the benches fail to build or run.
pub fn run_bench(project: &str, filter: Option<&str>) -> anyhow::Result<()> {
    println!("🏁 Running {project} benches...");
    bench_command(project, filter).run("Bench")
}

fn bench_command(project: &str, filter: Option<&str>) -> CargoCommand {
    CargoCommand::new("bench").target(&Target::from_project(Some(project))).passthrough(filter)
}

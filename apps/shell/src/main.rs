use anum::kernel::prelude::{ShellConfig, load_config};
use anum_shell::cli::Args;
use anum_shell::{Outcome, Shell, logging};
use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;

/// Exit status of a one-shot request the interpreter rejected.
const REJECTED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config: ShellConfig =
        load_config(args.config.as_ref()).context("Critical: Configuration is malformed")?;
    args.apply(&mut config);

    let _log = logging::init(&config.log)?;

    let shell = Shell::builder().config(config).format(args.format).build();

    if let Some(request) = args.request_line() {
        let outcome = shell.respond(&request, &mut io::stdout().lock())?;
        let code = if outcome == Outcome::Rejected { ExitCode::from(REJECTED) } else { ExitCode::SUCCESS };
        return Ok(code);
    }

    shell.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

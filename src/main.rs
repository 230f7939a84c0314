mod cli;
mod io;
mod logging;
mod mutate;
mod phase;
mod resources;

use cli::Cli;
use phase::Phase;
use tracing::{debug, info};

pub type Result<T> = anyhow::Result<T>;

fn main() -> Result<()> {
    let cli = match Cli::parse_known(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    logging::init_logging(cli.verbose);

    let result = run(&cli);

    if let Some(path) = &cli.diagnostics {
        io::write_diagnostics(path, result.as_ref().err())?;
    }

    result
}

fn run(cli: &Cli) -> Result<()> {
    let phase = Phase::from_arg(cli.phase.as_deref());
    debug!(%phase, "starting mutator");

    // 1) Read the configuration document.
    let mut config = io::read_config(cli.input.as_deref())?;

    // 2) Inject the jobs for this phase.
    let summary = mutate::apply(&mut config, phase)?;
    info!(
        %phase,
        inserted = ?summary.inserted,
        replaced = ?summary.replaced,
        "merged jobs"
    );

    // 3) Emit pretty to stderr, compact to stdout.
    io::write_config(&config, cli.output.as_deref())?;

    Ok(())
}

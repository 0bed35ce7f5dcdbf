mod cli;
mod commands;

use cli::{CheckParams, CompileParams, DumpParams, SpecParams, build_cli};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LCL_LOG";

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("spec", m)) => {
            let params = SpecParams::from_matches(m);
            commands::spec::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr so stdout stays clean for bytecode.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

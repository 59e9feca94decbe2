#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! fanstat: list static web-resource libraries and generate HTML and Crossbar config for them.

mod cli;
mod commands;
mod registry;
mod render;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    cli::logging::init(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands::dispatch(&cli, &ctx, &mut out) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let error_output = ErrorOutput::from_registry_error(&err);
            write_error(&error_output, ctx.is_json());
            std::process::exit(err.exit_code());
        }
    }
}

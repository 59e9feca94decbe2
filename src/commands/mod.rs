/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod cont;
pub mod crossbar;
pub mod html;
pub mod libs;
pub mod list;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::{Cli, Command};
use crate::registry::{Registry, RegistryError, find_manifest};

/// Locate and read the manifest, then run the parsed command.
///
/// # Errors
///
/// Returns `RegistryError` on manifest, load, or output failure.
pub fn dispatch<W: Write>(cli: &Cli, ctx: &OutputCtx, out: &mut W) -> Result<(), RegistryError> {
    let _t_find = ctx.timer("find_manifest");
    let path = find_manifest(cli.manifest.as_deref())?;
    drop(_t_find);

    let _t_read = ctx.timer("read_manifest");
    let registry = Registry::from_manifest_path(&path)?;
    drop(_t_read);

    run(&cli.command, &registry, ctx, out)
}

/// Run a command against an already-built registry.
///
/// # Errors
///
/// Returns `RegistryError` on any command failure.
pub fn run<W: Write>(
    command: &Command,
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), RegistryError> {
    match command {
        Command::List => list::run(registry, ctx, out),
        Command::Libs => libs::run(registry, ctx, out),
        Command::Cont(args) => cont::run(args, registry, ctx, out),
        Command::Html(args) => html::run(args, registry, ctx, out),
        Command::Crossbar(args) => crossbar::run(args, registry, ctx, out),
    }
}

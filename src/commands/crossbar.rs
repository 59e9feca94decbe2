/// `crossbar` command: print the Crossbar static-path configuration.
use std::io::Write;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::args::CrossbarArgs;
use crate::registry::{Registry, RegistryError};
use crate::render::{CrossbarConfig, StaticPath, path_key};

/// Run `fanstat crossbar`.
///
/// Every installed library is emitted; library names given on the command
/// line are accepted but do not filter.
///
/// # Errors
///
/// Returns `RegistryError` if any library fails to load or output cannot be written.
pub fn run<W: Write>(
    args: &CrossbarArgs,
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), RegistryError> {
    if !args.libs.is_empty() {
        debug!(libs = ?args.libs, "crossbar library filter is not applied");
    }

    let _t_load = ctx.timer("load_all");
    let mut config = CrossbarConfig::new();
    for ep in registry.entry_points() {
        let library = ep.load()?;
        config.insert(
            path_key(args.prefix.as_deref(), &ep.name),
            StaticPath::new(&ep.package, &library.rootpath),
        );
    }
    drop(_t_load);

    config.write_json(out)?;
    writeln!(out)?;
    Ok(())
}

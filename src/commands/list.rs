/// `list` command: print every package that registers libraries.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::output::write_packages;
use crate::registry::{Registry, RegistryError};
use crate::types::PackageOutput;

/// Run `fanstat list`.
///
/// # Errors
///
/// Returns `RegistryError` if output cannot be written.
pub fn run<W: Write>(
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), RegistryError> {
    let packages = PackageOutput::group(&registry.packages(), registry.entry_points());
    write_packages(out, &packages, ctx)
}

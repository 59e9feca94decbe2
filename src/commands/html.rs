/// `html` command: print `<link>` and `<script>` tags for selected libraries.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::HtmlArgs;
use crate::registry::{Library, Registry, RegistryError};
use crate::render::{HtmlOptions, LinkSet, write_html};

/// Run `fanstat html`.
///
/// Tags are printed in the order the libraries were named on the command
/// line. With no names every library is loaded but only the section headers
/// are printed.
///
/// # Errors
///
/// Returns `RegistryError::UnknownLibrary` for a name with no entry point,
/// or any load/output error.
pub fn run<W: Write>(
    args: &HtmlArgs,
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), RegistryError> {
    let selected = registry.select(&args.libs)?;

    let _t_load = ctx.timer("load_selected");
    let loaded = selected
        .iter()
        .map(|ep| ep.load().map(|lib| (ep.name.as_str(), lib)))
        .collect::<Result<Vec<(&str, Library)>, _>>()?;
    drop(_t_load);

    let opts = HtmlOptions {
        full: args.full,
        prefix: args.prefix.as_deref().unwrap_or_default(),
    };
    let links = LinkSet::build(loaded.iter().map(|(name, lib)| (*name, lib)), opts);
    write_html(out, &links, &args.libs)?;
    Ok(())
}

/// `cont` command: print every loaded library followed by its resources.
use std::io::Write;

use tracing::debug;

use crate::cli::OutputCtx;
use crate::cli::args::ContArgs;
use crate::cli::output::write_contents;
use crate::registry::{Registry, RegistryError};
use crate::types::ContentsOutput;

/// Run `fanstat cont`.
///
/// Library names and `--css`/`--js` are accepted for compatibility but every
/// resource of every library is listed.
///
/// # Errors
///
/// Returns `RegistryError` if any library fails to load or output cannot be written.
pub fn run<W: Write>(
    args: &ContArgs,
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), RegistryError> {
    if !args.libs.is_empty() || args.css || args.js {
        debug!(libs = ?args.libs, css = args.css, js = args.js, "cont filters are not applied");
    }

    let _t_load = ctx.timer("load_all");
    let loaded = registry.load_all()?;
    drop(_t_load);

    let output: Vec<ContentsOutput> = loaded
        .iter()
        .map(|(_, lib)| ContentsOutput::from(lib))
        .collect();
    write_contents(out, &output, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{capture, entry, library, plain};

    fn args(libs: &[&str], css: bool, js: bool) -> ContArgs {
        ContArgs {
            libs: libs.iter().map(|s| (*s).to_owned()).collect(),
            css,
            js,
        }
    }

    fn registry() -> Registry {
        Registry::new(vec![
            entry("p", library("b", "/pkg/b", &["b.js", "b.css"])),
            entry("p", library("a", "/pkg/a", &["a.min.js"])),
        ])
    }

    #[test]
    fn test_lists_resources_in_declared_order() {
        let r = registry();
        let got = capture(|out| run(&args(&[], false, false), &r, &plain(), out)).unwrap();
        assert_eq!(got, "a /pkg/a\na.min.js\nb /pkg/b\nb.js\nb.css\n");
    }

    #[test]
    fn test_filters_are_accepted_but_not_applied() {
        let r = registry();
        let unfiltered = capture(|out| run(&args(&[], false, false), &r, &plain(), out)).unwrap();
        let css_only = capture(|out| run(&args(&["a"], true, false), &r, &plain(), out)).unwrap();
        assert_eq!(unfiltered, css_only);
    }
}

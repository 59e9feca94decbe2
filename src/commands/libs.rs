/// `libs` command: print loaded library names and root paths.
use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::output::write_libraries;
use crate::registry::{Registry, RegistryError};
use crate::types::LibraryOutput;

/// Run `fanstat libs`.
///
/// # Errors
///
/// Returns `RegistryError` if any library fails to load or output cannot be written.
pub fn run<W: Write>(
    registry: &Registry,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<(), RegistryError> {
    let _t_load = ctx.timer("load_all");
    let loaded = registry.load_all()?;
    drop(_t_load);

    let output: Vec<LibraryOutput> = loaded
        .iter()
        .map(|(_, lib)| LibraryOutput::from(lib))
        .collect();
    write_libraries(out, &output, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{BrokenLoader, capture, plain, registry};
    use crate::registry::EntryPoint;

    #[test]
    fn test_one_line_per_library_sorted_by_name() {
        let r = registry();
        let got = capture(|out| run(&r, &plain(), out)).unwrap();
        assert_eq!(
            got,
            "bootstrap-theme /pkg/theme\nbootstrap|3 /pkg/bootstrap\njquery /pkg/jquery\n"
        );
        assert_eq!(got.lines().count(), r.entry_points().len());
    }

    #[test]
    fn test_load_failure_aborts() {
        let r = Registry::new(vec![EntryPoint::new("broken", "pkg", BrokenLoader)]);
        let err = capture(|out| run(&r, &plain(), out)).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}

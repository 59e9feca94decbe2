/// Output formatting: plain text, table, JSON. Error envelope and debug timers.
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::OutputFormat;
use crate::registry::RegistryError;
use crate::types::{ContentsOutput, ErrorOutput, LibraryOutput, PackageOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Whether a JSON flavour is selected (affects error output too).
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json | OutputFormat::Compact)
    }
}

// --- Packages ---

/// Write declaring packages.
///
/// # Errors
///
/// Returns any write or serialization error.
pub fn write_packages<W: Write>(
    out: &mut W,
    packages: &[PackageOutput],
    ctx: &OutputCtx,
) -> Result<(), RegistryError> {
    match ctx.format {
        OutputFormat::Json => write_json(out, packages),
        OutputFormat::Compact => write_compact_json(out, packages),
        OutputFormat::Plain => {
            for p in packages {
                writeln!(out, "{}", p.package)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            let mut table = new_table(ctx, &["PACKAGE", "LIBRARIES"]);
            for p in packages {
                table.add_row([p.package.as_str(), &p.libraries.join(", ")]);
            }
            Ok(writeln!(out, "{table}")?)
        }
    }
}

// --- Libraries ---

/// Write loaded libraries as `<name> <rootpath>` records.
///
/// # Errors
///
/// Returns any write or serialization error.
pub fn write_libraries<W: Write>(
    out: &mut W,
    libraries: &[LibraryOutput],
    ctx: &OutputCtx,
) -> Result<(), RegistryError> {
    match ctx.format {
        OutputFormat::Json => write_json(out, libraries),
        OutputFormat::Compact => write_compact_json(out, libraries),
        OutputFormat::Plain => {
            for l in libraries {
                writeln!(out, "{} {}", l.name, l.rootpath)?;
            }
            Ok(())
        }
        OutputFormat::Table => {
            let mut table = new_table(ctx, &["NAME", "ROOTPATH", "RESOURCES"]);
            for l in libraries {
                table.add_row([
                    l.name.as_str(),
                    l.rootpath.as_str(),
                    &l.resource_count.to_string(),
                ]);
            }
            Ok(writeln!(out, "{table}")?)
        }
    }
}

// --- Contents ---

/// Write loaded libraries followed by their resources.
///
/// # Errors
///
/// Returns any write or serialization error.
pub fn write_contents<W: Write>(
    out: &mut W,
    contents: &[ContentsOutput],
    ctx: &OutputCtx,
) -> Result<(), RegistryError> {
    match ctx.format {
        OutputFormat::Json => write_json(out, contents),
        OutputFormat::Compact => write_compact_json(out, contents),
        OutputFormat::Plain => {
            for c in contents {
                writeln!(out, "{} {}", c.name, c.rootpath)?;
                for r in &c.resources {
                    writeln!(out, "{r}")?;
                }
            }
            Ok(())
        }
        OutputFormat::Table => {
            let mut table = new_table(ctx, &["NAME", "ROOTPATH", "RESOURCE"]);
            for c in contents {
                if c.resources.is_empty() {
                    table.add_row([c.name.as_str(), c.rootpath.as_str(), ""]);
                }
                for r in &c.resources {
                    table.add_row([c.name.as_str(), c.rootpath.as_str(), r.as_str()]);
                }
            }
            Ok(writeln!(out, "{table}")?)
        }
    }
}

fn new_table(ctx: &OutputCtx, headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(headers.to_vec());
    }
    table
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
        if let Some(candidates) = &err.error.candidates {
            let _ = writeln!(out, "  Did you mean:");
            for c in candidates {
                let _ = writeln!(out, "    {c}");
            }
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), RegistryError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    Ok(writeln!(out)?)
}

fn write_compact_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), RegistryError> {
    serde_json::to_writer(&mut *out, value)?;
    Ok(writeln!(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(format: OutputFormat) -> OutputCtx {
        OutputCtx::new(format, false, false, false)
    }

    fn libraries() -> Vec<LibraryOutput> {
        vec![
            LibraryOutput {
                name: "foo".to_owned(),
                rootpath: "/pkg/foo".to_owned(),
                resource_count: 2,
            },
            LibraryOutput {
                name: "bar".to_owned(),
                rootpath: "/pkg/bar".to_owned(),
                resource_count: 0,
            },
        ]
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(
            resolve_format(OutputFormat::Table, true),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(OutputFormat::Table, false),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_plain_libraries() {
        let mut out = Vec::new();
        write_libraries(&mut out, &libraries(), &ctx(OutputFormat::Plain)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "foo /pkg/foo\nbar /pkg/bar\n"
        );
    }

    #[test]
    fn test_json_libraries_round_trip_shape() {
        let mut out = Vec::new();
        write_libraries(&mut out, &libraries(), &ctx(OutputFormat::Compact)).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["name"], "foo");
        assert_eq!(parsed[1]["resource_count"], 0);
    }

    #[test]
    fn test_table_without_header() {
        let c = OutputCtx::new(OutputFormat::Table, false, true, false);
        let mut out = Vec::new();
        write_libraries(&mut out, &libraries(), &c).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/pkg/foo"));
        assert!(!text.contains("ROOTPATH"));
    }

    #[test]
    fn test_plain_contents() {
        let contents = vec![ContentsOutput {
            name: "foo".to_owned(),
            rootpath: "/pkg/foo".to_owned(),
            resources: vec!["a.js".to_owned(), "a.css".to_owned()],
        }];
        let mut out = Vec::new();
        write_contents(&mut out, &contents, &ctx(OutputFormat::Plain)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "foo /pkg/foo\na.js\na.css\n"
        );
    }

    #[test]
    fn test_table_contents_keeps_library_without_resources() {
        let contents = vec![
            ContentsOutput {
                name: "empty".to_owned(),
                rootpath: "/pkg/empty".to_owned(),
                resources: Vec::new(),
            },
            ContentsOutput {
                name: "foo".to_owned(),
                rootpath: "/pkg/foo".to_owned(),
                resources: vec!["a.js".to_owned()],
            },
        ];
        let mut out = Vec::new();
        write_contents(&mut out, &contents, &ctx(OutputFormat::Table)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("empty"));
        assert!(text.contains("/pkg/empty"));
        assert!(text.contains("a.js"));
        let empty_rows = text.lines().filter(|l| l.contains("/pkg/empty")).count();
        assert_eq!(empty_rows, 1);
    }

    #[test]
    fn test_plain_packages() {
        let packages = vec![PackageOutput {
            package: "js.jquery".to_owned(),
            libraries: vec!["jquery".to_owned()],
        }];
        let mut out = Vec::new();
        write_packages(&mut out, &packages, &ctx(OutputFormat::Plain)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "js.jquery\n");
    }
}

/// HTML `<script>` / `<link>` tag generation for selected libraries.
use std::collections::HashMap;
use std::io::{self, Write};

use crate::registry::{Library, ResourceKind, is_minified, sanitize_name};

/// Comment line opening the stylesheet section.
pub const CSS_HEADER: &str = "<!-- CSS styles -->";
/// Comment line opening the script section.
pub const JS_HEADER: &str = "<!-- JavaScript scripts -->";

/// Options for link generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOptions<'a> {
    /// Link to full (uncompressed) files instead of minified ones.
    pub full: bool,
    /// URL path prefix prepended to every generated path.
    pub prefix: &'a str,
}

/// Resources of `library` that survive the minified/full filter, in declared order.
///
/// `full` keeps everything that is not minified. Otherwise minified files and
/// stylesheets are kept, since CSS is rarely shipped with a `.min.` twin.
#[must_use]
pub fn select_resources(library: &Library, full: bool) -> Vec<&str> {
    library
        .known_resources
        .iter()
        .map(String::as_str)
        .filter(|r| {
            if full {
                !is_minified(r)
            } else {
                is_minified(r) || r.contains(".css")
            }
        })
        .collect()
}

/// `<script>` tag for one resource.
#[must_use]
pub fn script_tag(prefix: &str, library: &str, resource: &str) -> String {
    format!(
        r#"<script type="text/javascript" src="{prefix}{}/{resource}"></script>"#,
        sanitize_name(library)
    )
}

/// `<link rel="stylesheet">` tag for one resource.
#[must_use]
pub fn stylesheet_tag(prefix: &str, library: &str, resource: &str) -> String {
    format!(
        r#"<link type="text/css" href="{prefix}{}/{resource}" rel="stylesheet"/>"#,
        sanitize_name(library)
    )
}

/// Generated tags bucketed by library name.
#[derive(Debug, Default)]
pub struct LinkSet {
    css: HashMap<String, Vec<String>>,
    js: HashMap<String, Vec<String>>,
}

impl LinkSet {
    /// Build the tag buckets for every `(entry name, library)` pair.
    #[must_use]
    pub fn build<'l>(
        libraries: impl IntoIterator<Item = (&'l str, &'l Library)>,
        opts: HtmlOptions<'_>,
    ) -> Self {
        let mut set = Self::default();
        for (name, library) in libraries {
            let mut css = Vec::new();
            let mut js = Vec::new();
            for resource in select_resources(library, opts.full) {
                match ResourceKind::of(resource) {
                    Some(ResourceKind::Js) => js.push(script_tag(opts.prefix, name, resource)),
                    Some(ResourceKind::Css) => {
                        css.push(stylesheet_tag(opts.prefix, name, resource));
                    }
                    None => {}
                }
            }
            set.css.insert(name.to_owned(), css);
            set.js.insert(name.to_owned(), js);
        }
        set
    }

    /// Whether any library was bucketed (even with zero tags).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.js.is_empty()
    }

    /// Stylesheet tags of one library.
    #[must_use]
    pub fn css(&self, name: &str) -> &[String] {
        self.css.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Script tags of one library.
    #[must_use]
    pub fn js(&self, name: &str) -> &[String] {
        self.js.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Write the CSS section then the JS section, each in `order`.
///
/// Nothing is written when no library was bucketed. With an empty `order`
/// only the two section headers are written.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_html<W: Write>(out: &mut W, links: &LinkSet, order: &[String]) -> io::Result<()> {
    if links.is_empty() {
        return Ok(());
    }

    writeln!(out, "{CSS_HEADER}")?;
    for name in order {
        for tag in links.css(name) {
            writeln!(out, "{tag}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{JS_HEADER}")?;
    for name in order {
        for tag in links.js(name) {
            writeln!(out, "{tag}")?;
        }
    }
    Ok(())
}

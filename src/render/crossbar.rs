/// Crossbar static-path configuration: URL path -> static resource descriptor.
use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::registry::sanitize_name;

/// Indentation used by the emitted JSON document.
const INDENT: &[u8] = b"   ";

/// One static-path entry of the Crossbar `paths` mapping.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StaticPath {
    /// Always `"static"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Package that declares the library.
    pub package: String,
    /// Filesystem root of the library.
    pub resource: String,
}

impl StaticPath {
    #[must_use]
    pub fn new(package: &str, resource: &str) -> Self {
        Self {
            kind: "static",
            package: package.to_owned(),
            resource: resource.to_owned(),
        }
    }
}

/// Path key for a library: `prefix + name`, with `|` sanitized.
///
/// An empty prefix behaves like no prefix.
#[must_use]
pub fn path_key(prefix: Option<&str>, name: &str) -> String {
    sanitize_name(&format!("{}{name}", prefix.unwrap_or_default()))
}

/// Insertion-ordered mapping of path keys to static entries.
#[derive(Debug, Clone, Default)]
pub struct CrossbarConfig {
    paths: Vec<(String, StaticPath)>,
}

impl CrossbarConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A repeated key keeps its position and takes the new value.
    pub fn insert(&mut self, key: String, value: StaticPath) {
        if let Some(slot) = self.paths.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.paths.push((key, value));
        }
    }

    /// Write the mapping as 3-space indented JSON (no trailing newline).
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` on serialization or write failure.
    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(out, formatter);
        self.serialize(&mut ser)
    }
}

impl Serialize for CrossbarConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.paths.len()))?;
        for (key, value) in &self.paths {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &CrossbarConfig) -> String {
        let mut out = Vec::new();
        config.write_json(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_path_key() {
        assert_eq!(path_key(None, "foo"), "foo");
        assert_eq!(path_key(Some(""), "foo"), "foo");
        assert_eq!(path_key(Some("/static/"), "foo"), "/static/foo");
        assert_eq!(path_key(Some("/a|b/"), "c|d"), "/a_b/c_d");
    }

    #[test]
    fn test_prefixed_example() {
        let mut config = CrossbarConfig::new();
        config.insert(
            path_key(Some("/static/"), "foo"),
            StaticPath::new("foopkg", "/pkg/foo"),
        );
        let got = render(&config);
        assert_eq!(
            got,
            "{\n   \"/static/foo\": {\n      \"type\": \"static\",\n      \"package\": \"foopkg\",\n      \"resource\": \"/pkg/foo\"\n   }\n}"
        );

        let parsed: serde_json::Value = serde_json::from_str(&got).unwrap();
        assert_eq!(parsed["/static/foo"]["type"], "static");
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let mut config = CrossbarConfig::new();
        config.insert("zeta".to_owned(), StaticPath::new("p", "/z"));
        config.insert("alpha".to_owned(), StaticPath::new("p", "/a"));
        let got = render(&config);
        assert!(got.find("zeta").unwrap() < got.find("alpha").unwrap());
    }

    #[test]
    fn test_repeated_key_keeps_position_takes_last_value() {
        let mut config = CrossbarConfig::new();
        config.insert("a_b".to_owned(), StaticPath::new("first", "/1"));
        config.insert("other".to_owned(), StaticPath::new("p", "/o"));
        config.insert("a_b".to_owned(), StaticPath::new("second", "/2"));
        let got = render(&config);
        assert!(got.find("a_b").unwrap() < got.find("other").unwrap());
        assert!(got.contains("second"));
        assert!(!got.contains("first"));
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(render(&CrossbarConfig::new()), "{}");
    }
}

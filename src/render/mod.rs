/// Renderers for the `html` and `crossbar` commands.
pub mod crossbar;
pub mod html;

pub use crossbar::{CrossbarConfig, StaticPath, path_key};
pub use html::{HtmlOptions, LinkSet, write_html};

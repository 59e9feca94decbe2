/// CLI layer: argument parsing, logging and output formatting.
pub mod args;
pub mod logging;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use output::{OutputCtx, write_error};

/// Registry provider: installed library entry points and the loaded library registry.
pub mod entry;
pub mod errors;
pub mod library;
pub mod manifest;
pub mod provider;
pub mod suggest;

pub use entry::EntryPoint;
pub use errors::RegistryError;
pub use library::{Library, ResourceKind, is_minified, sanitize_name};
pub use manifest::find_manifest;
pub use provider::Registry;

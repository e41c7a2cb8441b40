pub mod format;
pub mod loader;
pub mod schema;

pub use format::ConfigFormat;
pub use loader::{load_mapping, LoadedMapping};
pub use schema::{CategoryEntry, MappingDocument};

pub mod config;
pub mod error;
pub mod host;
pub mod lookup;
pub mod paths;
pub mod plugin;
pub mod record;

pub use config::{load_mapping, CategoryEntry, ConfigFormat, LoadedMapping, MappingDocument};
pub use error::{ConfigError, MapperError, Result, StorageError};
pub use host::{Host, MemoryHost, PathKind, PostprocessorSpec, Stage};
pub use lookup::CategoryMatch;
pub use plugin::{
    ChannelMapper, CleanupToken, MapperOptions, RunResult, CLEANUP_STAGE, PLUGIN_KEY,
};
pub use record::MediaRecord;

pub mod cleanup;
pub mod options;
pub mod runner;

pub use cleanup::{CleanupToken, CLEANUP_STAGE};
pub use options::MapperOptions;
pub use runner::{ChannelMapper, RunResult, PLUGIN_KEY, SUPPORTED_FIELD, SUPPORTED_STAGES};

use std::path::{Path, PathBuf};

use tracing::{debug, info_span, warn};

use crate::config::loader::load_mapping;
use crate::config::schema::{CategoryEntry, MappingDocument};
use crate::error::{ConfigError, MapperError, StorageError};
use crate::host::{Host, PathKind, Stage};
use crate::paths;
use crate::plugin::cleanup::CleanupToken;
use crate::plugin::options::MapperOptions;
use crate::record::MediaRecord;

/// Key this post-processor registers under.
pub const PLUGIN_KEY: &str = "ChannelMapping";

/// The record field whose values get remapped.
pub const SUPPORTED_FIELD: &str = "channel";

/// Stages the mapper may run at. All of them come before the file transfer.
pub const SUPPORTED_STAGES: &[Stage] = &[Stage::PreProcess, Stage::AfterFilter, Stage::Video];

/// Output-template placeholder that opts a download into remapping.
const MAPPED_CHANNEL_PLACEHOLDER: &str = "%(mapped_channel)s";

/// Everything one run hands back to the host.
#[derive(Debug)]
pub struct RunResult {
    /// Files the host may delete afterwards. Stays empty here; part of the
    /// common post-processor contract.
    pub deletions: Vec<PathBuf>,
    /// The record, annotated with `mapped_<field>` when mapping ran.
    pub record: MediaRecord,
    /// Scratch keys to strip once the item has left the pipeline.
    pub cleanup: CleanupToken,
    /// Error that aborted this run, if any. The record keeps its original
    /// values when this is set.
    pub suppressed: Option<MapperError>,
}

/// Reroutes downloads into per-channel directories.
///
/// Channel names are looked up in an operator-maintained mapping file. On
/// a hit the matched category's `home`/`temp` directories replace the
/// host's, and the record gains a `mapped_<field>` key for output
/// templates to reference.
pub struct ChannelMapper {
    mapping: MappingDocument,
    mapped_fields: Vec<String>,
}

impl ChannelMapper {
    /// Loads the mapping file named by `options` and builds the mapper.
    ///
    /// When no file exists at the configured path a starter template is
    /// written there first and the operator is warned to go edit it.
    pub fn new(options: &MapperOptions, host: &dyn Host) -> Result<Self, MapperError> {
        let loaded = load_mapping(options.config.as_deref().unwrap_or_default())?;
        if loaded.created_template {
            host.warn(&format!(
                "Mapping file not found. Created a template mapping file at: {}",
                loaded.path.display()
            ));
        }

        Ok(Self {
            mapping: loaded.document,
            mapped_fields: Vec::new(),
        })
    }

    /// Processes one record.
    ///
    /// Downloads whose output template never references
    /// `%(mapped_channel)s` pass through untouched. Mapping failures do
    /// not fail the item either: the error is logged, handed back in
    /// [`RunResult::suppressed`], and the record keeps its original
    /// values. The cleanup token covers every key this mapper has
    /// injected so far.
    pub fn run(&mut self, host: &mut dyn Host, mut record: MediaRecord) -> RunResult {
        let _span =
            info_span!("channel_mapping", channel = record.channel().unwrap_or_default()).entered();

        if !self.is_mapping_used(host) {
            debug!("output template does not reference {MAPPED_CHANNEL_PLACEHOLDER}, skipping");
            return RunResult {
                deletions: Vec::new(),
                record,
                cleanup: CleanupToken::default(),
                suppressed: None,
            };
        }

        let suppressed = match self.dispatch(host, &mut record) {
            Ok(()) => None,
            Err(e) => {
                warn!("channel mapping failed: {e}");
                Some(e)
            }
        };

        RunResult {
            deletions: Vec::new(),
            record,
            cleanup: CleanupToken::new(self.mapped_fields.clone()),
            suppressed,
        }
    }

    /// True when the active output template references the mapped channel.
    fn is_mapping_used(&self, host: &dyn Host) -> bool {
        host.output_template()
            .is_some_and(|template| template.contains(MAPPED_CHANNEL_PLACEHOLDER))
    }

    /// Validates where the host has this post-processor registered.
    /// Unregistered plugins count as `post_process` and are rejected.
    fn check_position(&self, host: &dyn Host) -> Result<(), ConfigError> {
        let when = host
            .postprocessors()
            .iter()
            .find(|pp| pp.key == PLUGIN_KEY)
            .map(|pp| pp.when)
            .unwrap_or_default();

        if !SUPPORTED_STAGES.contains(&when) {
            let allowed = SUPPORTED_STAGES
                .iter()
                .map(|stage| stage.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ConfigError::InvalidStage {
                stage: when.to_string(),
                key: PLUGIN_KEY.to_string(),
                allowed,
            });
        }

        Ok(())
    }

    fn dispatch(
        &mut self,
        host: &mut dyn Host,
        record: &mut MediaRecord,
    ) -> Result<(), MapperError> {
        self.check_position(host)?;

        // A present filepath means the transfer already happened; moving
        // files around on disk afterwards is out of scope.
        if record.filepath().is_some_and(|path| !path.is_empty()) {
            return Err(ConfigError::PostTransferUnsupported {
                key: PLUGIN_KEY.to_string(),
            }
            .into());
        }

        self.map_before_transfer(host, record)
    }

    fn map_before_transfer(
        &mut self,
        host: &mut dyn Host,
        record: &mut MediaRecord,
    ) -> Result<(), MapperError> {
        let original = record.channel().unwrap_or_default().to_owned();

        // An unmapped channel keeps its original name
        let matched = self.mapping.find_category(&original, &original);

        if let Some(entry) = matched.entry {
            apply_path(host, entry, PathKind::Home)?;
            apply_path(host, entry, PathKind::Temp)?;
        }

        host.to_screen(&format!(
            "Original channel: {original} -> New channel: {}",
            matched.value
        ));

        let mapped_key = format!("mapped_{}", matched.field.unwrap_or(SUPPORTED_FIELD));
        record.insert(mapped_key.clone(), matched.value);
        self.mapped_fields.push(mapped_key);

        Ok(())
    }
}

/// Points the host's directory for `kind` at the category's configured
/// location, creating it when missing. Absent or empty locations leave the
/// host's setting alone.
fn apply_path(
    host: &mut dyn Host,
    entry: &CategoryEntry,
    kind: PathKind,
) -> Result<(), StorageError> {
    let dir = match entry.dir(kind) {
        Some(dir) if !dir.is_empty() => dir,
        _ => return Ok(()),
    };

    let resolved = paths::absolutize(Path::new(dir));
    std::fs::create_dir_all(&resolved).map_err(|e| StorageError::CreateDirectory {
        path: resolved.clone(),
        source: e,
    })?;
    let resolved = paths::canonicalize_or_lexical(&resolved);

    debug!(kind = kind.as_str(), path = %resolved.display(), "rerouting directory");
    host.set_path(kind, resolved);
    Ok(())
}

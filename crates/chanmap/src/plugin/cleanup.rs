use crate::host::Stage;
use crate::record::MediaRecord;

/// Stage at which hosts should apply cleanup tokens, once per item.
pub const CLEANUP_STAGE: Stage = Stage::AfterVideo;

/// Deferred removal of the scratch keys a run injected into the record.
///
/// The mapper returns one of these from every mapping run; the host applies
/// it after the item has left the pipeline, so output templates evaluated
/// in between still see the injected values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupToken {
    keys: Vec<String>,
}

impl CleanupToken {
    pub(crate) fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    /// Keys this token will remove.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes every tracked key from `record`. Keys that are already gone
    /// are skipped; nothing else is touched.
    pub fn apply(&self, record: &mut MediaRecord) {
        for key in &self.keys {
            record.remove(key);
        }
    }
}

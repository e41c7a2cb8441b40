use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::host::PathKind;

/// One category in the mapping document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Destination directory for downloads matched by this category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    /// Temporary download directory for this category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<String>,
    /// Field name -> (original value -> mapped value), in document order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub field: IndexMap<String, IndexMap<String, String>>,
}

impl CategoryEntry {
    /// The directory configured for `kind`, if any.
    pub fn dir(&self, kind: PathKind) -> Option<&str> {
        match kind {
            PathKind::Home => self.home.as_deref(),
            PathKind::Temp => self.temp.as_deref(),
        }
    }
}

/// The whole mapping document: category name -> entry, in document order.
/// Read-only after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingDocument {
    pub categories: IndexMap<String, CategoryEntry>,
}

impl MappingDocument {
    /// Starter document written when no mapping file exists yet. The
    /// placeholder entries show operators the expected shape.
    pub fn template() -> Self {
        let categories = IndexMap::from([
            (
                "uncategorized".to_string(),
                CategoryEntry {
                    home: None,
                    temp: None,
                    field: IndexMap::from([
                        (
                            "channel".to_string(),
                            IndexMap::from([
                                ("MIT OpenCourseWare".to_string(), "OCW - MIT".to_string()),
                                ("<CHANNEL NAME>".to_string(), "<NEW CHANNEL NAME>".to_string()),
                            ]),
                        ),
                        ("<FIELD NAME>".to_string(), IndexMap::new()),
                    ]),
                },
            ),
            (
                "<CATEGORY>".to_string(),
                CategoryEntry {
                    home: Some("<TARGET LOCATION>".to_string()),
                    temp: Some("<TEMP LOCATION>".to_string()),
                    field: IndexMap::from([(
                        "<FIELD NAME>".to_string(),
                        IndexMap::from([(
                            "<ORIGINAL FIELD VALUE>".to_string(),
                            "<NEW FIELD VALUE>".to_string(),
                        )]),
                    )]),
                },
            ),
        ]);

        Self { categories }
    }
}

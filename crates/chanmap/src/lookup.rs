//! First-match lookup over the mapping document.

use tracing::debug;

use crate::config::schema::{CategoryEntry, MappingDocument};

/// Outcome of a mapping lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch<'a> {
    /// Name of the category that matched, when one did.
    pub category: Option<&'a str>,
    /// The matched category's entry.
    pub entry: Option<&'a CategoryEntry>,
    /// Field name under which the value matched.
    pub field: Option<&'a str>,
    /// The mapped value, or the caller's default on a miss.
    pub value: String,
}

impl CategoryEntry {
    /// Finds the first field mapping `original` to a non-empty value.
    /// Fields are tried in document order; empty mapped values count as
    /// no match.
    pub fn find_field(&self, original: &str) -> Option<(&str, &str)> {
        for (field_name, values) in &self.field {
            match values.get(original) {
                Some(mapped) if !mapped.is_empty() => {
                    return Some((field_name.as_str(), mapped.as_str()));
                }
                _ => {}
            }
        }
        None
    }
}

impl MappingDocument {
    /// Walks categories in document order and returns the first non-empty
    /// mapping for `original`. A miss yields `default` and no category.
    pub fn find_category<'a>(&'a self, original: &str, default: &str) -> CategoryMatch<'a> {
        for (name, entry) in &self.categories {
            if let Some((field, mapped)) = entry.find_field(original) {
                debug!(category = name.as_str(), field, original, mapped, "mapping hit");
                return CategoryMatch {
                    category: Some(name.as_str()),
                    entry: Some(entry),
                    field: Some(field),
                    value: mapped.to_string(),
                };
            }
        }

        debug!(original, "no mapping found, keeping value");
        CategoryMatch {
            category: None,
            entry: None,
            field: None,
            value: default.to_string(),
        }
    }
}

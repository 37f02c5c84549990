use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Startup summary of the sharded dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitatIndex {
    /// Sorted, deduplicated county names (the "Unknown" bucket excluded).
    pub counties: Vec<String>,
    /// Sorted, deduplicated genera found anywhere in the dataset.
    pub genera: Vec<String>,
    /// County name → shard path relative to the index file.
    pub files: BTreeMap<String, String>,
}

impl HabitatIndex {
    /// Index key and shard path for a county: exact key first, then trimmed, then case-insensitive.
    pub fn resolve(&self, county: &str) -> Option<(&str, &str)> {
        let trimmed = county.trim();
        self.files.get_key_value(county)
            .or_else(|| self.files.get_key_value(trimmed))
            .or_else(|| self.files.iter().find(|(name, _)| name.eq_ignore_ascii_case(trimmed)))
            .map(|(name, path)| (name.as_str(), path.as_str()))
    }

    pub fn shard_path(&self, county: &str) -> Option<&str> {
        self.resolve(county).map(|(_, path)| path)
    }

    /// Whether `county`'s shard file also holds features of another county.
    pub fn shares_shard(&self, county: &str) -> bool {
        self.files.get(county)
            .is_some_and(|path| self.files.iter().any(|(name, other)| name != county && other == path))
    }

    #[inline]
    pub fn has_county(&self, county: &str) -> bool { self.shard_path(county).is_some() }
}

use std::{collections::HashMap, io::Write, path::{Path, PathBuf}, sync::Arc};

use anyhow::{anyhow, Context, Result};
use tempfile::NamedTempFile;

/// Read-only access to data files by relative path, e.g.
/// "index.json" or "counties/Cork.geojson".
pub trait DataSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
    fn has(&self, rel: &str) -> bool;
}

/// Write access to data files by relative path.
pub trait DataSink {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()>;
}

/// Data directory on local disk.
#[derive(Debug, Clone)]
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DataSource for DiskSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn has(&self, rel: &str) -> bool { self.full(rel).is_file() }
}

impl DataSink for DiskSource {
    /// Write-then-rename, so readers never observe a half-written shard.
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        let path = self.full(rel);
        let parent = path.parent().unwrap_or(Path::new("."));
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;

        let mut tmp = NamedTempFile::new_in(parent).context("create temp file")?;
        tmp.write_all(bytes).with_context(|| format!("write {}", path.display()))?;
        tmp.persist(&path).with_context(|| format!("rename to {}", path.display()))?;
        Ok(())
    }
}

/// In-memory data files, keyed by relative path.
#[derive(Debug, Default, Clone)]
pub struct MemSource {
    pub(crate) files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    pub fn files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(rel, bytes)| (rel.as_str(), bytes.as_ref()))
    }
}

impl DataSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("missing data file: {rel}"))
    }

    fn has(&self, rel: &str) -> bool { self.files.contains_key(rel) }
}

impl DataSink for MemSource {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        self.files.insert(rel.to_string(), Arc::from(bytes.to_vec()));
        Ok(())
    }
}

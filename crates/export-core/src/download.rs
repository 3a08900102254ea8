// File: crates/export-core/src/download.rs
// Summary: Download payload plus the client-side file-save capability (sink trait and impls).

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// One file handed to the host's download capability.
#[derive(Clone, Debug)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { filename: filename.into(), bytes }
    }

    /// Href a transient page anchor would carry for this download.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.bytes))
    }
}

/// Client-side file save without a server round-trip. On a real page this is
/// the create-anchor/activate/discard mechanism; hosts supply their own.
pub trait DownloadSink {
    fn save(&self, download: &Download) -> Result<()>;
}

/// Sink writing each download as a file under one directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, download: &Download) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let path = self.dir.join(&download.filename);
        std::fs::write(&path, &download.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Sink that keeps downloads in memory so tests can inspect them.
pub struct MemorySink {
    saved: RefCell<Vec<Download>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self { saved: RefCell::new(Vec::new()) }
    }

    pub fn saved(&self) -> Vec<Download> {
        self.saved.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.saved.borrow().len()
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, download: &Download) -> Result<()> {
        self.saved.borrow_mut().push(download.clone());
        Ok(())
    }
}

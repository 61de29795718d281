use apk_graph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock IndexReader serving in-memory index text
#[derive(Clone)]
pub struct MockIndexReader {
    pub content: String,
    pub should_fail: bool,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockIndexReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl IndexReader for MockIndexReader {
    fn read_index(&self, path: &Path) -> Result<String> {
        self.requested_paths.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock index read failure");
        }
        Ok(self.content.clone())
    }
}

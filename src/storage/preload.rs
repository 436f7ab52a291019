//! In-memory byte source
//!
//! In a browser, reads turn into HTTP requests that can only complete
//! asynchronously. Everything the game may open is fetched up front with
//! macroquad's `load_file` and kept here, together with any fetch failure,
//! so later reads stay synchronous and report the fetch error.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::Arc;

use super::{clean_path, ByteSource, OpenError};

/// Byte source backed by files fetched ahead of time
#[derive(Debug, Default, Clone)]
pub struct Preloaded {
    /// Keyed by normalized name
    files: HashMap<String, Result<Arc<[u8]>, String>>,
}

impl Preloaded {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every name through the host's file loader.
    ///
    /// Failures are recorded, not returned; they surface when the name is
    /// opened.
    pub async fn fetch_all(names: &[String]) -> Self {
        let mut preloaded = Self::new();
        for name in names {
            match macroquad::file::load_file(&clean_path(name)).await {
                Ok(bytes) => preloaded.insert(name, bytes),
                Err(e) => {
                    log::warn!("Failed to preload {}: {}", name, e);
                    preloaded.insert_failure(name, e.to_string());
                }
            }
        }
        preloaded
    }

    /// Store the contents of a file
    pub fn insert(&mut self, name: &str, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(clean_path(name), Ok(bytes.into()));
    }

    /// Record that fetching a file failed
    pub fn insert_failure(&mut self, name: &str, message: impl Into<String>) {
        self.files.insert(clean_path(name), Err(message.into()));
    }

    /// Number of names known, including failed ones
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ByteSource for Preloaded {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OpenError> {
        match self.files.get(&clean_path(name)) {
            Some(Ok(bytes)) => Ok(Box::new(Cursor::new(Arc::clone(bytes)))),
            Some(Err(message)) => Err(OpenError::Network(message.clone())),
            None => Err(OpenError::NotPreloaded),
        }
    }

    fn describe(&self) -> String {
        let failed = self.files.values().filter(|f| f.is_err()).count();
        format!("{} preloaded files ({} failed)", self.files.len(), failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{read_file, FileError};

    #[test]
    fn test_insert_and_read() {
        let mut source = Preloaded::new();
        source.insert("asset/sample.json", b"{}".to_vec());

        assert_eq!(read_file(&source, "asset/sample.json").unwrap(), b"{}");
        // Same file under a differently spelled name
        assert_eq!(read_file(&source, "./asset//sample.json").unwrap(), b"{}");
    }

    #[test]
    fn test_recorded_failure_surfaces_on_open() {
        let mut source = Preloaded::new();
        source.insert_failure("resources/se/set_stone.wav", "HTTP 404");

        let err = read_file(&source, "resources/se/set_stone.wav").unwrap_err();
        match err {
            FileError::Open { name, source: OpenError::Network(msg) } => {
                assert_eq!(name, "resources/se/set_stone.wav");
                assert_eq!(msg, "HTTP 404");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_describe_counts_failures() {
        let mut source = Preloaded::new();
        source.insert("a", b"1".to_vec());
        source.insert_failure("b", "gone");
        assert_eq!(source.len(), 2);
        assert_eq!(source.describe(), "2 preloaded files (1 failed)");
    }
}

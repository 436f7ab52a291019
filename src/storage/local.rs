//! Local filesystem byte source
//!
//! Opens files relative to a base directory. All operations complete
//! immediately.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::{clean_path, ByteSource, OpenError};

/// Local filesystem byte source
#[derive(Debug, Clone)]
pub struct LocalFiles {
    /// Base directory for relative paths (usually current working directory)
    base_dir: PathBuf,
}

impl LocalFiles {
    /// Create a source with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a name relative to the base directory, after normalizing it
    fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(clean_path(name))
    }
}

impl ByteSource for LocalFiles {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OpenError> {
        let file = File::open(self.resolve(name))?;
        Ok(Box::new(file))
    }

    fn describe(&self) -> String {
        format!("local files under {}", self.base_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{read_file, FileError};
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, LocalFiles) {
        let dir = TempDir::new().unwrap();
        let source = LocalFiles::with_base_dir(dir.path());
        (dir, source)
    }

    #[test]
    fn test_read_existing_file() {
        let (dir, source) = setup_test_dir();
        std::fs::create_dir(dir.path().join("asset")).unwrap();
        std::fs::write(dir.path().join("asset/sample.json"), b"{\"a\":1}").unwrap();

        let bytes = read_file(&source, "asset/sample.json").unwrap();
        assert_eq!(bytes, b"{\"a\":1}");
    }

    #[test]
    fn test_read_normalizes_name() {
        let (dir, source) = setup_test_dir();
        std::fs::create_dir(dir.path().join("asset")).unwrap();
        std::fs::write(dir.path().join("asset/sample.json"), b"[]").unwrap();

        let bytes = read_file(&source, "./asset/../asset//sample.json").unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_read_not_found() {
        let (_dir, source) = setup_test_dir();

        let err = read_file(&source, "nonexistent.txt").unwrap_err();
        match &err {
            FileError::Open { name, source: OpenError::Io(io) } => {
                assert_eq!(name, "nonexistent.txt");
                assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("open nonexistent.txt: "));
    }

    #[test]
    fn test_describe_mentions_base_dir() {
        let source = LocalFiles::with_base_dir("/srv/magnet");
        assert!(source.describe().contains("/srv/magnet"));
    }
}

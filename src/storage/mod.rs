//! Byte Source Abstraction Layer
//!
//! Provides a single "read a named file" capability over two kinds of host:
//! - Native: local filesystem (`LocalFiles`) or plain HTTP (`HttpFetch`)
//! - Browser: files fetched over HTTP at startup and held in memory (`Preloaded`)
//!
//! The backend is picked once at startup by [`open_source`] and handed to
//! whatever needs to read files. Nothing below this module knows which one
//! it is talking to.

#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod local;
pub mod preload;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpFetch;
pub use local::LocalFiles;
pub use preload::Preloaded;

use std::io::Read;

use crate::config::GameConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::config::SourceConfig;

/// Failure to acquire a stream for a name
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// Filesystem error (not found, permission denied, ...)
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The server answered with a status outside 200..=299
    #[error("HTTP status {0}")]
    Status(u16),
    /// Transport-level failure (DNS, connection refused, browser fetch error)
    #[error("network error: {0}")]
    Network(String),
    /// Name was never fetched into a preloaded source
    #[error("not preloaded")]
    NotPreloaded,
}

/// Failure of [`read_file`], always carrying the name that was asked for
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("open {name}: {source}")]
    Open { name: String, source: OpenError },
    #[error("read {name}: {source}")]
    Read { name: String, source: std::io::Error },
}

impl FileError {
    /// The name passed to [`read_file`]
    pub fn name(&self) -> &str {
        match self {
            FileError::Open { name, .. } | FileError::Read { name, .. } => name,
        }
    }
}

/// Something that can hand out a readable stream for a file name
pub trait ByteSource {
    /// Open `name` for reading. The stream is released when dropped.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OpenError>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Read a whole file through a byte source.
///
/// The stream is scoped to this call and dropped on every exit path.
/// Errors carry `name` exactly as given (before normalization).
pub fn read_file(source: &dyn ByteSource, name: &str) -> Result<Vec<u8>, FileError> {
    let mut stream = source.open(name).map_err(|source| FileError::Open {
        name: name.to_string(),
        source,
    })?;

    let mut bytes = Vec::new();
    stream
        .read_to_end(&mut bytes)
        .map_err(|source| FileError::Read {
            name: name.to_string(),
            source,
        })?;
    Ok(bytes)
}

/// Lexically normalize a slash-separated path.
///
/// Collapses repeated separators, drops `.` elements and resolves `..`
/// against the preceding element where one exists. A leading `..` in a
/// relative path is kept; `..` directly after the root is dropped. An empty
/// result becomes `.`.
pub fn clean_path(name: &str) -> String {
    let rooted = name.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in name.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Pick the byte source for this host.
///
/// Native builds follow `config.source`. Browser builds cannot block on
/// HTTP, so every file the game may ask for is fetched here first.
pub async fn open_source(config: &GameConfig) -> Box<dyn ByteSource> {
    #[cfg(target_arch = "wasm32")]
    {
        let names = config.preload_names();
        let source = Preloaded::fetch_all(&names).await;
        log::info!("Byte source: {}", source.describe());
        Box::new(source)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let source: Box<dyn ByteSource> = match &config.source {
            SourceConfig::Local { root } => Box::new(LocalFiles::with_base_dir(root)),
            SourceConfig::Http { base_url } => Box::new(HttpFetch::new(base_url.clone())),
        };
        log::info!("Byte source: {}", source.describe());
        source
    }
}

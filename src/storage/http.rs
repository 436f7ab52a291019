//! HTTP byte source (native)
//!
//! Treats file names as paths under a base URL and fetches them with a
//! blocking GET. The response body is the stream. There is no timeout,
//! retry or cancellation on top of what ureq does by default.

use std::io::Read;

use super::{clean_path, ByteSource, OpenError};

/// HTTP byte source
#[derive(Debug, Clone)]
pub struct HttpFetch {
    base_url: String,
}

impl HttpFetch {
    /// Create a source that resolves names against `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Full URL for a file name. Names are cleaned as if rooted, so `..`
    /// never climbs above the base URL.
    pub fn url_for(&self, name: &str) -> String {
        let path = clean_path(&format!("/{}", name));
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Convert ureq error to OpenError
    fn convert_error(e: ureq::Error) -> OpenError {
        match e {
            ureq::Error::Status(code, _) => OpenError::Status(code),
            other => OpenError::Network(other.to_string()),
        }
    }
}

impl ByteSource for HttpFetch {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OpenError> {
        let url = self.url_for(name);
        log::debug!("GET {}", url);

        let response = ureq::get(&url).call().map_err(Self::convert_error)?;

        // ureq only reports 4xx/5xx as errors; anything else that is not a
        // success (e.g. an unfollowed 3xx) is refused here too.
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(OpenError::Status(status));
        }

        Ok(Box::new(response.into_reader()))
    }

    fn describe(&self) -> String {
        format!("HTTP fetch from {}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{read_file, FileError};
    use std::thread;
    use tiny_http::{Response, Server};

    /// Serve `requests` requests: `/asset/sample.json` is found,
    /// `/asset/cached.json` answers 304, everything else is 404
    fn spawn_server(requests: usize) -> (String, thread::JoinHandle<()>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        let handle = thread::spawn(move || {
            for request in server.incoming_requests().take(requests) {
                let response = match request.url() {
                    "/asset/sample.json" => Response::from_string("{\"board\":9}"),
                    "/asset/cached.json" => Response::from_string("").with_status_code(304),
                    _ => Response::from_string("missing").with_status_code(404),
                };
                request.respond(response).unwrap();
            }
        });

        (format!("http://127.0.0.1:{}", port), handle)
    }

    #[test]
    fn test_url_for_normalizes_name() {
        let source = HttpFetch::new("http://localhost:8000/");
        assert_eq!(
            source.url_for("./asset//sample.json"),
            "http://localhost:8000/asset/sample.json"
        );
        assert_eq!(
            source.url_for("/resources/se/../images/go_black_n.png"),
            "http://localhost:8000/resources/images/go_black_n.png"
        );
        assert_eq!(source.url_for("../asset/sample.json"), "http://localhost:8000/asset/sample.json");
        assert_eq!(source.url_for("asset/../../../x.png"), "http://localhost:8000/x.png");
    }

    #[test]
    fn test_fetch_success() {
        let (base_url, server) = spawn_server(1);
        let source = HttpFetch::new(base_url);

        let bytes = read_file(&source, "asset/sample.json").unwrap();
        assert_eq!(bytes, b"{\"board\":9}");
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_non_success_status_is_error() {
        let (base_url, server) = spawn_server(1);
        let source = HttpFetch::new(base_url);

        let err = read_file(&source, "asset/other.json").unwrap_err();
        match err {
            FileError::Open { name, source: OpenError::Status(404) } => {
                assert_eq!(name, "asset/other.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_not_modified_is_error() {
        let (base_url, server) = spawn_server(1);
        let source = HttpFetch::new(base_url);

        let err = read_file(&source, "asset/cached.json").unwrap_err();
        assert!(matches!(
            err,
            FileError::Open { source: OpenError::Status(304), .. }
        ));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = HttpFetch::new(format!("http://127.0.0.1:{}", port));

        let err = read_file(&source, "asset/sample.json").unwrap_err();
        assert!(matches!(
            err,
            FileError::Open { source: OpenError::Network(_), .. }
        ));
    }
}

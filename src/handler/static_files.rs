//! Static file serving module
//!
//! Resolves a request path against the serving root, falling back to `<path>.js`
//! when the literal file does not exist, and picks the Content-Type.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

const FALLBACK_EXTENSION: &str = ".js";

/// Outcome of a file lookup
#[derive(Debug)]
pub enum FileLookup<T = Vec<u8>> {
    Found(T),
    NotFound,
    Failed(io::Error),
}

/// A file located for a request, with the extension that decides its type
#[derive(Debug)]
pub struct ResolvedFile {
    pub content: Vec<u8>,
    pub extension: String,
}

/// Serve the file behind `path`
pub async fn serve_path(state: &AppState, path: &str) -> Response<Full<Bytes>> {
    match resolve(&state.config.server.root, path).await {
        FileLookup::Found(file) => {
            let content_type = state.mime_types.content_type(&file.extension);
            http::build_file_response(file.content, content_type)
        }
        FileLookup::NotFound => http::build_500_response(),
        FileLookup::Failed(e) => {
            logger::log_error(&format!("Failed to read '{path}': {e}"));
            http::build_500_response()
        }
    }
}

/// Locate the file for `path` under `root`.
///
/// Only a not-found result on the literal path triggers the `.js` retry. Any other
/// error is returned as is.
pub async fn resolve(root: &Path, path: &str) -> FileLookup<ResolvedFile> {
    if has_parent_segment(path) {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return FileLookup::NotFound;
    }

    let literal = local_path(root, path);
    match read_file(&literal).await {
        FileLookup::Found(content) => {
            return FileLookup::Found(ResolvedFile {
                content,
                extension: extension_of(path).to_string(),
            });
        }
        FileLookup::NotFound => {}
        FileLookup::Failed(e) => return FileLookup::Failed(e),
    }

    let fallback = local_path(root, &format!("{path}{FALLBACK_EXTENSION}"));
    match read_file(&fallback).await {
        FileLookup::Found(content) => FileLookup::Found(ResolvedFile {
            content,
            extension: FALLBACK_EXTENSION.to_string(),
        }),
        FileLookup::NotFound => FileLookup::NotFound,
        FileLookup::Failed(e) => FileLookup::Failed(e),
    }
}

/// Read a whole file, separating not-found from every other failure
pub async fn read_file(path: &Path) -> FileLookup {
    match fs::read(path).await {
        Ok(content) => FileLookup::Found(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => FileLookup::NotFound,
        Err(e) => FileLookup::Failed(e),
    }
}

/// Extension of the last path segment, leading dot included, or `""` when it has none
pub fn extension_of(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.rfind('.').map_or("", |pos| &segment[pos..])
}

fn local_path(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}

fn has_parent_segment(path: &str) -> bool {
    path.split(['/', '\\']).any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppState, Config, ServerConfig};
    use http_body_util::BodyExt;
    use tempfile::TempDir;

    fn fixture_root() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Tests/UI")).unwrap();
        std::fs::write(dir.path().join("Tests/UI/index.html"), "<html></html>").unwrap();
        std::fs::write(dir.path().join("Tests/UI/App.js"), "export default 1").unwrap();
        std::fs::write(dir.path().join("LICENSE"), "Apache-2.0").unwrap();
        std::fs::write(dir.path().join("data.bin"), [0u8, 159, 146, 150]).unwrap();
        dir
    }

    fn state_for(root: &Path) -> AppState {
        AppState::new(&Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                root: root.to_path_buf(),
            },
        })
    }

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("/Tests/UI/index.html"), ".html");
        assert_eq!(extension_of("/archive.tar.gz"), ".gz");
        assert_eq!(extension_of("/Tests/UI/App"), "");
        assert_eq!(extension_of("/v1.2/LICENSE"), "");
        assert_eq!(extension_of("/.gitignore"), ".gitignore");
        assert_eq!(extension_of("/"), "");
    }

    #[test]
    fn test_parent_segment_detection() {
        assert!(has_parent_segment("/../etc/passwd"));
        assert!(has_parent_segment("/Tests/../../secret"));
        assert!(has_parent_segment("/..\\secret"));
        assert!(!has_parent_segment("/Tests/..hidden/file"));
        assert!(!has_parent_segment("/Tests/UI/index.html"));
    }

    #[tokio::test]
    async fn test_resolve_literal_file() {
        let root = fixture_root();
        match resolve(root.path(), "/Tests/UI/index.html").await {
            FileLookup::Found(file) => {
                assert_eq!(file.content, b"<html></html>");
                assert_eq!(file.extension, ".html");
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_js_fallback() {
        let root = fixture_root();
        match resolve(root.path(), "/Tests/UI/App").await {
            FileLookup::Found(file) => {
                assert_eq!(file.content, b"export default 1");
                assert_eq!(file.extension, ".js");
            }
            other => panic!("expected fallback file, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let root = fixture_root();
        assert!(matches!(
            resolve(root.path(), "/Tests/UI/Missing").await,
            FileLookup::NotFound
        ));
        assert!(matches!(
            resolve(root.path(), "/nope.html").await,
            FileLookup::NotFound
        ));
    }

    #[tokio::test]
    async fn test_resolve_directory_is_failure() {
        let root = fixture_root();
        assert!(matches!(
            resolve(root.path(), "/Tests/UI").await,
            FileLookup::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_blocks_traversal() {
        let root = fixture_root();
        std::fs::write(root.path().join("Tests/secret.txt"), "x").unwrap();
        assert!(matches!(
            resolve(&root.path().join("Tests/UI"), "/../secret.txt").await,
            FileLookup::NotFound
        ));
    }

    #[tokio::test]
    async fn test_serve_html() {
        let root = fixture_root();
        let state = state_for(root.path());
        let resp = serve_path(&state, "/Tests/UI/index.html").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(&body_of(resp).await[..], b"<html></html>");
    }

    #[tokio::test]
    async fn test_serve_fallback_is_javascript() {
        let root = fixture_root();
        let state = state_for(root.path());
        let resp = serve_path(&state, "/Tests/UI/App").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/javascript");
        assert_eq!(&body_of(resp).await[..], b"export default 1");
    }

    #[tokio::test]
    async fn test_serve_literal_js() {
        let root = fixture_root();
        let state = state_for(root.path());
        let resp = serve_path(&state, "/Tests/UI/App.js").await;
        assert_eq!(resp.headers()["content-type"], "text/javascript");
    }

    #[tokio::test]
    async fn test_serve_extensionless_is_plain_text() {
        let root = fixture_root();
        let state = state_for(root.path());
        let resp = serve_path(&state, "/LICENSE").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(&body_of(resp).await[..], b"Apache-2.0");
    }

    #[tokio::test]
    async fn test_serve_unknown_extension_raw_bytes() {
        let root = fixture_root();
        let state = state_for(root.path());
        let resp = serve_path(&state, "/data.bin").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/octet-stream");
        assert_eq!(&body_of(resp).await[..], &[0u8, 159, 146, 150]);
    }

    #[tokio::test]
    async fn test_serve_missing_is_500() {
        let root = fixture_root();
        let state = state_for(root.path());
        let resp = serve_path(&state, "/Tests/UI/Missing").await;
        assert_eq!(resp.status(), 500);
        assert!(resp.headers().get("content-type").is_none());
        assert!(body_of(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_serve_is_repeatable() {
        let root = fixture_root();
        let state = state_for(root.path());
        let first = serve_path(&state, "/Tests/UI/App").await;
        let second = serve_path(&state, "/Tests/UI/App").await;
        assert_eq!(first.status(), second.status());
        assert_eq!(first.headers(), second.headers());
        assert_eq!(body_of(first).await, body_of(second).await);
    }
}

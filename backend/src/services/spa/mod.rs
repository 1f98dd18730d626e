//! # Front-end bundle service
//!
//! Serves the built single-page app from the configured `dist` directory.
//! Any path that is not a file in the bundle gets `index.html`, so the app
//! can be reloaded on any URL. The plant API itself is not served here; the
//! page talks to it directly.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::HttpResponse;
use log::debug;
use std::path::Path;

const INDEX_FILE: &str = "index.html";

/// Static files under `dist_dir`, with `index.html` for `/` and for every
/// path that names no file. Segments are resolved by `Files`, so nothing
/// outside the bundle is ever read.
pub fn bundle_service(dist_dir: &Path) -> Files {
    let index = dist_dir.join(INDEX_FILE);

    Files::new("/", dist_dir)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let res = match NamedFile::open_async(&index).await {
                    Ok(file) => file.into_response(&req),
                    Err(e) => {
                        debug!("No {} to fall back to: {}", index.display(), e);
                        HttpResponse::NotFound().body("Not Found")
                    }
                };
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, test, App};
    use std::fs;
    use tempfile::TempDir;

    const INDEX_BODY: &[u8] = b"<html>plants</html>";

    fn bundle_in(dir: &Path) {
        fs::write(dir.join("index.html"), INDEX_BODY).unwrap();
        fs::write(dir.join("frontend-1a2b.js"), "console.log('hi')").unwrap();
        fs::create_dir(dir.join("assets")).unwrap();
        fs::write(dir.join("assets/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    }

    fn bundle() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        bundle_in(dir.path());
        dir
    }

    async fn get(dist_dir: &Path, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let app = test::init_service(App::new().service(bundle_service(dist_dir))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(resp.into_body()).await.unwrap().to_vec();
        (status, content_type, body)
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let dir = bundle();
        let (status, content_type, body) = get(dir.path(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert_eq!(body, INDEX_BODY);
    }

    #[actix_web::test]
    async fn assets_keep_their_mime_type() {
        let dir = bundle();
        let (status, content_type, _) = get(dir.path(), "/frontend-1a2b.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("javascript"));

        let (status, content_type, body) = get(dir.path(), "/assets/logo.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/png"));
        assert_eq!(body, vec![0x89, b'P', b'N', b'G']);
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = bundle();
        let (status, content_type, body) = get(dir.path(), "/plants/12").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert_eq!(body, INDEX_BODY);
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _, body) = get(dir.path(), "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"Not Found");
    }

    #[actix_web::test]
    async fn parent_segments_never_leave_the_bundle() {
        let root = tempfile::tempdir().unwrap();
        let dist = root.path().join("dist");
        fs::create_dir(&dist).unwrap();
        bundle_in(&dist);
        fs::write(root.path().join("secret.txt"), "top secret").unwrap();

        for uri in ["/../secret.txt", "/assets/../../secret.txt", "/%2e%2e/secret.txt"] {
            let (_, _, body) = get(&dist, uri).await;
            assert_ne!(body, b"top secret", "uri {}", uri);
        }
    }
}

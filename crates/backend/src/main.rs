mod assets;
mod config;

use std::path::Path;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>Drought Monitor Editor</title></head>
<body>
<h1>Drought Monitor Editor</h1>
<p>Frontend not built yet. The dataset is served under <a href="/static/data/categories.json">/static/data</a>.</p>
</body>
</html>"#;

/// Build the full application router.
fn build_app(config: Arc<ServerConfig>) -> Router {
    // Dataset files change daily; frontend bundles are content-hashed.
    let static_files = Router::new()
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_assets_dir(), CACHE_IMMUTABLE),
        );

    Router::new()
        .route("/", get(serve_index))
        .route("/view/{map_type}", get(serve_index))
        .with_state(config)
        .merge(static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

async fn serve_index(State(config): State<Arc<ServerConfig>>) -> Html<String> {
    match tokio::fs::read_to_string(config.index_path()).await {
        Ok(html) => Html(html),
        Err(_) => Html(FALLBACK_INDEX.to_string()),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(ServerConfig::from_env());

    let dataset = match assets::Dataset::load(&config.assets_dir) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, dir = %config.assets_dir.display(), "failed to load dataset");
            std::process::exit(1);
        }
    };
    if let Err(e) = dataset.check() {
        tracing::error!(error = %e, "dataset failed validation");
        std::process::exit(1);
    }

    let app = build_app(config.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .unwrap();
    tracing::info!(port = config.port, "Server running at http://localhost:{}", config.port);
    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    /// Create a temp dir with a test file and return the dir path.
    fn temp_dir_with_file(file_name: &str, content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        dir
    }

    fn test_config(assets_dir: &Path, dist_dir: &Path) -> Arc<ServerConfig> {
        Arc::new(ServerConfig {
            port: 0,
            assets_dir: PathBuf::from(assets_dir),
            dist_dir: PathBuf::from(dist_dir),
        })
    }

    async fn fetch(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dataset_files_have_1day_cache() {
        let assets_dir = temp_dir_with_file("data/values.json", r#"{"drought_cat": {}}"#);
        let dist_dir = temp_dir_with_file("index.html", "<html></html>");
        let app = build_app(test_config(assets_dir.path(), dist_dir.path()));

        let resp = fetch(app, "/static/data/values.json").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "public, max-age=86400, must-revalidate"
        );
    }

    #[tokio::test]
    async fn test_dist_bundles_have_immutable_cache() {
        let assets_dir = temp_dir_with_file("data/categories.json", "[]");
        let dist_dir = temp_dir_with_file("drought-frontend-abc123.js", "bundle()");
        let app = build_app(test_config(assets_dir.path(), dist_dir.path()));

        let resp = fetch(app, "/dist/drought-frontend-abc123.js").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "public, max-age=31536000, immutable"
        );
    }

    #[tokio::test]
    async fn test_dist_assets_have_immutable_cache() {
        let assets_dir = temp_dir_with_file("data/categories.json", "[]");
        let dist_dir = temp_dir_with_file("assets/main-xyz.css", "body{}");
        let app = build_app(test_config(assets_dir.path(), dist_dir.path()));

        let resp = fetch(app, "/assets/main-xyz.css").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "public, max-age=31536000, immutable"
        );
    }

    #[tokio::test]
    async fn test_missing_dataset_file_returns_404() {
        let assets_dir = temp_dir_with_file("data/categories.json", "[]");
        let dist_dir = temp_dir_with_file("index.html", "<html></html>");
        let app = build_app(test_config(assets_dir.path(), dist_dir.path()));

        let resp = fetch(app, "/static/data/grid.geojson").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_served_for_view_routes() {
        let assets_dir = temp_dir_with_file("data/categories.json", "[]");
        let dist_dir = temp_dir_with_file("index.html", "<html>built</html>");
        let app = build_app(test_config(assets_dir.path(), dist_dir.path()));

        let root = fetch(app.clone(), "/").await;
        assert_eq!(root.status(), StatusCode::OK);
        assert_eq!(body_text(root).await, "<html>built</html>");

        let view = fetch(app, "/view/changes").await;
        assert_eq!(view.status(), StatusCode::OK);
        assert_eq!(body_text(view).await, "<html>built</html>");
    }

    #[tokio::test]
    async fn test_index_falls_back_without_build() {
        let assets_dir = temp_dir_with_file("data/categories.json", "[]");
        let dist_dir = tempfile::tempdir().unwrap();
        let app = build_app(test_config(assets_dir.path(), dist_dir.path()));

        let resp = fetch(app, "/").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("Frontend not built yet"));
    }
}

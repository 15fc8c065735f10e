use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{LogLevel, ServerConfig};

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(ServerConfig::from_env());

    if let Some(line) = dist_missing_event(&config) {
        println!("{line}");
    }

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}{}", config.port, config.base_path),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(Arc::clone(&config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event(&config, LogLevel::Info, "server_stopped", serde_json::json!({}));
    Ok(())
}

pub fn router(config: Arc<ServerConfig>) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    let routes = if config.is_root_mount() {
        Router::new().fallback_service(static_service)
    } else {
        let redirect_target = format!("{}/", config.base_path);
        Router::new()
            .route(
                "/",
                get(move || {
                    let target = redirect_target.clone();
                    async move { Redirect::temporary(&target) }
                }),
            )
            .nest_service(&config.base_path, static_service)
    };

    routes.layer(middleware::from_fn_with_state(config, log_requests))
}

async fn log_requests(
    State(config): State<Arc<ServerConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await.into_response();

    log_event(
        &config,
        LogLevel::Debug,
        "static_request",
        serde_json::json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "durationMs": started.elapsed().as_millis() as u64,
        }),
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", since_epoch().as_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    match headers.get(REQUEST_ID_HEADER).map(HeaderValue::to_str) {
        Some(Ok(value)) if !value.trim().is_empty() => value.trim().to_string(),
        _ => generate_request_id(),
    }
}

fn dist_missing_event(config: &ServerConfig) -> Option<serde_json::Value> {
    if config.dist_dir.is_dir() {
        return None;
    }

    event_line(
        config,
        LogLevel::Warn,
        "dist_missing",
        serde_json::json!({
            "distDir": config.dist_dir.display().to_string(),
            "hint": "run `trunk build --release` first",
        }),
    )
}

fn event_line(
    config: &ServerConfig,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> Option<serde_json::Value> {
    if level < config.log_level {
        return None;
    }

    let mut line = serde_json::json!({
        "ts": since_epoch().as_secs(),
        "level": level.as_str(),
        "event": event,
    });
    if let (Some(line), serde_json::Value::Object(fields)) = (line.as_object_mut(), fields) {
        line.extend(fields);
    }
    Some(line)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = event_line(config, level, event, fields) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, StatusCode},
    };
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

    fn dist_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-preview-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create dist fixture");
        std::fs::write(dir.join("index.html"), INDEX_HTML).expect("write index.html");
        std::fs::write(dir.join("app.js"), "console.log('app');").expect("write app.js");
        dir
    }

    fn test_config(name: &str, base_path: &str) -> Arc<ServerConfig> {
        Arc::new(ServerConfig {
            port: 0,
            base_path: base_path.to_string(),
            dist_dir: dist_fixture(name),
            log_level: LogLevel::Info,
        })
    }

    async fn get_request(config: Arc<ServerConfig>, uri: &str) -> Response {
        let request = axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        router(config).oneshot(request).await.expect("router is infallible")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn root_mount_serves_index_and_assets() {
        let config = test_config("root", "/");

        let index = get_request(Arc::clone(&config), "/").await;
        assert_eq!(index.status(), StatusCode::OK);
        assert_eq!(body_text(index).await, INDEX_HTML);

        let asset = get_request(config, "/app.js").await;
        assert_eq!(asset.status(), StatusCode::OK);
        assert_eq!(body_text(asset).await, "console.log('app');");
    }

    #[tokio::test]
    async fn base_path_mount_serves_assets_under_the_prefix() {
        let config = test_config("nested", "/portfolio");

        let asset = get_request(config, "/portfolio/app.js").await;

        assert_eq!(asset.status(), StatusCode::OK);
        assert_eq!(body_text(asset).await, "console.log('app');");
    }

    #[tokio::test]
    async fn bare_root_redirects_to_the_base_path() {
        let config = test_config("redirect", "/portfolio");

        let response = get_request(config, "/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/portfolio/")
        );
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_html() {
        let config = test_config("fallback", "/");

        let response = get_request(config, "/no/such/page").await;

        assert_eq!(body_text(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn responses_echo_or_assign_a_request_id() {
        let config = test_config("request-id", "/");

        let request = axum::http::Request::builder()
            .uri("/app.js")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .expect("valid request");
        let echoed = router(Arc::clone(&config))
            .oneshot(request)
            .await
            .expect("router is infallible");
        assert_eq!(
            echoed.headers().get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some("abc-123")
        );

        let assigned = get_request(config, "/app.js").await;
        let request_id = assigned
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(request_id.starts_with("req-"), "{request_id}");
    }

    #[test]
    fn missing_dist_is_reported_as_a_warning() {
        let config = ServerConfig {
            port: 0,
            base_path: "/".to_string(),
            dist_dir: std::env::temp_dir().join("portfolio-preview-no-such-dist"),
            log_level: LogLevel::Warn,
        };

        let line = dist_missing_event(&config).expect("warning survives a warn threshold");
        assert_eq!(line["level"], "warn");
        assert_eq!(line["event"], "dist_missing");
        assert!(line["hint"].as_str().is_some_and(|hint| hint.contains("trunk build")));

        let built = test_config("built", "/");
        assert!(dist_missing_event(&built).is_none());
    }

    #[test]
    fn events_below_the_configured_level_are_dropped() {
        let config = ServerConfig {
            log_level: LogLevel::Warn,
            ..(*test_config("levels", "/")).clone()
        };

        assert!(event_line(&config, LogLevel::Info, "server_listening", serde_json::json!({})).is_none());
        let line = event_line(&config, LogLevel::Warn, "x", serde_json::json!({ "path": "/" }))
            .expect("warn passes");
        assert_eq!(line["path"], "/");
        assert!(line["ts"].is_u64());
    }

    #[test]
    fn blank_request_id_header_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        assert!(resolve_request_id(&headers).starts_with("req-"));
    }
}

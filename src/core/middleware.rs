use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Tracing span carrying method, uri and the request id
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Cross-origin policy. Methods and headers are always open; origins are
/// open when the list contains "*", otherwise restricted to the list.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// HTTP basic auth guard for the API docs.
pub fn docs_basic_auth(
    expected: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let expected = expected.clone();
        Box::pin(async move {
            let supplied = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(decode_basic_credentials);

            if supplied.as_deref() == Some(expected.as_str()) {
                return Ok(next.run(req).await);
            }

            let mut response = Response::new(axum::body::Body::from("Unauthorized"));
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"API Docs\""),
            );
            Err(response)
        })
    }
}

/// Decodes a `Basic <base64>` authorization header into `user:pass`.
fn decode_basic_credentials(header_value: &str) -> Option<String> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded).ok()?;
    String::from_utf8(decoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    #[test]
    fn test_decode_basic_credentials() {
        let encoded = BASE64_STANDARD.encode("admin:secret");
        assert_eq!(
            decode_basic_credentials(&format!("Basic {}", encoded)),
            Some("admin:secret".to_string())
        );
        assert_eq!(decode_basic_credentials("Bearer abc"), None);
        assert_eq!(decode_basic_credentials("Basic !!!"), None);
    }

    fn guarded_server() -> TestServer {
        let app = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(axum::middleware::from_fn(docs_basic_auth(Arc::new(
                "admin:secret".to_string(),
            ))));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_docs_basic_auth_rejects_missing_credentials() {
        let server = guarded_server();

        let response = server.get("/docs").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[tokio::test]
    async fn test_docs_basic_auth_accepts_valid_credentials() {
        let server = guarded_server();
        let value = format!("Basic {}", BASE64_STANDARD.encode("admin:secret"));

        let response = server
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&value).unwrap(),
            )
            .await;

        response.assert_status_ok();
        response.assert_text("docs");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin_by_default() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer(&["*".to_string()]));
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/ping")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("https://shop.example"),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            HeaderValue::from_static("*")
        );
    }
}

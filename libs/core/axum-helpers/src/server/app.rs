use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

/// Combine API routes with docs UIs and the cross-cutting layers.
///
/// `apis` is merged as-is, so it must already carry its own path prefix and
/// state. `openapi` is the assembled document for those routes. The returned
/// router serves:
/// - Swagger UI at `/swagger-ui` (spec at `/api-docs/openapi.json`)
/// - ReDoc at `/redoc`, RapiDoc at `/rapidoc`, Scalar at `/scalar`
/// - a JSON 404 for unknown routes and a JSON 405 for wrong methods
///
/// CORS comes from `CORS_ALLOWED_ORIGIN`; see [`cors_layer_from_env`].
///
/// # Errors
/// Returns `InvalidInput` if `CORS_ALLOWED_ORIGIN` is set but unparseable.
pub fn create_router(apis: Router, openapi: utoipa::openapi::OpenApi) -> io::Result<Router> {
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", openapi))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Bind `server_config.address()` and serve until SIGINT/SIGTERM.
///
/// After in-flight requests drain, `cleanup` runs with
/// `server_config.shutdown_timeout` as its upper bound.
///
/// ```ignore
/// let client = client.clone();
/// create_production_app(router, &config.server, async move {
///     client.shutdown().await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_with_shutdown(
        listener,
        router,
        ShutdownCoordinator::new(),
        server_config.shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serve on an already-bound listener until `coordinator` fires.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let shutdown = {
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_shutdown().await }
    };

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // The server may have stopped on an error rather than a signal.
    coordinator.shutdown();

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::cors::CORS_ALLOWED_ORIGIN;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;
    use utoipa::OpenApi;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn app() -> Router {
        let apis = Router::new().route("/v1/things", get(|| async { "things" }));
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN, || {
            create_router(apis, TestDoc::openapi())
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_merged_without_prefix() {
        let response = app()
            .oneshot(Request::get("/v1/things").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"things");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_returns_json_405() {
        let response = app()
            .oneshot(Request::delete("/v1/things").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 1005);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_cors_origin_fails() {
        let result = temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("bad\norigin"), || {
            create_router(Router::new(), TestDoc::openapi())
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_serve_runs_cleanup_after_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let coordinator = ShutdownCoordinator::new();
        let cleaned = Arc::new(AtomicBool::new(false));

        let server = {
            let coordinator = coordinator.clone();
            let cleaned = cleaned.clone();
            tokio::spawn(serve_with_shutdown(
                listener,
                Router::new(),
                coordinator,
                Duration::from_secs(1),
                async move { cleaned.store(true, Ordering::SeqCst) },
            ))
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        coordinator.shutdown();

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should stop")
            .unwrap();
        assert!(result.is_ok());
        assert!(cleaned.load(Ordering::SeqCst));
    }
}

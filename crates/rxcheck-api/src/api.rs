use crate::{handlers, models::HealthResponse, state::AppState};
use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// 创建 API 路由
///
/// `allowed_origins` 为空时不启用 CORS。
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let mut router = Router::new()
        // 健康检查
        .route("/health", get(health_check))

        // 相互作用查询 API
        .route("/check", post(handlers::check_interaction))
        .route("/history", get(handlers::get_history))

        // 规则管理 API
        .route("/rules", get(handlers::list_rules).post(handlers::create_rule))
        .route(
            "/rules/:rule_id",
            get(handlers::get_rule)
                .put(handlers::update_rule)
                .delete(handlers::delete_rule),
        )
        .with_state(state);

    if let Some(cors) = cors_layer(allowed_origins) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http())
}

/// 按允许的来源构建 CORS 层
///
/// 允许携带凭据，因此方法和请求头按请求回显而不是使用通配符。
pub fn cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    )
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = match state.service.store().ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: "ok",
        db,
        version: env!("CARGO_PKG_VERSION"),
    })
}

//! REST APIハンドラー
//!
//! プローブエンドポイントのルーティング

pub mod health;

use crate::config::BasePath;
use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// プローブのルートを作成
///
/// `/health` はliveness/readinessを区別しない旧クライアント向けのreadinessエイリアス。
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness))
}

/// アプリケーションのルーターを作成
///
/// プローブはルート直下（Podへの直接アクセス用）に登録し、
/// ベースパスが設定されていればその配下（Ingress経由のアクセス用）にも登録する。
pub fn create_app(state: AppState, base_path: &BasePath) -> Router {
    let mut router = health_routes();

    if let Some(prefix) = base_path.as_str() {
        router = router.nest(prefix, health_routes());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

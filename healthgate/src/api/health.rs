//! ヘルスチェックAPIハンドラー

use crate::types::health::LivenessResponse;
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

/// GET /health/live - livenessプローブ
///
/// 依存サービスはチェックしない。リクエストに応答できれば常に200を返すため、
/// 下流の一時的な障害でPodが再起動されることはない。
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse::default())
}

/// GET /health/ready, GET /health - readinessプローブ
///
/// 設定済みの依存サービスがすべて `ok` なら200、そうでなければ503を返す。
/// どちらの場合も依存サービスごとの結果をボディに含める。
pub async fn readiness(State(state): State<AppState>) -> Response {
    let report = state.readiness.check(state.shutdown.token()).await;
    (report.status_code(), Json(report.to_response())).into_response()
}

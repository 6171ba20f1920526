//! 統合テスト用の共通ユーティリティ

#![allow(dead_code)]

pub mod probes;

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use healthgate::{api, config::BasePath, health::ReadinessChecker, AppState};
use serde_json::Value;
use tower::ServiceExt;

use self::probes::Backend;

/// テストで使う短い制限時間
pub const TEST_TIMEOUT: Duration = Duration::from_millis(200);

/// 依存サービスの状態からAppStateを作成する
pub fn test_state(database: Backend, cache: Backend) -> AppState {
    let readiness =
        ReadinessChecker::new(database.handle(), cache.handle()).with_timeout(TEST_TIMEOUT);
    AppState::new(readiness)
}

/// テスト用のアプリケーション（.oneshot()スタイルのテスト用）
pub fn test_app(database: Backend, cache: Backend, base_path: &str) -> Router {
    let base_path = BasePath::parse(base_path).expect("invalid base path in test");
    api::create_app(test_state(database, cache), &base_path)
}

/// GETリクエストを送り、ステータス・生ボディ・JSONを返す
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, bytes.to_vec(), json)
}

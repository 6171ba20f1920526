//! Contract Test: GET /health/live

use crate::support::{get, probes::Backend, test_app};
use axum::http::StatusCode;
use serde_json::json;

/// 依存サービスの状態に関わらず常に200を返す
#[tokio::test]
async fn test_liveness_always_200() {
    let backends = [
        Backend::Absent,
        Backend::Healthy,
        Backend::Unreachable,
        Backend::Hanging,
        Backend::Misconfigured,
    ];

    for database in backends {
        for cache in backends {
            let app = test_app(database, cache, "");
            let (status, body, json) = get(&app, "/health/live").await;

            assert_eq!(status, StatusCode::OK, "{database:?} / {cache:?}");
            assert_eq!(json, json!({ "status": "alive" }));
            assert_eq!(body, br#"{"status":"alive"}"#);
        }
    }
}

/// livenessは依存サービスにアクセスしない
#[tokio::test]
async fn test_liveness_does_not_ping_dependencies() {
    use crate::support::probes::{Behavior, FakeProbe};
    use healthgate::{api, config::BasePath, health::ReadinessChecker, AppState};
    use std::sync::Arc;

    let database = Arc::new(FakeProbe::new(Behavior::Pong));
    let cache = Arc::new(FakeProbe::new(Behavior::Pong));
    let state = AppState::new(ReadinessChecker::new(
        Some(database.clone()),
        Some(cache.clone()),
    ));
    let app = api::create_app(state, &BasePath::root());

    let (status, _, _) = get(&app, "/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(database.pings(), 0);
    assert_eq!(cache.pings(), 0);

    let (status, _, _) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(database.pings(), 1);
    assert_eq!(cache.pings(), 1);
}

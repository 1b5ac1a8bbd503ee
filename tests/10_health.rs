mod common;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use reqwest::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use game_progress_api::database::models::{CardRow, Level, MonsterRow, Stage};
use game_progress_api::database::{ContentStore, DatabaseError};
use game_progress_api::testing::{test_config, MemoryAccountStore, UnavailableStore};
use game_progress_api::{app, AppState};

/// Content store that answers only after every request timeout has passed
struct StalledContent;

impl StalledContent {
    async fn stall() {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}

#[async_trait]
impl ContentStore for StalledContent {
    async fn find_stage(&self, _stage_code: &str) -> Result<Option<Stage>, DatabaseError> {
        Self::stall().await;
        Ok(None)
    }

    async fn find_monster(&self, _monster_code: &str) -> Result<Option<MonsterRow>, DatabaseError> {
        Self::stall().await;
        Ok(None)
    }

    async fn find_card(&self, _card_code: &str) -> Result<Option<CardRow>, DatabaseError> {
        Self::stall().await;
        Ok(None)
    }

    async fn find_level(&self, _level_value: i32) -> Result<Option<Level>, DatabaseError> {
        Self::stall().await;
        Ok(None)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.get("/health").await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"]["account"], "ok");
    assert_eq!(body["data"]["database"]["content"], "ok");
    Ok(())
}

#[tokio::test]
async fn health_reports_unreachable_database() -> Result<()> {
    let state = AppState::new(
        Arc::new(test_config(&[])?),
        Arc::new(UnavailableStore),
        Arc::new(UnavailableStore),
    );

    let res = app(state)
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "database unavailable");
    assert_eq!(body["data"]["database"]["account"], "unavailable");
    Ok(())
}

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let server = common::spawn_server().await?;

    let body: Value = server.get("/").await?.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "game-progress-api");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_enveloped_404_with_cors() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.get("/no/such/route").await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn preflight_is_answered_for_any_origin() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .request(reqwest::Method::OPTIONS, server.url("/auth/login"))
        .header("origin", "http://game.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await?;

    assert!(res.status().is_success(), "unexpected status: {}", res.status());
    assert_eq!(
        res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("*")
    );
    Ok(())
}

#[tokio::test]
async fn slow_request_times_out_in_error_envelope() -> Result<()> {
    let state = AppState::new(
        Arc::new(test_config(&[("API_REQUEST_TIMEOUT_SECS", "1")])?),
        Arc::new(MemoryAccountStore::new()),
        Arc::new(StalledContent),
    );

    let res = app(state)
        .oneshot(Request::builder().uri("/stage/ST002").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(
        res.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "REQUEST_TIMEOUT");
    assert_eq!(body["error"], "Request timed out");
    Ok(())
}

#[tokio::test]
async fn zero_request_timeout_is_refused_at_startup() {
    assert!(test_config(&[("API_REQUEST_TIMEOUT_SECS", "0")]).is_err());
}

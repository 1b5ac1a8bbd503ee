#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use game_progress_api::database::models::{CardRow, Level, MonsterRow, Stage};
use game_progress_api::testing::{
    memory_state, test_config, MemoryAccountStore, MemoryContentStore, UnavailableStore,
};
use game_progress_api::{app, AppState};

pub struct TestServer {
    pub base_url: String,
    pub accounts: Arc<MemoryAccountStore>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Register through the API and return the new uid
    pub async fn register(&self, id: &str, pw: &str, name: &str) -> Result<i64> {
        let res = self
            .post_json("/auth/register", &json!({ "id": id, "pw": pw, "name": name }))
            .await?;
        anyhow::ensure!(
            res.status() == reqwest::StatusCode::CREATED,
            "register returned {}",
            res.status()
        );
        let body: Value = res.json().await?;
        body["data"]["uid"].as_i64().context("register response without uid")
    }
}

/// Serve `state` on an ephemeral local port for the lifetime of the test runtime
pub async fn serve(state: AppState) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app(state)).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    Ok(format!("http://{}", addr))
}

/// Server over empty accounts and the seeded content tables
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(&[]).await
}

pub async fn spawn_server_with(overrides: &[(&str, &str)]) -> Result<TestServer> {
    let config = test_config(overrides)?;
    let accounts = Arc::new(MemoryAccountStore::new());
    let content = Arc::new(seed_content());
    let base_url = serve(memory_state(config, accounts.clone(), content)).await?;

    Ok(TestServer {
        base_url,
        accounts,
        client: reqwest::Client::new(),
    })
}

/// Base URL of a server whose account and content stores both fail
pub async fn spawn_unavailable_server() -> Result<String> {
    let state = AppState::new(
        Arc::new(test_config(&[])?),
        Arc::new(UnavailableStore),
        Arc::new(UnavailableStore),
    );
    serve(state).await
}

/// A store failure answers 500 with the generic message and nothing from the driver
pub async fn assert_store_failure(res: reqwest::Response) -> Result<()> {
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["error"], "Database error occurred");

    let text = body.to_string().to_lowercase();
    assert!(!text.contains("pool"), "driver detail leaked: {}", text);
    assert!(!text.contains("timed out"), "driver detail leaked: {}", text);
    Ok(())
}

pub fn seed_content() -> MemoryContentStore {
    MemoryContentStore::new()
        .with_stage(Stage {
            stage_code: "ST002".into(),
            stage_name: "Dark Forest".into(),
            monster_count: 2,
            monster_code1: Some("MON001".into()),
            monster_code2: Some("MON002".into()),
            monster_code3: None,
            prerequisite_stage: Some("ST001".into()),
        })
        .with_monster(MonsterRow {
            monster_code: "MON001".into(),
            monster_name: "Slime".into(),
            grade: "normal".into(),
            hp: 30,
            atk: 4,
            reward_exp: 5,
        })
        .with_monster(MonsterRow {
            monster_code: "MON999".into(),
            monster_name: "Glitch".into(),
            grade: "Legendary".into(),
            hp: 1,
            atk: 1,
            reward_exp: 0,
        })
        .with_card(CardRow {
            card_code: "CARD01".into(),
            card_name: "Strike".into(),
            card_type: "Attack".into(),
            cost: 1,
            effect_value: 6,
            description: "Deal 6 damage".into(),
        })
        .with_level(Level {
            level_value: 2,
            required_exp: 100,
            hp: 120,
            atk: 12,
        })
}

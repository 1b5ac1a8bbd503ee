mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn register_then_login_returns_default_profile() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .post_json("/auth/register", &json!({ "id": "hero1", "pw": "pass123", "name": "Hero" }))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "hero1");
    assert_eq!(body["data"]["message"], "Registration successful");

    let res = server
        .post_json("/auth/login", &json!({ "id": "hero1", "pw": "pass123" }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    let profile = &body["data"];
    assert_eq!(profile["name"], "Hero");
    assert_eq!(profile["level"], 1);
    assert_eq!(profile["exp"], 0);
    assert_eq!(profile["hp"], 100);
    assert_eq!(profile["atk"], 10);
    assert_eq!(profile["clearedStageCode"], Value::Null);
    assert!(profile.get("pw").is_none());
    assert!(profile.get("passwordHash").is_none());
    Ok(())
}

#[tokio::test]
async fn password_is_stored_as_bcrypt_hash() -> Result<()> {
    let server = common::spawn_server().await?;
    server.register("hero1", "pass123", "Hero").await?;

    let stored = server.accounts.get("hero1").expect("registered user is stored");
    assert_ne!(stored.password_hash, "pass123");
    assert!(stored.password_hash.starts_with("$2"));
    Ok(())
}

#[tokio::test]
async fn unknown_id_and_wrong_password_are_indistinguishable() -> Result<()> {
    let server = common::spawn_server().await?;
    server.register("hero1", "pass123", "Hero").await?;

    let wrong_pw = server
        .post_json("/auth/login", &json!({ "id": "hero1", "pw": "nope" }))
        .await?;
    let unknown = server
        .post_json("/auth/login", &json!({ "id": "ghost", "pw": "pass123" }))
        .await?;

    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw.text().await?, unknown.text().await?);
    Ok(())
}

#[tokio::test]
async fn duplicate_id_is_conflict() -> Result<()> {
    let server = common::spawn_server().await?;
    server.register("hero1", "pass123", "Hero").await?;

    let res = server
        .post_json("/auth/register", &json!({ "id": "hero1", "pw": "other", "name": "Other" }))
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "CONFLICT");

    // First registration still logs in
    let res = server
        .post_json("/auth/login", &json!({ "id": "hero1", "pw": "pass123" }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn concurrent_registrations_create_one_account() -> Result<()> {
    let server = common::spawn_server().await?;
    let body = json!({ "id": "racer", "pw": "pass123", "name": "Racer" });

    let (a, b) = tokio::join!(
        server.post_json("/auth/register", &body),
        server.post_json("/auth/register", &body)
    );
    let mut statuses = vec![a?.status(), b?.status()];
    statuses.sort();

    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(server.accounts.len(), 1);
    Ok(())
}

#[tokio::test]
async fn client_key_casing_is_accepted() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .post_json("/auth/register", &json!({ "ID": "hero2", "PW": "pass123", "Name": "Hero" }))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = server
        .post_json("/auth/login", &json!({ "Id": "hero2", "Pw": "pass123" }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/auth/login"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Invalid request format");

    let res = server.post_json("/auth/login", &json!({ "id": "hero1" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .post_json("/auth/register", &json!({ "id": "  ", "pw": "pass123", "name": "Hero" }))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(server.accounts.is_empty());
    Ok(())
}

#[tokio::test]
async fn oversized_body_is_rejected() -> Result<()> {
    let server = common::spawn_server_with(&[("API_MAX_REQUEST_SIZE_BYTES", "64")]).await?;

    let res = server
        .post_json(
            "/auth/register",
            &json!({ "id": "hero1", "pw": "x".repeat(256), "name": "Hero" }),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(server.accounts.is_empty());
    Ok(())
}

#[tokio::test]
async fn store_failure_on_login_and_register_is_generic_500() -> Result<()> {
    let base_url = common::spawn_unavailable_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "id": "hero1", "pw": "pass123" }))
        .send()
        .await?;
    common::assert_store_failure(res).await?;

    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&json!({ "id": "hero1", "pw": "pass123", "name": "Hero" }))
        .send()
        .await?;
    common::assert_store_failure(res).await?;
    Ok(())
}

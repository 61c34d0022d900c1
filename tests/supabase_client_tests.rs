// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase HTTP client tests against a mock server.

use lectura::db::{ProfileStore, SupabaseProfiles};
use lectura::error::ProviderError;
use lectura::models::{Credentials, Profile};
use lectura::services::{AuthProvider, SupabaseAuth};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON_KEY: &str = "test_anon_key";

fn session_body() -> serde_json::Value {
    json!({
        "access_token": "test_access_token",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "test_refresh_token",
        "user": {
            "id": "test_user_id",
            "email": "test@example.com",
            "role": "authenticated"
        }
    })
}

fn auth_client(server: &MockServer) -> SupabaseAuth {
    SupabaseAuth::new(reqwest::Client::new(), &server.uri(), ANON_KEY)
}

#[tokio::test]
async fn test_sign_in_with_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", ANON_KEY))
        .and(body_json(json!({
            "email": "test@example.com",
            "password": "password123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .expect(1)
        .mount(&server)
        .await;

    let session = auth_client(&server)
        .sign_in_with_password(&Credentials::new("test@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(session.access_token, "test_access_token");
    assert_eq!(session.expires_in, Some(3600));
    assert_eq!(session.user.id, "test_user_id");
    assert_eq!(session.user.email.as_deref(), Some("test@example.com"));
}

#[tokio::test]
async fn test_sign_in_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let err = auth_client(&server)
        .sign_in_with_password(&Credentials::new("test@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Api { status: 400, .. }));
    assert_eq!(err.message(), Some("Invalid login credentials"));
}

#[tokio::test]
async fn test_sign_up_accepts_session_or_user_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({
            "email": "with-session@example.com",
            "password": "password123",
            "data": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({
            "email": "confirm@example.com",
            "password": "password123",
            "data": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pending_user_id",
            "email": "confirm@example.com"
        })))
        .mount(&server)
        .await;

    let client = auth_client(&server);
    let user = client
        .sign_up(
            &Credentials::new("with-session@example.com", "password123"),
            json!({}),
        )
        .await
        .unwrap();
    assert_eq!(user.id, "test_user_id");

    let user = client
        .sign_up(
            &Credentials::new("confirm@example.com", "password123"),
            json!({}),
        )
        .await
        .unwrap();
    assert_eq!(user.id, "pending_user_id");
}

#[tokio::test]
async fn test_sign_up_duplicate_uses_msg_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "msg": "User already registered"
        })))
        .mount(&server)
        .await;

    let err = auth_client(&server)
        .sign_up(&Credentials::new("taken@example.com", "pw"), json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.message(), Some("User already registered"));
}

#[tokio::test]
async fn test_get_session_resolves_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "test_user_id",
            "email": "test@example.com"
        })))
        .mount(&server)
        .await;

    let session = auth_client(&server)
        .get_session("good-token")
        .await
        .unwrap()
        .expect("session present");

    assert_eq!(session.access_token, "good-token");
    assert_eq!(session.user.id, "test_user_id");
}

#[tokio::test]
async fn test_rejected_token_is_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "msg": "invalid JWT: token is expired"
        })))
        .mount(&server)
        .await;

    let client = auth_client(&server);
    assert!(client.get_session("expired").await.unwrap().is_none());
    assert!(client.get_user("expired").await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_is_not_treated_as_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = auth_client(&server).get_session("token").await.unwrap_err();

    assert!(matches!(err, ProviderError::Api { status: 503, message: None }));
}

#[tokio::test]
async fn test_sign_out_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer live-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    auth_client(&server).sign_out("live-token").await.unwrap();
}

fn profile() -> Profile {
    Profile {
        id: "test_user_id".to_string(),
        full_name: "Sarah Chen".to_string(),
        username: "schen".to_string(),
        bio: String::new(),
        education_level: "University".to_string(),
        subjects: None,
        study_goals: None,
        onboarding_completed: None,
        updated_at: "2026-01-01T00:00:00.000Z".to_string(),
    }
}

#[tokio::test]
async fn test_upsert_profile_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("on_conflict", "id"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer user-token"))
        .and(header("prefer", "resolution=merge-duplicates,return=minimal"))
        .and(body_json(json!({
            "id": "test_user_id",
            "full_name": "Sarah Chen",
            "username": "schen",
            "bio": "",
            "education_level": "University",
            "updated_at": "2026-01-01T00:00:00.000Z"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    SupabaseProfiles::new(reqwest::Client::new(), &server.uri(), ANON_KEY)
        .upsert_profile("user-token", &profile())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upsert_profile_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"profiles_username_key\""
        })))
        .mount(&server)
        .await;

    let err = SupabaseProfiles::new(reqwest::Client::new(), &server.uri(), ANON_KEY)
        .upsert_profile("user-token", &profile())
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Api { status: 409, .. }));
    assert_eq!(
        err.message(),
        Some("duplicate key value violates unique constraint \"profiles_username_key\"")
    );
}

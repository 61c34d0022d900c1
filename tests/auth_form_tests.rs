// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-in / sign-up form tests through the full router.

use axum::http::StatusCode;
use lectura::config::Config;
use lectura::services::ProviderCall;

mod common;

#[tokio::test]
async fn test_sign_in_sets_session_and_redirects() {
    let app = common::create_test_app();
    app.auth.add_user("sarah@example.com", "password123");

    let response = app
        .post_form(
            "/auth",
            "mode=login&email=sarah%40example.com&password=password123",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/dashboard");

    let set_cookies = common::set_cookie_headers(&response);
    let session = common::find_cookie(&set_cookies, "lectura_session");
    assert!(session.contains("HttpOnly"));
    assert!(session.contains("SameSite=Lax"));
    assert!(session.contains("Max-Age=3600"));
    assert!(!session.contains("Secure"));

    // Following the redirect shows the toast exactly once
    let cookie = format!(
        "{}; {}",
        common::cookie_pair(&session),
        common::cookie_pair(&common::find_cookie(&set_cookies, "lectura_flash"))
    );
    let dashboard = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
    let removed = common::find_cookie(&common::set_cookie_headers(&dashboard), "lectura_flash");
    assert!(removed.contains("Max-Age=0"));
    let body = common::body_string(dashboard).await;
    assert!(body.contains("Successfully signed in!"));
    assert!(body.contains("sarah@example.com"));
}

#[tokio::test]
async fn test_wrong_password_returns_to_sign_in_with_error() {
    let app = common::create_test_app();
    app.auth.add_user("sarah@example.com", "password123");

    let response = app
        .post_form(
            "/auth",
            "mode=login&email=sarah%40example.com&password=nope",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/auth?mode=login");

    let set_cookies = common::set_cookie_headers(&response);
    assert!(set_cookies
        .iter()
        .all(|c| !c.starts_with("lectura_session=")));

    let flash = common::cookie_pair(&common::find_cookie(&set_cookies, "lectura_flash"));
    let page = app.get("/auth?mode=login", Some(&flash)).await;
    let body = common::body_string(page).await;
    assert!(body.contains("Invalid login credentials"));
    assert!(body.contains(r#"class="toast error""#));
}

#[tokio::test]
async fn test_sign_up_password_mismatch_makes_no_provider_call() {
    let app = common::create_test_app();

    let response = app
        .post_form(
            "/auth",
            "mode=signup&email=new%40example.com&password=one&confirmPassword=two",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/auth?mode=signup");
    assert!(app.auth.calls().is_empty());

    let flash = common::cookie_pair(&common::find_cookie(
        &common::set_cookie_headers(&response),
        "lectura_flash",
    ));
    let body = common::body_string(app.get("/auth?mode=signup", Some(&flash)).await).await;
    assert!(body.contains("Passwords do not match"));
}

#[tokio::test]
async fn test_sign_up_creates_account_then_signs_in() {
    let app = common::create_test_app();

    let response = app
        .post_form(
            "/auth",
            "mode=signup&email=new%40example.com&password=secret1&confirmPassword=secret1",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/dashboard");
    assert_eq!(
        app.auth.calls(),
        vec![
            ProviderCall::SignUp {
                email: "new@example.com".to_string()
            },
            ProviderCall::SignIn {
                email: "new@example.com".to_string()
            },
        ]
    );

    let set_cookies = common::set_cookie_headers(&response);
    common::find_cookie(&set_cookies, "lectura_session");
    let flash = common::cookie_pair(&common::find_cookie(&set_cookies, "lectura_flash"));
    let body = common::body_string(app.get("/", Some(&flash)).await).await;
    assert!(body.contains("Account created successfully!"));
}

#[tokio::test]
async fn test_sign_up_existing_account_shows_provider_message() {
    let app = common::create_test_app();
    app.auth.add_user("taken@example.com", "secret1");

    let response = app
        .post_form(
            "/auth",
            "mode=signup&email=taken%40example.com&password=secret1&confirmPassword=secret1",
            None,
        )
        .await;

    assert_eq!(common::location(&response), "/auth?mode=signup");
    let flash = common::cookie_pair(&common::find_cookie(
        &common::set_cookie_headers(&response),
        "lectura_flash",
    ));
    let body = common::body_string(app.get("/auth?mode=signup", Some(&flash)).await).await;
    assert!(body.contains("User already registered"));
}

#[tokio::test]
async fn test_provider_error_without_message_uses_fallback() {
    let app = common::create_test_app();
    app.auth.fail_next_sign_in(None);

    let response = app
        .post_form(
            "/auth",
            "mode=login&email=a%40example.com&password=pw",
            None,
        )
        .await;

    let flash = common::cookie_pair(&common::find_cookie(
        &common::set_cookie_headers(&response),
        "lectura_flash",
    ));
    let body = common::body_string(app.get("/auth", Some(&flash)).await).await;
    assert!(body.contains("An error occurred"));
}

#[tokio::test]
async fn test_auth_page_mode_selection() {
    let app = common::create_test_app();

    let signup = common::body_string(app.get("/auth?mode=signup", None).await).await;
    assert!(signup.contains(r#"name="confirmPassword""#));

    for uri in ["/auth", "/auth?mode=login", "/auth?mode=other"] {
        let body = common::body_string(app.get(uri, None).await).await;
        assert!(!body.contains("confirmPassword"), "{uri}");
    }
}

#[tokio::test]
async fn test_https_site_sets_secure_cookies() {
    let app = common::create_test_app_with_config(Config {
        site_url: "https://lectura.app".to_string(),
        ..Config::default()
    });
    app.auth.add_user("sarah@example.com", "password123");

    let response = app
        .post_form(
            "/auth",
            "mode=login&email=sarah%40example.com&password=password123",
            None,
        )
        .await;

    let set_cookies = common::set_cookie_headers(&response);
    assert!(common::find_cookie(&set_cookies, "lectura_session").contains("Secure"));
    assert!(common::find_cookie(&set_cookies, "lectura_flash").contains("Secure"));
}

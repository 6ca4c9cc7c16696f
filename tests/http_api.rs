// tests/http_api.rs
use axum::http::{Method, StatusCode};
use quill_core::domain::access::Role;
use serde_json::json;

mod support;

use support::{
    EDITOR_ACCOUNT_ID, EDITOR_PASSWORD, READER_ACCOUNT_ID, TestApp, long_content, send,
};

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;
    let (status, body) = send(app.router(), Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn login_returns_token_and_account() {
    let app = TestApp::new().await;
    let (status, body) = send(
        app.router(),
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "editor@example.com", "password": EDITOR_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"]["token"], format!("token-{EDITOR_ACCOUNT_ID}"));
    assert_eq!(body["token"]["expiresIn"], 3600);
    assert_eq!(body["account"]["role"]["name"], Role::EDITOR);
    assert!(body["account"].get("passwordHash").is_none());
}

#[tokio::test]
async fn bad_credentials_use_the_error_envelope() {
    let app = TestApp::new().await;
    let (status, body) = send(
        app.router(),
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "email": "editor@example.com", "password": "WrongPass1" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({
            "statusCode": 401,
            "error": "Unauthorized",
            "message": "Invalid credentials"
        })
    );
}

#[tokio::test]
async fn protected_routes_need_a_valid_token() {
    let app = TestApp::new().await;

    let (status, body) = send(app.router(), Method::GET, "/articles", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing Authorization header");

    let (status, _) = send(app.router(), Method::GET, "/articles", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_manages_accounts() {
    let app = TestApp::new().await;
    let admin = TestApp::token(&app.admin);
    let reader_role = app.role_id(Role::READER).await;

    let (status, body) = send(
        app.router(),
        Method::POST,
        "/accounts",
        Some(&admin),
        Some(json!({
            "name": "Nina New",
            "email": "nina@example.com",
            "password": "Password123",
            "roleId": reader_role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["account"]["email"], "nina@example.com");
    let new_id = body["account"]["id"].as_str().unwrap().to_owned();
    assert_eq!(body["token"]["token"], format!("token-{new_id}"));

    let (status, body) = send(
        app.router(),
        Method::POST,
        "/accounts",
        Some(&admin),
        Some(json!({
            "name": "Nina Again",
            "email": "nina@example.com",
            "password": "Password123",
            "roleId": reader_role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["statusCode"], 409);

    let (status, body) = send(
        app.router(),
        Method::POST,
        "/accounts",
        Some(&admin),
        Some(json!({
            "name": "Weak Password",
            "email": "weak@example.com",
            "password": "short",
            "roleId": reader_role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Password must be at least 8 characters long");

    let (status, body) = send(
        app.router(),
        Method::GET,
        "/accounts?page=1&limit=2",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["total"], 4);
    assert_eq!(body["meta"]["totalPages"], 2);
    assert_eq!(body["meta"]["hasNextPage"], true);

    let (status, body) = send(
        app.router(),
        Method::PATCH,
        &format!("/accounts/{new_id}"),
        Some(&admin),
        Some(json!({ "name": "Nina Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nina Renamed");

    let (status, body) = send(
        app.router(),
        Method::DELETE,
        &format!("/accounts/{new_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(
        app.router(),
        Method::GET,
        &format!("/accounts/{new_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn account_permissions_are_enforced() {
    let app = TestApp::new().await;
    let admin = TestApp::token(&app.admin);
    let reader = TestApp::token(&app.reader);

    let (status, body) = send(app.router(), Method::GET, "/accounts", Some(&reader), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");
    assert_eq!(body["message"], "You are not allowed to list accounts");

    let (status, body) = send(
        app.router(),
        Method::DELETE,
        &format!("/accounts/{}", app.admin.id()),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You cannot delete your own account");

    let (status, _) = send(
        app.router(),
        Method::PUT,
        &format!("/accounts/{READER_ACCOUNT_ID}/password"),
        Some(&admin),
        Some(json!({ "password": "Override99" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        app.router(),
        Method::PUT,
        &format!("/accounts/{READER_ACCOUNT_ID}/password"),
        Some(&admin),
        Some(json!({ "password": "weak" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You are not allowed to update the account password");

    let (status, _) = send(
        app.router(),
        Method::PUT,
        &format!("/accounts/{READER_ACCOUNT_ID}/password"),
        Some(&reader),
        Some(json!({ "password": "MyOwnPass99" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        app.router(),
        Method::GET,
        "/accounts/not-a-uuid",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_account_token_stops_working() {
    let app = TestApp::new().await;
    let admin = TestApp::token(&app.admin);
    let reader = TestApp::token(&app.reader);

    let (status, _) = send(
        app.router(),
        Method::DELETE,
        &format!("/accounts/{READER_ACCOUNT_ID}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(app.router(), Method::GET, "/articles", Some(&reader), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Account not found");
}

#[tokio::test]
async fn article_lifecycle() {
    let app = TestApp::new().await;
    let editor = TestApp::token(&app.editor);
    let reader = TestApp::token(&app.reader);

    let (status, body) = send(
        app.router(),
        Method::POST,
        "/articles",
        Some(&editor),
        Some(json!({ "title": "Ownership Explained", "content": long_content() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "ownership-explained-00000001");
    assert_eq!(body["author"]["id"], EDITOR_ACCOUNT_ID);
    let id = body["id"].as_str().unwrap().to_owned();

    let (status, body) = send(
        app.router(),
        Method::GET,
        "/articles/slug/ownership-explained-00000001",
        Some(&reader),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, body) = send(
        app.router(),
        Method::PATCH,
        &format!("/articles/{id}"),
        Some(&reader),
        Some(json!({ "title": "Reader Edit" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You are not allowed to update articles");

    let (status, body) = send(
        app.router(),
        Method::PATCH,
        &format!("/articles/{id}"),
        Some(&editor),
        Some(json!({ "title": "Borrowing Explained" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "borrowing-explained-00000001");

    let (status, body) = send(app.router(), Method::GET, "/articles?limit=5", Some(&reader), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["limit"], 5);
    assert_eq!(body["data"][0]["title"], "Borrowing Explained");

    let (status, _) = send(
        app.router(),
        Method::DELETE,
        &format!("/articles/{id}"),
        Some(&reader),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        app.router(),
        Method::DELETE,
        &format!("/articles/{id}"),
        Some(&editor),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        app.router(),
        Method::GET,
        &format!("/articles/{id}"),
        Some(&reader),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Article with id '{id}' not found"));
}

#[tokio::test]
async fn article_validation_and_paging_errors_are_422() {
    let app = TestApp::new().await;
    let editor = TestApp::token(&app.editor);

    let (status, body) = send(
        app.router(),
        Method::POST,
        "/articles",
        Some(&editor),
        Some(json!({ "title": "Tiny", "content": long_content() })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Title must be at least 5 characters long");

    let (status, body) = send(
        app.router(),
        Method::GET,
        "/articles?limit=500",
        Some(&editor),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Limit must be between 1 and 100");
}

#[tokio::test]
async fn page_far_past_the_end_is_empty() {
    let app = TestApp::new().await;
    let admin = TestApp::token(&app.admin);

    for path in ["/articles", "/accounts"] {
        let (status, body) = send(
            app.router(),
            Method::GET,
            &format!("{path}?page=18446744073709551615&limit=100"),
            Some(&admin),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body["data"], json!([]), "{path}");
        assert_eq!(body["meta"]["hasNextPage"], false, "{path}");
    }
}

// tests/support/helpers.rs
use super::mocks::{
    CountingIdGenerator, DummyClock, PlainPasswordHasher, SteppingClock, StaticTokenManager,
    fixed_now, token_for,
};
use axum::{
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use quill_core::{
    application::services::{ApplicationServices, ServiceDependencies},
    domain::{
        access::{Role, RoleRepository},
        account::{Account, AccountRecord, AccountRepository},
        article::ArticleRepository,
    },
    infrastructure::{
        repositories::{
            InMemoryAccountRepository, InMemoryArticleRepository, InMemoryRoleRepository,
        },
        seed::{self, AdminSeed},
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const EDITOR_ACCOUNT_ID: &str = "22222222-2222-4222-a222-222222222222";
pub const READER_ACCOUNT_ID: &str = "33333333-3333-4333-b333-333333333333";
pub const EDITOR_PASSWORD: &str = "EditorPass1";

/// In-memory wiring with the default roles, the seeded administrator and one
/// editor and one reader account.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub accounts: Arc<dyn AccountRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub admin: Arc<Account>,
    pub editor: Arc<Account>,
    pub reader: Arc<Account>,
}

impl TestApp {
    pub async fn new() -> Self {
        let accounts: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
        let roles: Arc<dyn RoleRepository> = Arc::new(InMemoryRoleRepository::new());
        let articles: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());

        let admin = seed::seed_defaults(
            roles.as_ref(),
            accounts.as_ref(),
            &PlainPasswordHasher,
            &DummyClock,
            &AdminSeed::default(),
        )
        .await
        .expect("seed defaults")
        .expect("administrator seeded");

        let editor = insert_account(
            accounts.as_ref(),
            roles.as_ref(),
            EDITOR_ACCOUNT_ID,
            "Eddie Editor",
            "editor@example.com",
            Role::EDITOR,
        )
        .await;
        let reader = insert_account(
            accounts.as_ref(),
            roles.as_ref(),
            READER_ACCOUNT_ID,
            "Rita Reader",
            "reader@example.com",
            Role::READER,
        )
        .await;

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            account_repo: Arc::clone(&accounts),
            role_repo: Arc::clone(&roles),
            article_repo: Arc::clone(&articles),
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(StaticTokenManager),
            id_generator: Arc::new(CountingIdGenerator::default()),
            clock: Arc::new(SteppingClock::default()),
        }));

        Self {
            services,
            accounts,
            roles,
            articles,
            admin: Arc::new(admin),
            editor: Arc::new(editor),
            reader: Arc::new(reader),
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &["*".to_string()],
        )
    }

    pub async fn role_id(&self, name: &str) -> String {
        self.roles
            .find_by_name(name)
            .await
            .expect("role lookup")
            .expect("role seeded")
            .id()
            .to_string()
    }

    pub fn token(account: &Account) -> String {
        token_for(account.id())
    }
}

async fn insert_account(
    accounts: &dyn AccountRepository,
    roles: &dyn RoleRepository,
    id: &str,
    name: &str,
    email: &str,
    role: &str,
) -> Account {
    let role = roles
        .find_by_name(role)
        .await
        .expect("role lookup")
        .expect("role seeded");
    let account = Account::restore(AccountRecord {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        password_hash: format!("plain:{EDITOR_PASSWORD}"),
        created_at: fixed_now(),
        updated_at: fixed_now(),
        role: Some(role),
    })
    .expect("valid fixture account");
    accounts.insert(account).await.expect("insert fixture account")
}

/// 120 characters, comfortably above the minimum article length.
pub fn long_content() -> String {
    "Rust lets you write fast and reliable software. This paragraph exists to satisfy the minimum article length rule."
        .chars()
        .chain(std::iter::repeat('!'))
        .take(120)
        .collect()
}

/// Sends one request through the router and returns the status and JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(
    app: axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

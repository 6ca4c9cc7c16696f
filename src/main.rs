use anyhow::Result;
use quill_core::{
    application::{
        ports::{
            id::IdGenerator,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        services::{ApplicationServices, ServiceDependencies},
    },
    config::AppConfig,
    domain::{access::RoleRepository, account::AccountRepository, article::ArticleRepository},
    infrastructure::{
        repositories::{
            InMemoryAccountRepository, InMemoryArticleRepository, InMemoryRoleRepository,
        },
        security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
        seed,
        system::{SystemClock, UuidGenerator},
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let account_repo: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
    let role_repo: Arc<dyn RoleRepository> = Arc::new(InMemoryRoleRepository::new());
    let article_repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

    seed::seed_defaults(
        role_repo.as_ref(),
        account_repo.as_ref(),
        password_hasher.as_ref(),
        clock.as_ref(),
        config.admin(),
    )
    .await?;

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        account_repo,
        role_repo,
        article_repo,
        password_hasher,
        token_manager,
        id_generator,
        clock,
    }));

    let app = build_router(HttpState { services }, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

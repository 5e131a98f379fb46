use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use buzon::config::{self, Config};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Missing SMTP credentials abort here, before anything is bound.
    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        smtp_server = %cfg.smtp_server,
        smtp_port = cfg.smtp_port,
        backup_dir = %cfg.backup_dir.display(),
        loglevel = cfg.loglevel()
    );
    if cfg.secret_key == config::INSECURE_DEFAULT_SECRET {
        warn!("SECRET_KEY is the insecure development default; set it for production");
    }

    let store = buzon::db::spawn(&cfg.database_url).await?;
    let mailer = buzon::mail::Mailer::from_config(&cfg)?;
    let backup = buzon::backup::BackupWriter::new(&cfg.backup_dir)?;

    let state = buzon::router::BuzonState::new(store, mailer, backup);
    let app = buzon::router::buzon_router(state);

    let listener = TcpListener::bind(&cfg.bind_addr).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install ctrl-c handler");
    }
    info!("shutdown signal received");
}

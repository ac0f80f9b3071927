use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_intake::infrastructure::tls;
use contact_intake::{api::create_router, ApplicationBuilder, Config};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_tracing();
    tls::install_crypto_provider();

    info!("Starting contact intake service");

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;
    info!(
        listen_addr = %config.listen_addr,
        tls = config.tls_enabled(),
        static_dir = %config.static_dir.display(),
        "Configuration loaded and validated"
    );

    let addr: SocketAddr = config.listen_addr.parse()?;

    let builder = ApplicationBuilder::new(config.clone())
        .with_database()
        .await?
        .with_infrastructure()
        .await?;
    let pool = builder.pool().cloned();
    let state = builder.build()?;
    state.security_headers.validate()?;

    let app = create_router(state);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    match (&config.tls_cert_path, &config.tls_key_path) {
        (Some(cert), Some(key)) => {
            let rustls_config = tls::load_rustls_config(cert, key).await.map_err(|e| {
                tracing::error!("Failed to load TLS certificate: {}", e);
                e
            })?;
            info!(%addr, "Listening on https");
            axum_server::bind_rustls(addr, rustls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        _ => {
            info!(%addr, "Listening on http");
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
    }

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }
    info!("Shutdown complete");

    Ok(())
}

/// `RUST_LOG` filter, default `info`; JSON lines when `LOG_FORMAT=json`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    }
}

async fn graceful_shutdown(handle: Handle) {
    shutdown_signal().await;
    info!("Shutdown signal received, draining connections");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

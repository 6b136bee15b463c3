use anyhow::{anyhow, Context, Result};
use log::info;
use showcase_core::{init_logging, open_store};
use showcase_server::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("failed to read configuration")?;
    init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    let store = open_store().context("failed to seed record store")?;
    let app = router(AppState::new(store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        "event=server_start module=server status=ok addr={} version={}",
        addr,
        showcase_core::core_version()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!(
            "event=server_stop module=server status=error error_code=signal_failed error={}",
            err
        );
        std::future::pending::<()>().await;
    }
}

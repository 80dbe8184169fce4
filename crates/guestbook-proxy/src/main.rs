use guestbook_proxy::{router, ProxySettings, ProxyState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging, one event per line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let settings = ProxySettings::from_env()?;
    let state = ProxyState::new(&settings);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    tracing::info!(
        addr = %settings.addr,
        upstream = %settings.upstream_url,
        "guestbook proxy listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;

    tracing::info!("guestbook proxy stopped");
    Ok(())
}

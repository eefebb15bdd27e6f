use anyhow::Context as _;
use clap::Parser;

use bookpage::app::routes::router;
use bookpage::app::state::AppState;
use bookpage::cli::AppArgs;
use bookpage::config::SiteConfig;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    bookpage::logging::init("info")?;

    let args = AppArgs::parse();
    tracing::info!(?args, "starting bookpage-app");

    let config = SiteConfig::from_env();
    tracing::info!(?config, "site config");

    let source = args.source.build().await?;
    let app = router(AppState::new(source, config));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .map_err(|err| anyhow::anyhow!("bind {}: {err}", args.addr))?;
    tracing::info!(addr = %args.addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

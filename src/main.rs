use clap::Parser;
use galaxor::api::create_router;
use galaxor::config::Config;
use galaxor::generation_client::GeminiClient;
use galaxor::relay::Relay;
use galaxor::search_client::ExaClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "galaxor", version, about = "Travel search relay")]
struct Args {
    /// Address to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Directory with the built front end, overrides STATIC_DIR
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.static_dir.is_some() {
        config.static_dir = args.static_dir;
    }

    let search = ExaClient::new(&config.exa_base_url, &config.exa_api_key)?;
    let generation = GeminiClient::new(
        &config.gemini_base_url,
        &config.gemini_model,
        &config.gemini_api_key,
    )?;
    let relay = Arc::new(Relay::new(Arc::new(search), Arc::new(generation)));

    let app = create_router(relay, config.static_dir.clone());

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

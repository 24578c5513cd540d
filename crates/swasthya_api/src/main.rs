use swasthya_api::{ServerConfig, app};
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("swasthya_api listening on http://{addr}");
    axum::serve(listener, app()).await?;
    Ok(())
}

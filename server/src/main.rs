//! Server binary: read `NOTICES_*` configuration, install tracing, serve.

use notices_server::config::ServerConfig;
use notices_server::logging::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    init_tracing();

    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on http://{}", config.bind_addr);
    notices_server::run(listener, config).await
}

#![forbid(unsafe_code)]

use std::{env, net::SocketAddr, sync::Arc};

use stringvault_engine::StringStore;
use stringvault_server::router;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let port = parse_port_from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // One store instance for the process; state lives only in memory and
    // is gone on restart.
    let store = Arc::new(StringStore::new());
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("stringvault_http listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn parse_port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(5009)
}

//! Bootstrap binary: initializes logging, loads `.env`, connects to the
//! database, and creates the schema. The request boundary (HTTP or otherwise)
//! is expected to link against the library crate and reuse the connection.

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tuckshop::config::database;
use tuckshop::errors::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars can also be set externally; a missing .env is not fatal.
    dotenv().ok();

    let db = database::create_connection().await?;
    info!(url = %database::get_database_url(), "connected to database");

    database::create_tables(&db).await?;
    info!("schema initialized");

    Ok(())
}

//! Service entry point: wires the validation endpoint, health probes, and
//! OpenAPI docs.

use sipy_backend::server::{self, ServerSettings};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::from_env()?;
    server::run(settings).await
}

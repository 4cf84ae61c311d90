use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use healthhelp_core::CoreConfig;
use healthhelp_core::config::{
    default_scheme_from_env_value, fallback_base_url_from_env_value,
    trust_forwarded_headers_from_env_value,
};

/// Main entry point for the HealthHelp serialization service
///
/// Resolves configuration once, then serves the REST router.
///
/// # Environment Variables
/// - `HH_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `HH_FALLBACK_BASE_URL`: base URL for file links when a request has no host
///   (default: "https://healthhelp-backend.onrender.com/")
/// - `HH_DEFAULT_SCHEME`: scheme for file links when the request does not state one
///   (default: "http")
/// - `HH_TRUST_FORWARDED_HEADERS`: honour `X-Forwarded-Host`/`X-Forwarded-Proto`; set only
///   behind a proxy that overwrites them (default: false)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value fails validation,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthhelp=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("HH_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let fallback_base_url =
        fallback_base_url_from_env_value(std::env::var("HH_FALLBACK_BASE_URL").ok())?;
    let default_scheme = default_scheme_from_env_value(std::env::var("HH_DEFAULT_SCHEME").ok())?;

    let trust_forwarded =
        trust_forwarded_headers_from_env_value(std::env::var("HH_TRUST_FORWARDED_HEADERS").ok())?;

    let cfg = Arc::new(
        CoreConfig::new(fallback_base_url, default_scheme)?
            .with_trusted_forwarded_headers(trust_forwarded),
    );

    tracing::info!("++ Starting HealthHelp REST on {}", rest_addr);
    tracing::info!("++ Fallback base URL {}", cfg.fallback_base_url());
    if cfg.trust_forwarded_headers() {
        tracing::info!("++ Trusting X-Forwarded-Host / X-Forwarded-Proto");
    }

    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

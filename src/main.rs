//! OpenSASE Lunar Calendar - Vietnamese lunisolar calendar service

use anyhow::Result;
use opensase_lunar_calendar::{api::{self, AppState}, Config};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let config = Config::from_env()?;
    tracing::info!(fallback = ?config.fallback, today_utc_offset = config.today_utc_offset, "loaded configuration");

    let app = api::router(AppState::from_config(&config)).layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive());

    tracing::info!("🚀 OpenSASE Lunar Calendar listening on 0.0.0.0:{}", config.port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?, app).await?;
    Ok(())
}

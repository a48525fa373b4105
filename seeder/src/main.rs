use anyhow::Context;
use common::settings::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("Failed to load configuration")?;

    let default_filter = if settings.debug {
        "seeder=debug,common=debug"
    } else {
        "seeder=info,common=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let report = seeder::run(&settings).await?;
    tracing::debug!("run finished: {:?}", report);

    Ok(())
}

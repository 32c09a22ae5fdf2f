use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn setup() -> eyre::Result<()> {
    // Diagnostics are opt-in: RUST_LOG overrides the quiet default
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_filter(env_filter))
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

use tracing::info;

/// Install the global tracing subscriber. Call once at application startup.
pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}

/// Load `.env` into the process environment if one exists.
pub fn init_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment from .env");
    }
}

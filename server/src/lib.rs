pub mod app;
pub mod config;
pub mod server;
pub mod services;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load .env and the runtime config.
pub fn init_config() -> AppConfig {
    load_dotenv();

    let config = AppConfig::load();
    tracing::info!(
        port = config.server_port,
        margin_mm = config.margin_mm,
        dpi = config.target_dpi,
        filter = %config.filter,
        content_fit = %config.content_fit,
        "Configuration loaded"
    );
    config
}

use std::sync::Arc;

use print_normalizer::PrintOptions;

use crate::config::AppConfig;

/// Application shared state accessible from axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Application configuration
    config: AppConfig,
    /// Print options derived from the configuration
    print_options: PrintOptions,
}

impl SharedState {
    /// Create shared state from a loaded config.
    pub fn new(config: AppConfig) -> Self {
        let print_options = config.print_options();
        Self {
            inner: Arc::new(SharedStateInner {
                config,
                print_options,
            }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Base print options; handlers clone and adjust per request.
    pub fn print_options(&self) -> &PrintOptions {
        &self.inner.print_options
    }
}

//! Runtime application configuration loaded from the environment.

use print_normalizer::{ContentFit, PrintOptions, ResampleFilter};

use super::defaults::get_default;
use super::validation::validate_setting;

/// Runtime configuration populated from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_port: u16,
    pub margin_mm: f64,
    pub target_dpi: u32,
    pub filter: ResampleFilter,
    pub content_fit: ContentFit,
    pub max_upload_mb: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            margin_mm: 0.0,
            target_dpi: print_normalizer::DEFAULT_DPI,
            filter: ResampleFilter::default(),
            content_fit: ContentFit::default(),
            max_upload_mb: 20,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing or empty keys take their default; invalid values are logged
    /// and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let value = lookup(key).unwrap_or_default();
            let value = value.trim();
            if value.is_empty() {
                return default_for(key);
            }
            match validate_setting(key, value) {
                Ok(()) => value.to_string(),
                Err(e) => {
                    tracing::warn!(key, value, "Invalid setting ({e}), using default");
                    default_for(key)
                }
            }
        };

        let d = Self::default();
        Self {
            server_port: parse_or(&g("SERVER_PORT"), d.server_port),
            margin_mm: parse_or(&g("PRINT_MARGIN_MM"), d.margin_mm),
            target_dpi: parse_or(&g("PRINT_TARGET_DPI"), d.target_dpi),
            filter: parse_or(&g("PRINT_FILTER"), d.filter),
            content_fit: parse_or(&g("PRINT_CONTENT_FIT"), d.content_fit),
            max_upload_mb: parse_or(&g("MAX_UPLOAD_MB"), d.max_upload_mb),
        }
    }

    /// Print options every request starts from.
    pub fn print_options(&self) -> PrintOptions {
        PrintOptions::new()
            .with_margin_mm(self.margin_mm)
            .with_target_dpi(self.target_dpi)
            .with_filter(self.filter)
            .with_content_fit(self.content_fit)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn default_for(key: &str) -> String {
    get_default(key).unwrap_or_default().to_string()
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

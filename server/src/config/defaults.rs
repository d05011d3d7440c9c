//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Every environment setting the server reads.
pub const DEFAULT_SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: "SERVER_PORT",
        default: "8080",
        description: "HTTP listen port",
    },
    SettingDef {
        key: "PRINT_MARGIN_MM",
        default: "0",
        description: "Page margin in millimeters (0 = edge to edge)",
    },
    SettingDef {
        key: "PRINT_TARGET_DPI",
        default: "300",
        description: "Resolution of the A4 pixel grid",
    },
    SettingDef {
        key: "PRINT_FILTER",
        default: "lanczos3",
        description: "Resampling kernel: lanczos3, catmullrom, gaussian, triangle, nearest",
    },
    SettingDef {
        key: "PRINT_CONTENT_FIT",
        default: "letterbox",
        description: "letterbox keeps the source aspect ratio, stretch fills the page",
    },
    SettingDef {
        key: "MAX_UPLOAD_MB",
        default: "20",
        description: "Request body limit for image uploads",
    },
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS
        .iter()
        .find(|d| d.key == key)
        .map(|d| d.default)
}

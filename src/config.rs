use log::Level;

/// Tuning for the scroll-linked step highlight.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightConfig {
    /// Fraction of a step element that must be visible before it counts.
    pub threshold: f64,
    /// Shrinks the viewport so only the upper half triggers a step.
    pub root_margin: &'static str,
    /// How long a freshly reached step keeps its transient highlight.
    pub clear_delay_ms: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            root_margin: "0px 0px -50% 0px",
            clear_delay_ms: 1000,
        }
    }
}

pub fn get_asset_base_url() -> String {
    option_env!("WAYNAA_ASSET_BASE")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}

/// Prefix a site-relative asset path with the configured base url.
pub fn asset_url(path: &str) -> String {
    let base = get_asset_base_url();
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("WAYNAA_LOG_LEVEL").unwrap_or("info"))
}

fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "warn" => Level::Warn,
        "error" => Level::Error,
        _ => Level::Info,
    }
}

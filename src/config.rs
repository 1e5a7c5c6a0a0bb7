use std::sync::OnceLock;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend origin used when nothing overrides it
    pub const DEFAULT_API_BASE: &'static str = "http://localhost:8000";

    /// Number of days of revenue history requested for trend charts
    pub const DEFAULT_TREND_DAYS: u32 = 30;

    /// Delay before re-rendering charts after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// `<meta name=...>` tag read at startup to override the API origin
    pub const API_BASE_META: &'static str = "hotel-dashboard-api-base";

    /// `<meta name=...>` tag read at startup to override the trend window
    pub const TREND_DAYS_META: &'static str = "hotel-dashboard-trend-days";
}

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub trend_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: Config::DEFAULT_API_BASE.to_string(),
            trend_days: Config::DEFAULT_TREND_DAYS,
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Resolves the configuration from (highest precedence first) a page meta
    /// tag, the build-time environment, then the built-in default.
    pub fn resolve(
        meta_api_base: Option<&str>,
        env_api_base: Option<&str>,
        meta_trend_days: Option<&str>,
    ) -> Self {
        let api_base = [meta_api_base, env_api_base]
            .into_iter()
            .flatten()
            .map(|s| s.trim().trim_end_matches('/'))
            .find(|s| !s.is_empty())
            .unwrap_or(Config::DEFAULT_API_BASE)
            .to_string();

        let trend_days = meta_trend_days
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(Config::DEFAULT_TREND_DAYS);

        Self {
            api_base,
            trend_days,
        }
    }

    /// Reads the overrides from the current page and build environment.
    pub fn from_environment() -> Self {
        let meta_api_base = read_meta(Config::API_BASE_META);
        let meta_trend_days = read_meta(Config::TREND_DAYS_META);

        if let Some(days) = meta_trend_days.as_deref().map(str::trim) {
            if !days.is_empty() && days.parse::<u32>().map_or(true, |d| d == 0) {
                gloo::console::warn!(format!(
                    "Ignoring invalid {} value '{days}'",
                    Config::TREND_DAYS_META
                ));
            }
        }

        Self::resolve(
            meta_api_base.as_deref(),
            option_env!("HOTEL_DASHBOARD_API_BASE"),
            meta_trend_days.as_deref(),
        )
    }

    /// Installs the process-wide configuration. Only the first call has any effect.
    pub fn init(config: Self) -> &'static Self {
        APP_CONFIG.get_or_init(|| config)
    }

    /// Returns the installed configuration, or the defaults if `init` never ran.
    pub fn global() -> &'static Self {
        APP_CONFIG.get_or_init(Self::default)
    }
}

/// Reads the `content` of `<meta name="{name}">` from the current document
fn read_meta(name: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()
        })
        .and_then(|el| el.get_attribute("content"))
}

use crate::config::AppConfig;
use crate::models::{
    error::AppError,
    hotel::{DashboardSummary, HotelDetail, TrendsResponse, Validate},
};
use reqwest::Url;
use serde::de::DeserializeOwned;

// ENDPOINTS
const SUMMARY_PATH: &str = "/api/dashboard/summary";
const TRENDS_PATH: &str = "/api/dashboard/trends";
const HOTEL_PATH: &str = "/api/dashboard/hotel";

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    trend_days: u32,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Builds a client configuration from the process-wide settings.
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::builder()
            .base_url(config.api_base.clone())
            .trend_days(config.trend_days)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default number of days requested for trends.
    pub fn trend_days(&self) -> u32 {
        self.trend_days
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|e| AppError::Config(format!("Invalid API base URL '{base}': {e}")))
    }

    /// URL of the portfolio summary.
    pub fn summary_url(&self) -> Result<Url, AppError> {
        self.endpoint(SUMMARY_PATH)
    }

    /// URL of the revenue trend, scoped to one hotel or (with `None`) to all hotels.
    pub fn trends_url(&self, hotel_id: Option<&str>, days: u32) -> Result<Url, AppError> {
        let mut url = self.endpoint(TRENDS_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(id) = hotel_id {
                query.append_pair("hotel_id", id);
            }
            query.append_pair("days", &days.to_string());
        }
        Ok(url)
    }

    /// URL of one hotel's detail, with the id percent-encoded as a path segment.
    pub fn hotel_url(&self, hotel_id: &str) -> Result<Url, AppError> {
        let mut url = self.endpoint(HOTEL_PATH)?;
        url.path_segments_mut()
            .map_err(|()| AppError::Config("API base URL cannot have paths".to_string()))?
            .push(hotel_id);
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    trend_days: Option<u32>,
}

impl ApiConfigBuilder {
    /// Sets the backend origin.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the default trend window in days.
    pub fn trend_days(mut self, days: u32) -> Self {
        self.trend_days = Some(days);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let defaults = AppConfig::default();
        ApiConfig {
            base_url: self.base_url.unwrap_or(defaults.api_base),
            trend_days: self.trend_days.unwrap_or(defaults.trend_days),
        }
    }
}

// DASHBOARD CLIENT
/// HTTP client for the hotel dashboard backend.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a client from the process-wide configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::from_app_config(AppConfig::global()))
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches per-hotel metrics and portfolio averages.
    pub async fn fetch_dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        let url = self.config.summary_url()?;
        self.fetch(url).await
    }

    /// Fetches daily revenue for the last `days` days.
    pub async fn fetch_trends(
        &self,
        hotel_id: Option<&str>,
        days: u32,
    ) -> Result<TrendsResponse, AppError> {
        let url = self.config.trends_url(hotel_id, days)?;
        self.fetch(url).await
    }

    /// Fetches metrics, PMS info and trend for a single hotel.
    pub async fn fetch_hotel_detail(&self, hotel_id: &str) -> Result<HotelDetail, AppError> {
        let url = self.config.hotel_url(hotel_id)?;
        self.fetch(url).await
    }

    /// Executes a single GET, then decodes and validates the body.
    async fn fetch<T>(&self, url: Url) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status));
        }

        let payload: T = response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse response: {e}")))?;

        payload.validate()?;
        Ok(payload)
    }
}

/// Converts a reqwest transport error into an `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_decode() {
        AppError::Decode(error.to_string())
    } else if error.is_request() {
        AppError::Network(format!("Request error: {error}"))
    } else {
        AppError::Network(error.to_string())
    }
}

/// Creates the error for a non-success HTTP status.
pub fn error_for_status(status: reqwest::StatusCode) -> AppError {
    AppError::Http {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the dashboard summary using the global configuration.
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, AppError> {
    DashboardClient::new()?.fetch_dashboard_summary().await
}

/// Fetches trends using the global configuration and its default trend window.
pub async fn fetch_trends(hotel_id: Option<&str>) -> Result<TrendsResponse, AppError> {
    let client = DashboardClient::new()?;
    let days = client.config().trend_days();
    client.fetch_trends(hotel_id, days).await
}

/// Fetches one hotel's detail using the global configuration.
pub async fn fetch_hotel_detail(hotel_id: &str) -> Result<HotelDetail, AppError> {
    DashboardClient::new()?.fetch_hotel_detail(hotel_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn config() -> ApiConfig {
        ApiConfig::builder().base_url("http://localhost:8000").build()
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.trend_days(), 30);
    }

    #[test]
    fn test_summary_url() {
        assert_eq!(
            config().summary_url().unwrap().as_str(),
            "http://localhost:8000/api/dashboard/summary"
        );
    }

    #[test]
    fn test_trends_url_all_hotels_omits_hotel_id() {
        let url = config().trends_url(None, 30).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/dashboard/trends?days=30"
        );
    }

    #[test]
    fn test_trends_url_scoped_to_hotel() {
        let url = config().trends_url(Some("grand_budapest"), 7).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/dashboard/trends?hotel_id=grand_budapest&days=7"
        );
    }

    #[test]
    fn test_hotel_url_encodes_id() {
        let url = config().hotel_url("seaside resort/2").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/dashboard/hotel/seaside%20resort%2F2"
        );
    }

    #[test]
    fn test_base_url_with_prefix_and_trailing_slash() {
        let config = ApiConfig::builder()
            .base_url("https://example.com/backend/")
            .build();
        assert_eq!(
            config.summary_url().unwrap().as_str(),
            "https://example.com/backend/api/dashboard/summary"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = ApiConfig::builder().base_url("not a url").build();
        assert!(matches!(config.summary_url(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_error_for_status() {
        let err = error_for_status(StatusCode::NOT_FOUND);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error: 404 Not Found");

        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }
}

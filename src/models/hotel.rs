use super::error::AppError;
use chrono::NaiveDate;
use serde::Deserialize;

/// Property management system a hotel runs on.
///
/// The backend treats this as an open set, so unrecognised identifiers are
/// kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PmsType {
    Legacy,
    Modern,
    Budget,
    Other(String),
}

impl From<String> for PmsType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "legacy" => Self::Legacy,
            "modern" => Self::Modern,
            "budget" => Self::Budget,
            _ => Self::Other(s),
        }
    }
}

impl PmsType {
    /// Returns the identifier used by the API
    pub fn code(&self) -> &str {
        match self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
            Self::Budget => "budget",
            Self::Other(code) => code,
        }
    }

    /// Returns CSS class name for the badge color
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Legacy => "badge-amber",
            Self::Modern => "badge-blue",
            Self::Budget => "badge-emerald",
            Self::Other(_) => "badge-gray",
        }
    }

    /// Badge text, e.g. "LEGACY PMS"
    pub fn badge_label(&self) -> String {
        format!("{} PMS", self.code().to_uppercase())
    }

    /// Capitalized identifier, e.g. "Legacy"
    pub fn label(&self) -> String {
        let mut chars = self.code().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HotelSummary {
    pub hotel_id: String,
    pub hotel_name: String,
    pub total_revenue: f64,
    /// Average Daily Rate
    pub adr: f64,
    /// Revenue Per Available Room
    pub revpar: f64,
    pub occupancy_rate: f64,
    pub cancellation_rate: f64,
    pub total_bookings: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardSummary {
    pub hotels: Vec<HotelSummary>,
    pub total_revenue: f64,
    pub avg_adr: f64,
    pub avg_occupancy_rate: f64,
    pub avg_cancellation_rate: f64,
}

impl DashboardSummary {
    pub fn find(&self, hotel_id: &str) -> Option<&HotelSummary> {
        self.hotels.iter().find(|h| h.hotel_id == hotel_id)
    }

    pub fn hotel_name(&self, hotel_id: &str) -> Option<&str> {
        self.find(hotel_id).map(|h| h.hotel_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendsResponse {
    /// `None` when the trend covers all hotels
    #[serde(default)]
    pub hotel_id: Option<String>,
    pub trends: Vec<DailyTrend>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HotelDetail {
    #[serde(flatten)]
    pub summary: HotelSummary,
    pub pms_type: PmsType,
    pub total_rooms: u32,
    pub trends: Vec<DailyTrend>,
}

impl HotelDetail {
    pub fn hotel_id(&self) -> &str {
        &self.summary.hotel_id
    }

    pub fn hotel_name(&self) -> &str {
        &self.summary.hotel_name
    }
}

/// Chart axes for a revenue trend: date labels and revenue values, in date order.
pub fn series_data(trends: &[DailyTrend]) -> (Vec<String>, Vec<f64>) {
    // Sort by date just in case
    let mut sorted: Vec<&DailyTrend> = trends.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let x_data = sorted
        .iter()
        .map(|t| t.date.format("%Y-%m-%d").to_string())
        .collect();
    let y_data = sorted.iter().map(|t| t.revenue).collect();

    (x_data, y_data)
}

/// Boundary checks applied to every decoded API payload.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn check_amount(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::Decode(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

impl Validate for HotelSummary {
    fn validate(&self) -> Result<(), AppError> {
        if self.hotel_id.trim().is_empty() {
            return Err(AppError::Decode("hotel_id must not be empty".to_string()));
        }
        check_amount("total_revenue", self.total_revenue)?;
        check_amount("adr", self.adr)?;
        check_amount("revpar", self.revpar)?;
        // Rates are displayed as-is even outside [0, 1]
        check_amount("occupancy_rate", self.occupancy_rate)?;
        check_amount("cancellation_rate", self.cancellation_rate)
    }
}

impl Validate for DailyTrend {
    fn validate(&self) -> Result<(), AppError> {
        check_amount("revenue", self.revenue)
    }
}

impl Validate for DashboardSummary {
    fn validate(&self) -> Result<(), AppError> {
        self.hotels.iter().try_for_each(Validate::validate)?;
        check_amount("total_revenue", self.total_revenue)?;
        check_amount("avg_adr", self.avg_adr)?;
        check_amount("avg_occupancy_rate", self.avg_occupancy_rate)?;
        check_amount("avg_cancellation_rate", self.avg_cancellation_rate)
    }
}

impl Validate for TrendsResponse {
    fn validate(&self) -> Result<(), AppError> {
        self.trends.iter().try_for_each(Validate::validate)
    }
}

impl Validate for HotelDetail {
    fn validate(&self) -> Result<(), AppError> {
        self.summary.validate()?;
        self.trends.iter().try_for_each(Validate::validate)
    }
}

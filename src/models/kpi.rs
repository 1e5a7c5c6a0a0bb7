use super::hotel::{DashboardSummary, HotelDetail, HotelSummary};
use crate::utils::format::{format_count, format_currency, format_percent};

/// Occupancy above this is shown as healthy
pub const OCCUPANCY_TARGET: f64 = 0.7;

/// Cancellations above this are shown as a warning
pub const CANCELLATION_LIMIT: f64 = 0.2;

/// Direction a KPI's subtitle is colored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    pub fn higher_is_better(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn lower_is_better(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// A single KPI card's content, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub trend: Option<Trend>,
}

impl Kpi {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            trend: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// Portfolio-wide KPI row on the dashboard.
pub fn dashboard_kpis(summary: &DashboardSummary) -> Vec<Kpi> {
    vec![
        Kpi::new("Total Revenue", format_currency(summary.total_revenue)),
        Kpi::new("Avg. Daily Rate (ADR)", format_currency(summary.avg_adr)),
        Kpi::new(
            "Avg. Occupancy Rate",
            format_percent(summary.avg_occupancy_rate),
        ),
        Kpi::new(
            "Avg. Cancellation Rate",
            format_percent(summary.avg_cancellation_rate),
        )
        .trend(Trend::lower_is_better(
            summary.avg_cancellation_rate,
            CANCELLATION_LIMIT,
        )),
    ]
}

/// Revenue, ADR, RevPAR and occupancy for one hotel.
pub fn detail_primary_kpis(detail: &HotelDetail) -> Vec<Kpi> {
    let s = &detail.summary;
    vec![
        Kpi::new("Total Revenue", format_currency(s.total_revenue)),
        Kpi::new("ADR (Avg Daily Rate)", format_currency(s.adr)),
        Kpi::new("RevPAR", format_currency(s.revpar)).subtitle("Revenue per available room"),
        Kpi::new("Occupancy Rate", format_percent(s.occupancy_rate))
            .subtitle(format!("{} total rooms", format_count(detail.total_rooms.into())))
            .trend(Trend::higher_is_better(s.occupancy_rate, OCCUPANCY_TARGET)),
    ]
}

/// Bookings, cancellations and PMS for one hotel.
pub fn detail_secondary_kpis(detail: &HotelDetail) -> Vec<Kpi> {
    let s = &detail.summary;
    vec![
        Kpi::new("Total Bookings", format_count(s.total_bookings)),
        Kpi::new("Cancellation Rate", format_percent(s.cancellation_rate))
            .trend(Trend::lower_is_better(s.cancellation_rate, CANCELLATION_LIMIT)),
        Kpi::new("PMS Type", detail.pms_type.label()),
    ]
}

/// Label/value pairs shown on a hotel's card in the properties grid.
pub fn property_metrics(hotel: &HotelSummary) -> [(&'static str, String); 4] {
    [
        ("Revenue", format_currency(hotel.total_revenue)),
        ("ADR", format_currency(hotel.adr)),
        ("Occupancy", format_percent(hotel.occupancy_rate)),
        ("Bookings", format_count(hotel.total_bookings)),
    ]
}

/// Subtitle for the revenue chart, naming the hotel when the trend is scoped to one.
pub fn trend_subtitle(days: u32, hotel_name: Option<&str>) -> String {
    match hotel_name {
        Some(name) => format!("Daily revenue — last {days} days ({name})"),
        None => format!("Daily revenue — last {days} days"),
    }
}

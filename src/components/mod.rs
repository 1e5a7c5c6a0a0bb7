pub mod hotel_selector;
pub mod kpi_card;
pub mod pms_badge;
pub mod property_card;
pub mod status;
pub mod trend_chart;

pub use hotel_selector::HotelSelector;
pub use kpi_card::{KpiCard, KpiGrid};
pub use pms_badge::PmsBadge;
pub use property_card::PropertyCard;
pub use status::{ErrorPanel, Loading};
pub use trend_chart::TrendChart;

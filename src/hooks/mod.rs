pub mod fetch_state;
pub mod use_dashboard_summary;
pub mod use_hotel_detail;
pub mod use_theme;
pub mod use_trends;

pub use fetch_state::FetchState;

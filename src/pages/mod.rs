pub mod dashboard;
pub mod hotel_detail;
pub mod not_found;

pub use dashboard::DashboardPage;
pub use hotel_detail::HotelDetailPage;
pub use not_found::NotFoundPage;

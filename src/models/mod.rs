pub mod error;
pub mod hotel;
pub mod kpi;

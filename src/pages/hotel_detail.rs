//! Single-hotel view keyed by the `hotel_id` route parameter.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorPanel, KpiGrid, Loading, PmsBadge, TrendChart};
use crate::config::Config;
use crate::hooks::{
    FetchState, use_hotel_detail::use_hotel_detail, use_theme::use_dark_mode,
};
use crate::models::{
    error::AppError,
    kpi::{detail_primary_kpis, detail_secondary_kpis, trend_subtitle},
};
use crate::routes::Route;
use crate::utils::format::format_count;

/// Message for a failed detail fetch. A 404 means the id is unknown.
pub fn detail_error_message(error: &AppError) -> String {
    if error.is_not_found() {
        "Hotel not found".to_string()
    } else {
        error.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct HotelDetailPageProps {
    pub hotel_id: String,
}

#[function_component(HotelDetailPage)]
pub fn hotel_detail_page(props: &HotelDetailPageProps) -> Html {
    let state = use_hotel_detail(props.hotel_id.clone());
    let dark_mode = use_dark_mode();

    let detail = match &*state {
        FetchState::Loading => {
            return html! { <Loading message="Loading hotel data..." /> };
        }
        FetchState::Error(e) => {
            return html! {
                <ErrorPanel message={detail_error_message(e)} back_link=true />
            };
        }
        FetchState::Loaded(detail) => detail.clone(),
    };

    html! {
        <div class="page hotel-detail">
            <header class="page-header">
                <div>
                    <Link<Route> to={Route::Dashboard} classes="back-link">
                        {"← Back to dashboard"}
                    </Link<Route>>
                    <div class="hotel-title">
                        <h1>{detail.hotel_name()}</h1>
                        <PmsBadge pms_type={detail.pms_type.clone()} />
                    </div>
                    <p class="page-subtitle">
                        {format!("{} rooms", format_count(detail.total_rooms.into()))}
                    </p>
                </div>
            </header>

            <KpiGrid kpis={detail_primary_kpis(&detail)} />
            <KpiGrid kpis={detail_secondary_kpis(&detail)} />

            // The detail endpoint always returns the default trend window
            <section class="chart-section">
                <TrendChart
                    title="Revenue Trend"
                    subtitle={AttrValue::from(trend_subtitle(Config::DEFAULT_TREND_DAYS, None))}
                    data={detail.trends.clone()}
                    {dark_mode}
                />
            </section>
        </div>
    }
}

//! Portfolio dashboard: totals across all hotels, revenue trend and a card per property.

use yew::prelude::*;

use crate::components::{ErrorPanel, HotelSelector, KpiGrid, Loading, PropertyCard, TrendChart};
use crate::config::AppConfig;
use crate::hooks::{
    FetchState, use_dashboard_summary::use_dashboard_summary, use_theme::use_dark_mode,
    use_trends::use_trends,
};
use crate::models::{
    hotel::{DashboardSummary, TrendsResponse},
    kpi::{dashboard_kpis, trend_subtitle},
};

/// Shown under the error message when the summary cannot be loaded
pub fn backend_hint(api_base: &str) -> String {
    format!("Make sure the backend is running at {api_base}")
}

pub fn properties_subtitle(summary: &DashboardSummary) -> String {
    format!(
        "Real-time performance metrics across {} properties",
        summary.hotels.len()
    )
}

/// Chart subtitle for a trend response, named after the hotel it is scoped to.
pub fn chart_subtitle(summary: &DashboardSummary, trends: &TrendsResponse, days: u32) -> String {
    let hotel_name = trends
        .hotel_id
        .as_deref()
        .and_then(|id| summary.hotel_name(id));
    trend_subtitle(days, hotel_name)
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let summary_state = use_dashboard_summary();
    let selected = use_state(|| None::<String>);
    let trends = use_trends((*selected).clone());
    let config = AppConfig::global();
    let dark_mode = use_dark_mode();

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |hotel_id: Option<String>| selected.set(hotel_id))
    };

    let summary = match &*summary_state {
        FetchState::Loading => {
            return html! { <Loading message="Loading dashboard..." /> };
        }
        FetchState::Error(e) => {
            return html! {
                <ErrorPanel
                    message={e.to_string()}
                    hint={AttrValue::from(backend_hint(&config.api_base))}
                />
            };
        }
        FetchState::Loaded(summary) => summary.clone(),
    };

    html! {
        <div class="page dashboard">
            <header class="page-header">
                <div>
                    <h1>{"Hotel Dashboard"}</h1>
                    <p class="page-subtitle">{properties_subtitle(&summary)}</p>
                </div>
                <HotelSelector
                    hotels={summary.hotels.clone()}
                    selected={(*selected).clone()}
                    {on_select}
                />
            </header>

            <KpiGrid kpis={dashboard_kpis(&summary)} />

            if let Some(trends) = &*trends {
                <section class="chart-section">
                    <TrendChart
                        title="Revenue Trend"
                        subtitle={AttrValue::from(chart_subtitle(&summary, trends, config.trend_days))}
                        data={trends.trends.clone()}
                        {dark_mode}
                    />
                </section>
            }

            <section class="properties-section">
                <h2>{"Properties"}</h2>
                <div class="property-list">
                    {
                        summary.hotels.iter().map(|hotel| html! {
                            <PropertyCard key={hotel.hotel_id.clone()} hotel={hotel.clone()} />
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}

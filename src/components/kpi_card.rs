use yew::prelude::*;

use crate::models::kpi::{Kpi, Trend};

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub trend: Option<Trend>,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let subtitle_class = classes!(
        "kpi-subtitle",
        props.trend.unwrap_or(Trend::Neutral).css_class()
    );

    html! {
        <div class="kpi-card">
            <dt class="kpi-title">{&props.title}</dt>
            <dd class="kpi-value">{&props.value}</dd>
            if let Some(subtitle) = &props.subtitle {
                <p class={subtitle_class}>{subtitle}</p>
            }
        </div>
    }
}

/// Column class for a row of `count` cards; rows of 3 and 4 have fixed layouts
pub fn grid_columns_class(count: usize) -> String {
    format!("cols-{count}")
}

#[derive(Properties, PartialEq)]
pub struct KpiGridProps {
    pub kpis: Vec<Kpi>,
}

/// A row of KPI cards
#[function_component(KpiGrid)]
pub fn kpi_grid(props: &KpiGridProps) -> Html {
    html! {
        <dl class={classes!("kpi-grid", grid_columns_class(props.kpis.len()))}>
            {
                props.kpis.iter().map(|kpi| html! {
                    <KpiCard
                        key={kpi.title.clone()}
                        title={kpi.title.clone()}
                        value={kpi.value.clone()}
                        subtitle={kpi.subtitle.clone().map(AttrValue::from)}
                        trend={kpi.trend}
                    />
                }).collect::<Html>()
            }
        </dl>
    }
}

use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{
        AreaStyle, AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, Tooltip,
        Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::hotel::{DailyTrend, series_data};
use crate::utils::debounce::create_debounced_resize_listener;

const CHART_ID: &str = "revenue-chart";

/// Divisor and suffix that express `max` in compact currency units.
pub fn currency_scale(max: f64) -> (f64, &'static str) {
    match max.abs() {
        m if m >= 1e12 => (1e12, "T"),
        m if m >= 1e9 => (1e9, "B"),
        m if m >= 1e6 => (1e6, "M"),
        m if m >= 1e3 => (1e3, "K"),
        _ => (1.0, ""),
    }
}

/// Revenue values expressed in the chart's compact unit, one fractional digit.
///
/// Axis labels and the tooltip are plain ECharts templates, so the plotted
/// values are the rounded ones. On a chart scaled to millions the line moves
/// in $100K steps and a day under $50K plots as `$0M`.
fn scaled_values(values: &[f64], divisor: f64) -> Vec<f64> {
    values
        .iter()
        .map(|v| (v / divisor * 10.0).round() / 10.0)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub data: Vec<DailyTrend>,
    #[prop_or(false)]
    pub dark_mode: bool,
}

/// Axis, grid line and series colors for one color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub axis: &'static str,
    pub grid: &'static str,
    pub series: &'static str,
}

impl ChartPalette {
    pub const fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                axis: "#a1a1aa",
                grid: "#404040",
                series: "#60a5fa",
            }
        } else {
            Self {
                axis: "#6b7280",
                grid: "#e5e7eb",
                series: "#3b82f6",
            }
        }
    }
}

#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let dark_mode = props.dark_mode;
    let series = use_memo(props.data.clone(), |data| series_data(data));

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series.clone(), container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series, *dark_mode);

                    let series = series.clone();
                    let dark_mode = *dark_mode;
                    create_debounced_resize_listener(
                        move || render_chart(&container, &series, dark_mode),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-card">
            <h3>{&props.title}</h3>
            if let Some(subtitle) = &props.subtitle {
                <p class="chart-subtitle">{subtitle}</p>
            }
            if props.data.is_empty() {
                <p class="chart-empty">{"No revenue recorded for this period"}</p>
            } else {
                <div class="chart-container" ref={container_ref}>
                    <div id={CHART_ID} />
                </div>
            }
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &(Vec<String>, Vec<f64>), dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(series: &(Vec<String>, Vec<f64>), dark_mode: bool) -> CharmingChart {
    let (x_data, y_data) = series;

    let max = y_data.iter().copied().fold(0.0, f64::max);
    let (divisor, suffix) = currency_scale(max);

    let palette = ChartPalette::for_theme(dark_mode);

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .formatter(format!("{{b0}}: ${{c0}}{suffix}").as_str()),
        )
        .grid(
            Grid::new()
                .left("6%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().color(palette.axis)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(
                    AxisLabel::new()
                        .color(palette.axis)
                        .formatter(format!("${{value}}{suffix}").as_str()),
                )
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(palette.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Revenue")
                .data(scaled_values(y_data, divisor))
                .item_style(ItemStyle::new().color(palette.series))
                .area_style(AreaStyle::new()),
        )
}

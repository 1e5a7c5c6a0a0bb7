use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use super::fetch_state::FetchState;
use crate::models::hotel::DashboardSummary;
use crate::services::api::fetch_dashboard_summary;
use wasm_bindgen_futures::spawn_local;

pub type SummaryState = FetchState<DashboardSummary>;

/// Fetches the portfolio summary once on mount.
#[hook]
pub fn use_dashboard_summary() -> UseStateHandle<SummaryState> {
    let state = use_state(|| SummaryState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            let mounted_check = mounted.clone();

            spawn_local(async move {
                let result = fetch_dashboard_summary().await;
                if let Err(e) = &result {
                    gloo::console::error!(&format!("Failed to load dashboard summary: {e}"));
                }
                if mounted_check.get() {
                    state.set(result.into());
                }
            });

            move || mounted.set(false)
        });
    }

    state
}

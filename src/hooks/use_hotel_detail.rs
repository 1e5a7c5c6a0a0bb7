use yew::prelude::*;

use super::fetch_state::FetchState;
use crate::models::hotel::HotelDetail;
use crate::services::api::fetch_hotel_detail;
use crate::utils::latest::LatestRequest;
use wasm_bindgen_futures::spawn_local;

pub type DetailState = FetchState<HotelDetail>;

/// Fetches one hotel's detail, restarting from `Loading` whenever `hotel_id` changes.
#[hook]
pub fn use_hotel_detail(hotel_id: String) -> UseStateHandle<DetailState> {
    let state = use_state(|| DetailState::Loading);
    let latest = use_memo((), |_| LatestRequest::new());

    {
        let state = state.clone();
        let latest = (*latest).clone();

        use_effect_with(hotel_id, move |hotel_id| {
            let ticket = latest.begin();
            let hotel_id = hotel_id.clone();

            // Reset to loading when the hotel changes
            state.set(DetailState::Loading);

            spawn_local(async move {
                let result = fetch_hotel_detail(&hotel_id).await;
                if let Err(e) = &result {
                    gloo::console::error!(&format!("Failed to load hotel '{hotel_id}': {e}"));
                }
                if ticket.is_current() {
                    state.set(result.into());
                }
            });

            move || latest.invalidate()
        });
    }

    state
}

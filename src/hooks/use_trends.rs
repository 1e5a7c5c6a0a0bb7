use std::rc::Rc;
use yew::prelude::*;

use crate::models::hotel::TrendsResponse;
use crate::services::api::fetch_trends;
use crate::utils::latest::LatestRequest;
use wasm_bindgen_futures::spawn_local;

/// Fetches the revenue trend for `selection` (`None` = all hotels) whenever it changes.
///
/// Trends are secondary data: failures are logged and leave the handle at
/// `None`, and a response is dropped if a newer selection was made while it was
/// in flight.
#[hook]
pub fn use_trends(selection: Option<String>) -> UseStateHandle<Option<Rc<TrendsResponse>>> {
    let state = use_state(|| None);
    let latest = use_memo((), |_| LatestRequest::new());

    {
        let state = state.clone();
        let latest = (*latest).clone();

        use_effect_with(selection, move |selection| {
            let ticket = latest.begin();
            let selection = selection.clone();

            spawn_local(async move {
                let result = fetch_trends(selection.as_deref()).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(trends) => state.set(Some(Rc::new(trends))),
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load trends: {e}"));
                        state.set(None);
                    }
                }
            });

            move || latest.invalidate()
        });
    }

    state
}

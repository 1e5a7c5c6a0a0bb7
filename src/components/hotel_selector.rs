use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::hotel::HotelSummary;

/// Option value standing in for "no hotel selected"
pub const ALL_HOTELS: &str = "all";

/// Maps the current selection to the `<option>` value that should be selected.
pub fn option_value(selected: Option<&str>) -> &str {
    selected.unwrap_or(ALL_HOTELS)
}

/// Maps a chosen `<option>` value back to a selection.
pub fn parse_selection(value: &str) -> Option<String> {
    (value != ALL_HOTELS).then(|| value.to_string())
}

#[derive(Properties, PartialEq)]
pub struct HotelSelectorProps {
    pub hotels: Vec<HotelSummary>,
    pub selected: Option<String>,
    pub on_select: Callback<Option<String>>,
}

/// Hotel picker with an "All Hotels" entry. Controlled: the parent owns the selection.
#[function_component(HotelSelector)]
pub fn hotel_selector(props: &HotelSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_select.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(parse_selection(&target.value()));
        })
    };

    let current = option_value(props.selected.as_deref());

    html! {
        <select
            class="hotel-selector"
            onchange={on_change}
            aria-label="Select a hotel"
            title="Select a hotel"
        >
            <option value={ALL_HOTELS} selected={current == ALL_HOTELS}>{"All Hotels"}</option>
            {
                props.hotels.iter().map(|hotel| {
                    let selected = hotel.hotel_id == current;
                    html! {
                        <option key={hotel.hotel_id.clone()} value={hotel.hotel_id.clone()} {selected}>
                            {&hotel.hotel_name}
                        </option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}

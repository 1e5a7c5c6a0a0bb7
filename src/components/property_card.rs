use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{hotel::HotelSummary, kpi::property_metrics};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub hotel: HotelSummary,
}

/// One hotel in the properties grid, linking to its detail page
#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let hotel = &props.hotel;
    let route = Route::Hotel {
        hotel_id: hotel.hotel_id.clone(),
    };

    html! {
        <Link<Route> to={route} classes="property-link">
            <div class="property-card">
                <h3>{&hotel.hotel_name}</h3>
                <div class="property-grid">
                    {
                        property_metrics(hotel).into_iter().map(|(label, value)| html! {
                            <div class="property-item" key={label}>
                                <p class="property-label">{label}</p>
                                <p class="property-value">{value}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </Link<Route>>
    }
}

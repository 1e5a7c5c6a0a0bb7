//! Client-side route table.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DashboardPage, HotelDetailPage, NotFoundPage};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/hotel/:hotel_id")]
    Hotel { hotel_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Hotel { hotel_id } => html! { <HotelDetailPage {hotel_id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(
            Route::Hotel {
                hotel_id: "grand_budapest".to_string()
            }
            .to_path(),
            "/hotel/grand_budapest"
        );
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(
            Route::recognize("/hotel/seaside_resort"),
            Some(Route::Hotel {
                hotel_id: "seaside_resort".to_string()
            })
        );
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}

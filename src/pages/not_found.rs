use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="status error">
            <h2>{"Page Not Found"}</h2>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="back-link">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}

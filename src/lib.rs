pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use hooks::use_theme::{Theme, use_theme};
use routes::{Route, switch};

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_theme();

    html! {
        <ContextProvider<Theme> context={theme}>
            <BrowserRouter>
                <div class="app-container">
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>

                    <style>
                        {include_str!("style.css")}
                    </style>
                </div>
            </BrowserRouter>
        </ContextProvider<Theme>>
    }
}

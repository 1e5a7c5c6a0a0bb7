use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    /// Show a link back to the dashboard
    #[prop_or(false)]
    pub back_link: bool,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="status error">
            <p class="error-message">{&props.message}</p>
            if let Some(hint) = &props.hint {
                <p class="error-hint">{hint}</p>
            }
            if props.back_link {
                <Link<Route> to={Route::Dashboard} classes="back-link">
                    {"Back to dashboard"}
                </Link<Route>>
            }
        </div>
    }
}

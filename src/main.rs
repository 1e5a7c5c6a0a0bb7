use hotel_dashboard::{App, config::AppConfig};

fn main() {
    let config = AppConfig::init(AppConfig::from_environment());
    gloo::console::log!(&format!("Using dashboard API at {}", config.api_base));

    yew::Renderer::<App>::new().render();
}

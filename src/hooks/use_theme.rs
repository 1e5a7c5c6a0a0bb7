use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Color scheme the page is rendered in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to the `data-theme` attribute on `<html>`
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Follows the system color scheme and mirrors it onto the document.
#[hook]
pub fn use_theme() -> Theme {
    let theme = use_state(detect_system_preference);

    // Effect: Apply theme to DOM
    use_effect_with(*theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    // Effect: Listen to system preference changes
    {
        let setter = theme.setter();
        use_effect_with((), move |_| {
            let listener = setup_media_query_listener(setter);
            move || drop(listener)
        });
    }

    *theme
}

/// Whether the app-level theme provided by `App` is dark. Light when no provider is mounted.
#[hook]
pub fn use_dark_mode() -> bool {
    use_context::<Theme>().is_some_and(Theme::is_dark)
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(e) = html.set_attribute("data-theme", theme.attribute()) {
            gloo::console::warn!(&format!("Failed to apply theme: {e:?}"));
        }
    }
}

/// Setup MediaQueryList event listener for system preference changes
fn setup_media_query_listener(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    let mq = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
    let target = mq.dyn_into::<web_sys::EventTarget>().ok()?;
    Some(EventListener::new(&target, "change", move |_event| {
        setter.set(detect_system_preference());
    }))
}

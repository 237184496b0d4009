use dioxus::prelude::*;
use memorial_core::ThemePreference;

use crate::context::{get_app_config, open_preferences, StartOnDesigner};
use crate::pages::{Designer, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Event landing page with registration
/// - `/designer?from=registration` - Gravestone designer; `from` marks the referral
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/designer?:from")]
    Designer { from: String },
}

/// Root application component.
///
/// Provides global styles, configuration, preferences and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_app_config);
    let start_on_designer = config.start_on_designer;

    let prefs = use_hook(|| open_preferences(&config));
    let theme = use_signal(|| ThemePreference::load(prefs.as_ref()));
    let start = use_signal(|| StartOnDesigner(start_on_designer));

    use_context_provider(|| config.clone());
    use_context_provider(|| prefs.clone());
    use_context_provider(|| theme);
    use_context_provider(|| start);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

//! Navigation Header Component
//!
//! Desktop: horizontal header with title, section links and theme toggle
//! Mobile: links collapse into a menu opened by the hamburger button

use dioxus::prelude::*;
use memorial_core::ThemePreference;

use crate::app::Route;
use crate::context::{use_preferences, use_theme};

/// In-page anchors of the landing page: (href, label)
const SECTIONS: &[(&str, &str)] = &[
    ("#about", "The Eclipse"),
    ("#schedule", "Rituals"),
    ("#register", "Register"),
];

/// Navigation Header component
///
/// - Left: "Eldritch Eclipse" title
/// - Center: section links and the designer link
/// - Right: theme toggle, menu button on narrow screens
#[component]
pub fn NavHeader() -> Element {
    let mut theme = use_theme();
    let prefs = use_preferences();
    let mut menu_open = use_signal(|| false);

    let toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);
        if let Err(e) = next.save(prefs.as_ref()) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    };

    let (toggle_icon, toggle_label) = match theme() {
        ThemePreference::Dark => ("☀️", "Switch to light theme"),
        ThemePreference::Light => ("🌙", "Switch to dark theme"),
    };

    rsx! {
        header { class: "nav-header",
            a { class: "nav-title", href: "#top", "Eldritch Eclipse" }

            nav { class: if menu_open() { "nav-links open" } else { "nav-links" },
                for (href, label) in SECTIONS.iter().copied() {
                    a {
                        class: "nav-link",
                        href,
                        onclick: move |_| menu_open.set(false),
                        "{label}"
                    }
                }
                Link {
                    class: "nav-link nav-designer",
                    to: Route::Designer { from: String::new() },
                    "Memorial Designer"
                }
            }

            div { class: "nav-actions",
                button {
                    class: "theme-toggle",
                    "aria-label": toggle_label,
                    title: toggle_label,
                    onclick: toggle_theme,
                    "{toggle_icon}"
                }
                button {
                    class: "menu-toggle",
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }
        }
    }
}

//! Landing page - the Eldritch Eclipse event.
//!
//! Hero, the event sections and the registration form. Sections fade in as
//! they scroll into view; particles drift over an ambient background.

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::*;
use memorial_core::decor::{landing_tasks, run_startup_tasks, Extent};

use crate::app::Route;
use crate::components::{NavHeader, ParticleField, RegistrationPanel, RevealSection};
use crate::context::{use_app_config, use_start_on_designer, use_theme, StartOnDesigner};

/// Height of the window's content area in logical pixels.
fn viewport_height() -> f64 {
    let desktop = dioxus::desktop::window();
    let scale = desktop.window.scale_factor();
    desktop.window.inner_size().to_logical::<f64>(scale).height
}

#[component]
pub fn Landing() -> Element {
    let config = use_app_config();
    let theme = use_theme();
    let navigator = use_navigator();
    let mut start = use_start_on_designer();

    // --designer opens the designer once; later visits stay here
    use_effect(move || {
        if start().0 {
            start.set(StartOnDesigner(false));
            navigator.replace(Route::Designer { from: String::new() });
        }
    });

    let scene = use_hook(|| run_startup_tasks(&landing_tasks(), &config.capabilities()));
    let observer = use_signal(|| scene.reveal.clone());
    let mut mounted: Signal<BTreeMap<&'static str, Rc<MountedData>>> =
        use_signal(BTreeMap::new);

    let check_reveal = move || {
        let pending: Vec<(&'static str, Rc<MountedData>)> = {
            let obs = observer.read();
            mounted
                .read()
                .iter()
                .filter(|(id, _)| !obs.is_revealed(id))
                .map(|(id, el)| (*id, el.clone()))
                .collect()
        };
        if pending.is_empty() {
            return;
        }

        spawn(async move {
            let mut observer = observer;
            let viewport = viewport_height();
            for (id, el) in pending {
                let extent = match el.get_client_rect().await {
                    Ok(rect) => Some(Extent::new(rect.origin.y, rect.size.height)),
                    Err(e) => {
                        tracing::debug!("No geometry for #{}: {:?}", id, e);
                        None
                    }
                };
                if observer.write().check(id, extent, viewport) {
                    tracing::trace!("Revealed #{}", id);
                }
            }
        });
    };

    let on_mounted = move |(id, el): (&'static str, Rc<MountedData>)| {
        mounted.write().insert(id, el);
        check_reveal();
    };

    let (title_reveal, tagline_reveal, cta_reveal) = {
        let obs = observer.read();
        (
            obs.class_for("hero-title"),
            obs.class_for("hero-tagline"),
            obs.class_for("hero-cta"),
        )
    };
    let root_class = theme().root_class();
    let scroll_style = if scene.smooth_scroll {
        "scroll-behavior: smooth;"
    } else {
        ""
    };

    rsx! {
        main {
            id: "top",
            class: "landing {root_class}",
            style: scroll_style,
            onscroll: move |_| check_reveal(),

            NavHeader {}

            div { class: "hero-bg",
                ParticleField {
                    particles: scene.particles.clone(),
                    ambient: scene.ambient.clone(),
                }
                div { class: "hero",
                    h1 { id: "hero-title", class: "hero-title {title_reveal}",
                        "Eldritch Eclipse"
                    }
                    p { id: "hero-tagline", class: "hero-tagline {tagline_reveal}",
                        "When the moon swallows the sun, the veil grows thin."
                    }
                    a { id: "hero-cta", class: "btn-cta {cta_reveal}", href: "#register",
                        "Claim Your Place"
                    }
                }
            }

            RevealSection { id: "about", observer, on_mounted,
                h2 { class: "section-header", "The Eclipse" }
                p { class: "body-text",
                    "One night only, beneath a blackened sky. Join the gathering at the old "
                    "cemetery gates for an evening of candlelight, music and remembrance."
                }
            }

            RevealSection { id: "schedule", observer, on_mounted,
                h2 { class: "section-header", "Rituals" }
                ul { class: "schedule-list",
                    li { span { class: "schedule-time", "19:00" } " Gates open, lanterns lit" }
                    li { span { class: "schedule-time", "20:30" } " Procession of the lost" }
                    li { span { class: "schedule-time", "21:47" } " Totality" }
                    li { span { class: "schedule-time", "23:00" } " Memorial unveiling" }
                }
                p { class: "body-text",
                    "Every guest may raise a stone. "
                    Link { class: "inline-link", to: Route::Designer { from: String::new() },
                        "Design yours now."
                    }
                }
            }

            RevealSection { id: "register", class: "register-section", observer, on_mounted,
                h2 { class: "section-header", "Register" }
                RegistrationPanel {}
            }

            footer { class: "landing-footer", "Eldritch Eclipse · the night remembers" }
        }
    }
}

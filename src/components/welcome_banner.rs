//! Welcome banner shown to guests arriving from the registration form.

use dioxus::prelude::*;
use memorial_core::referral::{Referral, WELCOME_DELAY, WELCOME_DURATION, WELCOME_TEXT};

#[component]
pub fn WelcomeBanner(referral: Referral) -> Element {
    let mut visible = use_signal(|| false);

    // Read once at load; the banner never comes back on later renders.
    use_hook(move || {
        if referral.shows_welcome() {
            spawn(async move {
                tokio::time::sleep(WELCOME_DELAY).await;
                visible.set(true);
                tokio::time::sleep(WELCOME_DURATION).await;
                visible.set(false);
            });
        }
    });

    rsx! {
        if visible() {
            div { class: "welcome-banner", role: "status", "{WELCOME_TEXT}" }
        }
    }
}

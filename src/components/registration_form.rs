//! Registration Form Component
//!
//! Validates on submit, simulates the round trip, then links to the
//! designer with the registration referral.

use dioxus::prelude::*;
use memorial_core::referral::REGISTRATION_SOURCE;
use memorial_core::registration::{
    SubmitOutcome, EMAIL_ERROR, NAME_ERROR, SUBMIT_DELAY, SUCCESS_MESSAGE,
};
use memorial_core::RegistrationForm;

use crate::app::Route;

#[component]
pub fn RegistrationPanel() -> Element {
    let mut form = use_signal(RegistrationForm::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let outcome = form.write().submit();
        if let SubmitOutcome::Submitting(_) = outcome {
            spawn(async move {
                tokio::time::sleep(SUBMIT_DELAY).await;
                let reset_after = form.write().complete();
                tokio::time::sleep(reset_after).await;
                form.write().reset_label();
            });
        }
    };

    let state = form.read();
    let errors = state.errors();
    let busy = state.is_busy();

    rsx! {
        form { class: "registration-form", "novalidate": "true", onsubmit: on_submit,
            div { class: "form-field",
                label { r#for: "name", "Your Name" }
                input {
                    id: "name",
                    r#type: "text",
                    placeholder: "Edgar Allan Poe",
                    value: "{state.name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                p { class: if errors.name { "field-error" } else { "field-error hidden" }, "{NAME_ERROR}" }
            }

            div { class: "form-field",
                label { r#for: "email", "Your Email" }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "raven@nevermore.com",
                    value: "{state.email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                p { class: if errors.email { "field-error" } else { "field-error hidden" }, "{EMAIL_ERROR}" }
            }

            button {
                class: "btn-submit",
                r#type: "submit",
                disabled: busy,
                "aria-busy": "{busy}",
                "{state.submit_label()}"
            }

            div { class: if state.success_visible() { "success-message" } else { "success-message hidden" },
                p { "{SUCCESS_MESSAGE}" }
                Link {
                    class: "btn-designer",
                    to: Route::Designer { from: REGISTRATION_SOURCE.to_string() },
                    "🪦 Design Your Memorial"
                }
            }
        }
    }
}

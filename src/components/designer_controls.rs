//! Designer form controls.
//!
//! Every control writes its value into the element model and re-renders
//! the stone immediately. Classes come from the model so the scene palette
//! restyles the controls too.

use dioxus::prelude::*;
use memorial_core::designer::ids;
use memorial_core::{update_stone, Document, Keyed};

/// Select options for an enumeration: (value, label)
pub fn options<T: Keyed>() -> Vec<(&'static str, &'static str)> {
    T::ALL.iter().map(|v| (v.key(), v.label())).collect()
}

fn set_and_render(mut doc: Signal<Document>, id: &str, value: String) {
    let mut doc = doc.write();
    doc.set_value(id, value);
    update_stone(&mut doc);
}

fn check_and_render(mut doc: Signal<Document>, id: &str, checked: bool) {
    let mut doc = doc.write();
    doc.set_checked(id, checked);
    update_stone(&mut doc);
}

#[component]
fn ControlLabel(doc: Signal<Document>, control: &'static str) -> Element {
    let label_id = ids::label_for(control);
    let doc = doc.read();

    rsx! {
        label {
            id: "{label_id}",
            r#for: control,
            class: doc.class_attr(&label_id),
            "{doc.text_of(&label_id)}"
        }
    }
}

/// Single line text input, or a textarea when `multiline`.
#[component]
pub fn TextControl(
    doc: Signal<Document>,
    id: &'static str,
    #[props(default)] multiline: bool,
) -> Element {
    let (value, class) = {
        let d = doc.read();
        (d.value_of(id).to_string(), d.class_attr(id))
    };

    rsx! {
        div { class: "control-group",
            ControlLabel { doc, control: id }
            if multiline {
                textarea {
                    id,
                    class,
                    rows: "3",
                    value,
                    oninput: move |e| set_and_render(doc, id, e.value()),
                }
            } else {
                input {
                    id,
                    class,
                    r#type: "text",
                    value,
                    oninput: move |e| set_and_render(doc, id, e.value()),
                }
            }
        }
    }
}

#[component]
pub fn SelectControl(
    doc: Signal<Document>,
    id: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> Element {
    let (current, class) = {
        let d = doc.read();
        (d.value_of(id).to_string(), d.class_attr(id))
    };

    rsx! {
        div { class: "control-group",
            ControlLabel { doc, control: id }
            select {
                id,
                class,
                value: "{current}",
                onchange: move |e| set_and_render(doc, id, e.value()),
                for (value, label) in options {
                    option { value, selected: value == current, "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn ToggleControl(doc: Signal<Document>, id: &'static str) -> Element {
    let (checked, class) = {
        let d = doc.read();
        (d.checked(id).unwrap_or(false), d.class_attr(id))
    };

    rsx! {
        div { class: "control-group toggle",
            input {
                id,
                class,
                r#type: "checkbox",
                checked,
                onchange: move |e: FormEvent| check_and_render(doc, id, e.checked()),
            }
            ControlLabel { doc, control: id }
        }
    }
}

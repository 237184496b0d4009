//! Live gravestone preview, bound node by node to the element model.

use dioxus::prelude::*;
use memorial_core::designer::ids;
use memorial_core::Document;

#[component]
pub fn StonePreview(doc: Signal<Document>) -> Element {
    let d = doc.read();
    let node = |id: &str| (d.class_attr(id), d.style_attr(id), d.text_of(id).to_string());

    let (card_class, card_style, _) = node(ids::CARD);
    let (icon_class, icon_style, icon) = node(ids::ICON);
    let (name_class, _, name) = node(ids::NAME);
    let (dates_class, _, dates) = node(ids::DATES);
    let (epitaph_class, _, epitaph) = node(ids::EPITAPH);
    let (drip_class, _, _) = node(ids::BLOOD_DRIP);

    rsx! {
        div { id: ids::CONTAINER, class: d.class_attr(ids::CONTAINER),
            div { id: ids::CARD, class: card_class, style: card_style,
                div { id: ids::ICON, class: icon_class, style: icon_style, "{icon}" }
                div { id: ids::NAME, class: name_class, "{name}" }
                div { id: ids::DATES, class: dates_class, "{dates}" }
                div { id: ids::EPITAPH, class: epitaph_class, "{epitaph}" }
                div { id: ids::BLOOD_DRIP, class: drip_class }
            }
        }
    }
}

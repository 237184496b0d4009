//! Landing page section that fades in once scrolled into view.

use std::rc::Rc;

use dioxus::prelude::*;
use memorial_core::decor::RevealObserver;

#[derive(Props, Clone, PartialEq)]
pub struct RevealSectionProps {
    pub id: &'static str,
    #[props(default = "")]
    pub class: &'static str,
    pub observer: Signal<RevealObserver>,
    /// Called with the element once it is mounted, to register its geometry
    pub on_mounted: EventHandler<(&'static str, Rc<MountedData>)>,
    pub children: Element,
}

#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let id = props.id;
    let reveal = props.observer.read().class_for(id);

    rsx! {
        section {
            id,
            class: "landing-section {props.class} {reveal}",
            onmounted: move |e| props.on_mounted.call((id, e.data())),
            {props.children}
        }
    }
}

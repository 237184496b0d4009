//! Designer page - build a gravestone and export or share it.
//!
//! The page owns the element model. Controls write into it, the renderer
//! restyles it in place, and every element below is bound to its node.

use dioxus::prelude::*;
use memorial_core::designer::{ids, SECTION_HEADINGS};
use memorial_core::{
    designer_document, update_stone, Document, EngravingColor, Font, Icon, Referral, SceneTheme,
    Shape, StoneColor,
};

use crate::app::Route;
use crate::components::{
    options, ExportControl, SelectControl, ShareControl, StonePreview, TextControl,
    ToggleControl, WelcomeBanner,
};

#[component]
fn SectionHeading(doc: Signal<Document>, index: usize) -> Element {
    let (id, _) = SECTION_HEADINGS[index];
    let d = doc.read();

    rsx! {
        h3 { id, class: d.class_attr(id), "{d.text_of(id)}" }
    }
}

#[component]
pub fn Designer(from: String) -> Element {
    let doc = use_signal(|| {
        let mut doc = designer_document();
        update_stone(&mut doc);
        doc
    });
    let referral = Referral::from_param(&from);

    let d = doc.read();
    let bound = |id: &str| (d.class_attr(id), d.text_of(id).to_string());
    let (body_class, _) = bound(ids::BODY);
    let (title_class, title) = bound(ids::TITLE);
    let (subtitle_class, subtitle) = bound(ids::SUBTITLE);
    let (caption_class, caption) = bound(ids::CAPTION);
    let panel_class = d.class_attr(ids::CONTROLS_PANEL);
    let preview_class = d.class_attr(ids::PREVIEW_AREA);
    let ground_class = d.class_attr(ids::GROUND);
    drop(d);

    rsx! {
        div { id: ids::BODY, class: body_class,
            WelcomeBanner { referral }

            header { class: "designer-header",
                Link { class: "back-link", to: Route::Landing {}, "← Back to the Eclipse" }
                h1 { id: ids::TITLE, class: title_class, "{title}" }
                p { id: ids::SUBTITLE, class: subtitle_class, "{subtitle}" }
            }

            div { class: "designer-layout",
                aside { id: ids::CONTROLS_PANEL, class: panel_class,
                    SectionHeading { doc, index: 0 }
                    TextControl { doc, id: ids::INPUT_NAME }
                    TextControl { doc, id: ids::INPUT_DATES }
                    TextControl { doc, id: ids::INPUT_EPITAPH, multiline: true }

                    SectionHeading { doc, index: 1 }
                    SelectControl { doc, id: ids::SELECT_SHAPE, options: options::<Shape>() }
                    SelectControl { doc, id: ids::SELECT_COLOR, options: options::<StoneColor>() }
                    SelectControl { doc, id: ids::SELECT_FONT, options: options::<Font>() }
                    SelectControl {
                        doc,
                        id: ids::SELECT_ENGRAVING,
                        options: options::<EngravingColor>(),
                    }
                    SelectControl { doc, id: ids::SELECT_ICON, options: options::<Icon>() }

                    SectionHeading { doc, index: 2 }
                    ToggleControl { doc, id: ids::TOGGLE_BLOOD_DRIP }
                    ToggleControl { doc, id: ids::TOGGLE_MOSS }
                    ToggleControl { doc, id: ids::TOGGLE_CRACKS }

                    SectionHeading { doc, index: 3 }
                    SelectControl { doc, id: ids::SELECT_SCENE, options: options::<SceneTheme>() }

                    div { class: "designer-actions",
                        ExportControl { doc }
                        ShareControl { doc }
                    }
                }

                section { id: ids::PREVIEW_AREA, class: preview_class,
                    StonePreview { doc }
                    div { id: ids::GROUND, class: ground_class }
                    p { id: ids::CAPTION, class: caption_class, "{caption}" }
                }
            }
        }
    }
}

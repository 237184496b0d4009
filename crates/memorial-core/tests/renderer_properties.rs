//! Property-based tests for the preview renderer
//!
//! Uses proptest to drive the designer through arbitrary control changes
//! and checks the class-token invariants after every render.

use std::collections::BTreeSet;

use memorial_core::designer::{designer_document, ids};
use memorial_core::palette::{DAYLIGHT, GOTHIC_NIGHT, THEMED_ROLES};
use memorial_core::renderer::update_stone;
use memorial_core::stone::{EngravingColor, Font, Icon, SceneTheme, Shape, StoneColor};
use memorial_core::tokens::{family_count, Keyed};
use memorial_core::Document;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A known key of `T`, or occasionally something no control would offer.
fn key_strategy<T: Keyed + std::fmt::Debug>() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(T::ALL.to_vec()).prop_map(|v| v.key().to_string()),
        1 => prop::string::string_regex("[a-z-]{0,12}").expect("valid regex"),
    ]
}

/// A single user interaction with the designer controls.
#[derive(Debug, Clone)]
enum Edit {
    Shape(String),
    Color(String),
    Font(String),
    Engraving(String),
    Icon(String),
    Scene(String),
    Name(String),
    Toggle(&'static str, bool),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        key_strategy::<Shape>().prop_map(Edit::Shape),
        key_strategy::<StoneColor>().prop_map(Edit::Color),
        key_strategy::<Font>().prop_map(Edit::Font),
        key_strategy::<EngravingColor>().prop_map(Edit::Engraving),
        key_strategy::<Icon>().prop_map(Edit::Icon),
        key_strategy::<SceneTheme>().prop_map(Edit::Scene),
        "[a-zA-Z '.]{0,24}".prop_map(Edit::Name),
        (
            prop::sample::select(vec![
                ids::TOGGLE_BLOOD_DRIP,
                ids::TOGGLE_MOSS,
                ids::TOGGLE_CRACKS
            ]),
            any::<bool>()
        )
            .prop_map(|(id, on)| Edit::Toggle(id, on)),
    ]
}

fn apply(doc: &mut Document, edit: &Edit) {
    match edit {
        Edit::Shape(v) => doc.set_value(ids::SELECT_SHAPE, v.as_str()),
        Edit::Color(v) => doc.set_value(ids::SELECT_COLOR, v.as_str()),
        Edit::Font(v) => doc.set_value(ids::SELECT_FONT, v.as_str()),
        Edit::Engraving(v) => doc.set_value(ids::SELECT_ENGRAVING, v.as_str()),
        Edit::Icon(v) => doc.set_value(ids::SELECT_ICON, v.as_str()),
        Edit::Scene(v) => doc.set_value(ids::SELECT_SCENE, v.as_str()),
        Edit::Name(v) => doc.set_value(ids::INPUT_NAME, v.as_str()),
        Edit::Toggle(id, on) => doc.set_checked(id, *on),
    };
}

fn token_set(doc: &Document, id: &str) -> BTreeSet<String> {
    doc.get(id)
        .map(|n| n.classes.iter().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Copy every control value of `from` into a fresh document.
fn fresh_with_controls_of(from: &Document) -> Document {
    let mut doc = designer_document();
    for node in from.nodes() {
        if doc.contains(&node.id) {
            doc.set_value(&node.id, node.value.clone());
            doc.set_checked(&node.id, node.checked);
        }
    }
    doc
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every token family appears exactly once on the nodes it styles
    #[test]
    fn families_stay_exclusive(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let mut doc = designer_document();
        update_stone(&mut doc);

        for edit in &edits {
            apply(&mut doc, edit);
            update_stone(&mut doc);

            let card = doc.get(ids::CARD).unwrap();
            prop_assert_eq!(family_count::<Shape>(card), 1);
            prop_assert_eq!(family_count::<StoneColor>(card), 1);

            for id in [ids::ICON, ids::NAME, ids::DATES, ids::EPITAPH] {
                prop_assert_eq!(family_count::<EngravingColor>(doc.get(id).unwrap()), 1);
            }
            for id in [ids::NAME, ids::DATES, ids::EPITAPH] {
                prop_assert_eq!(family_count::<Font>(doc.get(id).unwrap()), 1);
            }
        }
    }

    /// Only the oval shape carries an inline height
    #[test]
    fn only_oval_has_height(shape in key_strategy::<Shape>()) {
        let mut doc = designer_document();
        doc.set_value(ids::SELECT_SHAPE, "oval");
        update_stone(&mut doc);
        doc.set_value(ids::SELECT_SHAPE, shape.as_str());
        update_stone(&mut doc);

        let card = doc.get(ids::CARD).unwrap();
        prop_assert_eq!(card.style_of("width"), Some("250px"));
        if shape == "oval" {
            prop_assert_eq!(card.style_of("height"), Some("400px"));
        } else {
            prop_assert_eq!(card.style_of("height"), None);
        }
    }

    /// The rendered classes depend only on the final control values
    #[test]
    fn render_is_history_independent(edits in prop::collection::vec(edit_strategy(), 0..30)) {
        let mut doc = designer_document();
        update_stone(&mut doc);
        for edit in &edits {
            apply(&mut doc, edit);
            update_stone(&mut doc);
        }

        let mut fresh = fresh_with_controls_of(&doc);
        update_stone(&mut fresh);

        for node in fresh.nodes() {
            prop_assert_eq!(
                token_set(&doc, &node.id),
                token_set(&fresh, &node.id),
                "classes differ on {}", node.id
            );
            prop_assert_eq!(doc.text_of(&node.id), fresh.text_of(&node.id));
            prop_assert_eq!(doc.style_attr(&node.id), fresh.style_attr(&node.id));
        }
    }

    /// After any scene, no themed node keeps tokens unique to the other palette
    #[test]
    fn scene_switch_leaves_no_residue(edits in prop::collection::vec(edit_strategy(), 0..20)) {
        let mut doc = designer_document();
        update_stone(&mut doc);
        for edit in &edits {
            apply(&mut doc, edit);
            update_stone(&mut doc);
        }

        let dark: BTreeSet<&str> = GOTHIC_NIGHT.all_tokens().into_iter().collect();
        let light: BTreeSet<&str> = DAYLIGHT.all_tokens().into_iter().collect();
        let scene = SceneTheme::from_value(doc.value_of(ids::SELECT_SCENE));
        let foreign: Vec<&str> = match scene {
            SceneTheme::GothicNight => light.difference(&dark).copied().collect(),
            SceneTheme::Daylight => dark.difference(&light).copied().collect(),
        };

        for role in THEMED_ROLES {
            for node in doc.by_role(*role) {
                for token in &foreign {
                    prop_assert!(
                        !node.classes.contains(token),
                        "{} still carries {} under {:?}", node.id, token, scene
                    );
                }
            }
        }
    }
}

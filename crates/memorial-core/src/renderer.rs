//! Live preview renderer for the gravestone designer.
//!
//! [`update_stone`] captures the controls into a [`StoneConfig`] and
//! [`render`] re-derives every class, style and text assignment of the
//! card and the themed chrome from it. Each step first removes the whole
//! token family it owns, so the result depends only on the configuration
//! and never on what was rendered before.

use crate::designer::{ids, StoneConfig};
use crate::dom::{Document, Node, Role};
use crate::palette::{ThemePalette, INPUT_RESIDUE, THEMED_ROLES};
use crate::stone::{Icon, Shape};
use crate::tokens::{apply_exclusive, Choice, Keyed};

/// Card width in every shape.
pub const CARD_WIDTH: &str = "250px";
/// Card height forced for the oval silhouette.
pub const OVAL_HEIGHT: &str = "400px";

/// Elements carrying the engraving color.
const ENGRAVED: &[&str] = &[ids::ICON, ids::NAME, ids::DATES, ids::EPITAPH];
/// Elements carrying the inscription font.
const INSCRIBED: &[&str] = &[ids::NAME, ids::DATES, ids::EPITAPH];

/// Re-render the designer from its current control values.
pub fn update_stone(doc: &mut Document) {
    let config = StoneConfig::capture(doc);
    render(&config, doc);
}

/// Apply `config` to the element tree.
///
/// Total over any configuration: unrecognized values produce tokens that
/// match no stylesheet rule, and missing elements are skipped.
pub fn render(config: &StoneConfig, doc: &mut Document) {
    tracing::debug!(
        scene = config.scene_theme.key(),
        shape = config.shape.key(),
        color = config.stone_color.key(),
        font = config.font.key(),
        "rendering stone"
    );

    apply_scene(config, doc);
    apply_text(config, doc);

    if let Some(card) = doc.get_mut(ids::CARD) {
        apply_exclusive(card, &config.stone_color);
        apply_exclusive(card, &config.shape);
        apply_geometry(card, &config.shape);
    }

    for id in ENGRAVED {
        if let Some(node) = doc.get_mut(id) {
            apply_exclusive(node, &config.engraving_color);
        }
    }

    apply_icon(config, doc);

    for id in INSCRIBED {
        if let Some(node) = doc.get_mut(id) {
            apply_exclusive(node, &config.font);
        }
    }

    apply_toggles(config, doc);
}

/// Swap the opposite palette's tokens for the current palette's on every themed region.
fn apply_scene(config: &StoneConfig, doc: &mut Document) {
    let (current, opposite) = ThemePalette::for_scene(config.scene_theme);

    for role in THEMED_ROLES {
        let (Some(add), Some(remove)) = (current.tokens_for(*role), opposite.tokens_for(*role))
        else {
            continue;
        };
        for node in doc.by_role_mut(*role) {
            if *role == Role::Control {
                for token in INPUT_RESIDUE {
                    node.classes.remove(token);
                }
            } else {
                node.classes.remove_all(&remove);
            }
            node.classes.add_all(&add);
        }
    }
}

fn apply_text(config: &StoneConfig, doc: &mut Document) {
    let text = &config.text;
    let assignments = [
        (ids::NAME, text.display_name()),
        (ids::DATES, text.dates.clone()),
        (ids::EPITAPH, text.epitaph.clone()),
    ];
    for (id, value) in assignments {
        if let Some(node) = doc.get_mut(id) {
            node.text = value;
        }
    }
}

/// Oval needs an explicit box; every other shape keeps the baseline width
/// and its stylesheet height.
fn apply_geometry(card: &mut Node, shape: &Choice<Shape>) {
    card.set_style("width", CARD_WIDTH);
    if shape.known() == Some(Shape::Oval) {
        card.set_style("height", OVAL_HEIGHT);
    } else {
        card.remove_style("height");
    }
}

fn apply_icon(config: &StoneConfig, doc: &mut Document) {
    let Some(icon) = doc.get_mut(ids::ICON) else {
        return;
    };
    let glyph = config.icon.known().map(Icon::glyph).unwrap_or("");
    icon.text = glyph.to_string();

    let hidden = config.icon.known() == Some(Icon::None);
    icon.set_style("display", if hidden { "none" } else { "block" });
}

fn apply_toggles(config: &StoneConfig, doc: &mut Document) {
    if let Some(drip) = doc.get_mut(ids::BLOOD_DRIP) {
        drip.classes.set("active", config.blood_drip);
    }
    if let Some(card) = doc.get_mut(ids::CARD) {
        card.classes.set("mossy-effect", config.moss);
        card.classes.set("cracked", config.cracks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::designer_document;
    use crate::palette::{DAYLIGHT, GOTHIC_NIGHT};

    fn rendered() -> Document {
        let mut doc = designer_document();
        update_stone(&mut doc);
        doc
    }

    #[test]
    fn test_initial_render_applies_defaults() {
        let doc = rendered();
        let card = doc.get(ids::CARD).unwrap();

        assert!(card.classes.contains("gravestone"));
        assert!(card.classes.contains("shape-arched"));
        assert!(card.classes.contains("color-granite-gray"));
        assert_eq!(card.style_of("width"), Some("250px"));
        assert_eq!(card.style_of("height"), None);

        assert_eq!(doc.text_of(ids::NAME), "EDGAR ALLAN POE");
        assert_eq!(doc.text_of(ids::ICON), "†");
        assert!(doc.get(ids::NAME).unwrap().classes.contains("font-cinzel"));
        assert!(doc.get(ids::ICON).unwrap().classes.contains("engraving-gold"));
    }

    #[test]
    fn test_name_is_upper_cased_only_on_display() {
        let mut doc = rendered();
        doc.set_value(ids::INPUT_NAME, "jane doe");
        update_stone(&mut doc);

        assert_eq!(doc.text_of(ids::NAME), "JANE DOE");
        assert_eq!(doc.value_of(ids::INPUT_NAME), "jane doe");
    }

    #[test]
    fn test_oval_is_the_only_shape_with_height() {
        let mut doc = rendered();

        doc.set_value(ids::SELECT_SHAPE, "oval");
        update_stone(&mut doc);
        let card = doc.get(ids::CARD).unwrap();
        assert_eq!(card.style_of("width"), Some("250px"));
        assert_eq!(card.style_of("height"), Some("400px"));

        doc.set_value(ids::SELECT_SHAPE, "heart");
        update_stone(&mut doc);
        let card = doc.get(ids::CARD).unwrap();
        assert_eq!(card.style_of("width"), Some("250px"));
        assert_eq!(card.style_of("height"), None);
    }

    #[test]
    fn test_icon_none_hides_element() {
        let mut doc = rendered();
        doc.set_value(ids::SELECT_ICON, "none");
        update_stone(&mut doc);

        let icon = doc.get(ids::ICON).unwrap();
        assert_eq!(icon.text, "");
        assert_eq!(icon.style_of("display"), Some("none"));

        doc.set_value(ids::SELECT_ICON, "skull");
        update_stone(&mut doc);
        let icon = doc.get(ids::ICON).unwrap();
        assert_eq!(icon.text, "💀");
        assert_eq!(icon.style_of("display"), Some("block"));
    }

    #[test]
    fn test_unknown_icon_is_empty_but_visible() {
        let mut doc = rendered();
        doc.set_value(ids::SELECT_ICON, "pumpkin");
        update_stone(&mut doc);

        let icon = doc.get(ids::ICON).unwrap();
        assert_eq!(icon.text, "");
        assert_eq!(icon.style_of("display"), Some("block"));
    }

    #[test]
    fn test_toggles_round_trip() {
        let mut doc = rendered();

        doc.set_checked(ids::TOGGLE_BLOOD_DRIP, true);
        doc.set_checked(ids::TOGGLE_MOSS, true);
        doc.set_checked(ids::TOGGLE_CRACKS, true);
        update_stone(&mut doc);
        assert!(doc.get(ids::BLOOD_DRIP).unwrap().classes.contains("active"));
        let card = doc.get(ids::CARD).unwrap();
        assert!(card.classes.contains("mossy-effect"));
        assert!(card.classes.contains("cracked"));

        doc.set_checked(ids::TOGGLE_BLOOD_DRIP, false);
        doc.set_checked(ids::TOGGLE_MOSS, false);
        doc.set_checked(ids::TOGGLE_CRACKS, false);
        update_stone(&mut doc);
        assert!(!doc.get(ids::BLOOD_DRIP).unwrap().classes.contains("active"));
        let card = doc.get(ids::CARD).unwrap();
        assert!(!card.classes.contains("mossy-effect"));
        assert!(!card.classes.contains("cracked"));
    }

    #[test]
    fn test_missing_cracks_control_clears_cracked() {
        let mut doc = rendered();
        doc.set_checked(ids::TOGGLE_CRACKS, true);
        update_stone(&mut doc);

        doc.remove(ids::TOGGLE_CRACKS);
        update_stone(&mut doc);
        assert!(!doc.get(ids::CARD).unwrap().classes.contains("cracked"));
    }

    #[test]
    fn test_scene_switch_leaves_no_dark_tokens() {
        let mut doc = rendered();
        doc.set_value(ids::SELECT_SCENE, "daylight");
        update_stone(&mut doc);

        let light = DAYLIGHT.all_tokens();
        let dark_only: Vec<&str> = GOTHIC_NIGHT
            .all_tokens()
            .into_iter()
            .filter(|t| !light.contains(t))
            .collect();

        for node in doc.nodes() {
            for token in &dark_only {
                assert!(
                    !node.classes.contains(token),
                    "{} kept dark token {}",
                    node.id,
                    token
                );
            }
        }
        assert!(doc.get(ids::BODY).unwrap().classes.contains("bg-white"));
    }

    #[test]
    fn test_controls_always_get_one_palette() {
        let mut doc = rendered();
        doc.set_value(ids::SELECT_SCENE, "daylight");
        update_stone(&mut doc);
        doc.set_value(ids::SELECT_SCENE, "gothic-night");
        update_stone(&mut doc);

        let input = doc.get(ids::INPUT_NAME).unwrap();
        assert!(input.classes.contains("bg-[#1a1a1a]"));
        assert!(input.classes.contains("focus:ring-[#FFC000]"));
        assert!(!input.classes.contains("bg-[#FFF8F0]"));
        assert!(!input.classes.contains("text-gray-900"));
        assert!(input.classes.contains("designer-input"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut once = rendered();
        once.set_value(ids::SELECT_COLOR, "rose-red");
        update_stone(&mut once);

        let mut twice = once.clone();
        update_stone(&mut twice);
        update_stone(&mut twice);

        assert_eq!(once, twice);
    }
}

//! The designer page: element ids, the initial element tree, and the
//! immutable configuration captured from its controls.

use serde::Serialize;

use crate::dom::{Document, Node, Role};
use crate::stone::{EngravingColor, Font, Icon, SceneTheme, Shape, StoneColor};
use crate::tokens::{Choice, Keyed};

/// Element ids of the designer page.
pub mod ids {
    pub const BODY: &str = "page-body";
    pub const TITLE: &str = "designer-title";
    pub const SUBTITLE: &str = "designer-subtitle";
    pub const CAPTION: &str = "designer-caption";
    pub const CONTROLS_PANEL: &str = "controls-panel";
    pub const PREVIEW_AREA: &str = "preview-area";
    pub const GROUND: &str = "ground-el";

    pub const CONTAINER: &str = "gravestone-container";
    pub const CARD: &str = "gravestone-preview";
    pub const ICON: &str = "preview-icon";
    pub const NAME: &str = "preview-name";
    pub const DATES: &str = "preview-dates";
    pub const EPITAPH: &str = "preview-epitaph";
    pub const BLOOD_DRIP: &str = "blood-drip";

    pub const INPUT_NAME: &str = "input-name";
    pub const INPUT_DATES: &str = "input-dates";
    pub const INPUT_EPITAPH: &str = "input-epitaph";
    pub const SELECT_SHAPE: &str = "select-shape";
    pub const SELECT_COLOR: &str = "select-color";
    pub const SELECT_FONT: &str = "select-font";
    pub const SELECT_ENGRAVING: &str = "select-engraving-color";
    pub const SELECT_ICON: &str = "select-icon";
    pub const SELECT_SCENE: &str = "select-scene-theme";
    pub const TOGGLE_BLOOD_DRIP: &str = "toggle-blood-drip";
    pub const TOGGLE_MOSS: &str = "toggle-moss-effect";
    pub const TOGGLE_CRACKS: &str = "toggle-cracks";

    /// Label node id for a control id (`input-name` → `label-input-name`).
    pub fn label_for(control: &str) -> String {
        format!("label-{}", control)
    }
}

/// Secondary headings of the controls panel: (id, text).
pub const SECTION_HEADINGS: &[(&str, &str)] = &[
    ("heading-inscription", "Inscription"),
    ("heading-stone", "Stone"),
    ("heading-effects", "Effects"),
    ("heading-scene", "Scene"),
];

/// Controls of the designer in panel order: (id, label text).
pub const CONTROLS: &[(&str, &str)] = &[
    (ids::INPUT_NAME, "Name"),
    (ids::INPUT_DATES, "Dates"),
    (ids::INPUT_EPITAPH, "Epitaph"),
    (ids::SELECT_SHAPE, "Shape"),
    (ids::SELECT_COLOR, "Stone Color"),
    (ids::SELECT_FONT, "Font"),
    (ids::SELECT_ENGRAVING, "Engraving Color"),
    (ids::SELECT_ICON, "Icon"),
    (ids::TOGGLE_BLOOD_DRIP, "Blood Drip"),
    (ids::TOGGLE_MOSS, "Moss & Weathering"),
    (ids::TOGGLE_CRACKS, "Cracks"),
    (ids::SELECT_SCENE, "Scene Theme"),
];

/// Initial control values of a fresh designer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerDefaults {
    pub name: &'static str,
    pub dates: &'static str,
    pub epitaph: &'static str,
    pub shape: Shape,
    pub color: StoneColor,
    pub font: Font,
    pub engraving: EngravingColor,
    pub icon: Icon,
    pub scene: SceneTheme,
}

impl Default for DesignerDefaults {
    fn default() -> Self {
        Self {
            name: "Edgar Allan Poe",
            dates: "1809 - 1849",
            epitaph: "Quoth the Raven, Nevermore.",
            shape: Shape::Arched,
            color: StoneColor::GraniteGray,
            font: Font::Cinzel,
            engraving: EngravingColor::Gold,
            icon: Icon::Cross,
            scene: SceneTheme::GothicNight,
        }
    }
}

/// Build the designer element tree with the default control values.
///
/// The tree is unstyled; call [`crate::renderer::update_stone`] once to
/// apply the initial configuration.
pub fn designer_document() -> Document {
    designer_document_with(&DesignerDefaults::default())
}

pub fn designer_document_with(defaults: &DesignerDefaults) -> Document {
    let mut doc = Document::new();

    doc.insert(Node::new(ids::BODY, Role::Body).with_classes("min-h-screen designer-page"));
    doc.insert(
        Node::new(ids::TITLE, Role::Heading)
            .with_classes("designer-title")
            .with_text("Eternal Memorial Designer"),
    );
    doc.insert(
        Node::new(ids::SUBTITLE, Role::HeaderText)
            .with_classes("designer-subtitle")
            .with_text("Carve a resting place worthy of the Eclipse."),
    );
    doc.insert(
        Node::new(ids::CAPTION, Role::Caption)
            .with_classes("text-sm designer-caption")
            .with_text("Every change is carved into the stone as you make it."),
    );
    doc.insert(
        Node::new(ids::CONTROLS_PANEL, Role::ControlsPanel).with_classes("designer-panel rounded-xl"),
    );
    doc.insert(
        Node::new(ids::PREVIEW_AREA, Role::PreviewArea).with_classes("designer-preview rounded-xl"),
    );
    doc.insert(Node::new(ids::GROUND, Role::Ground).with_classes("ground border-t-4"));

    for (id, text) in SECTION_HEADINGS {
        doc.insert(
            Node::new(*id, Role::Subheading)
                .with_classes("section-heading border-b")
                .with_text(*text),
        );
    }

    for (id, text) in CONTROLS {
        doc.insert(
            Node::new(ids::label_for(id), Role::Label)
                .with_classes("designer-label")
                .with_text(*text),
        );
    }

    let control = |id: &str, value: &str| {
        Node::new(id, Role::Control)
            .with_classes("designer-input rounded-md")
            .with_value(value)
    };
    doc.insert(control(ids::INPUT_NAME, defaults.name));
    doc.insert(control(ids::INPUT_DATES, defaults.dates));
    doc.insert(control(ids::INPUT_EPITAPH, defaults.epitaph));
    doc.insert(control(ids::SELECT_SHAPE, defaults.shape.key()));
    doc.insert(control(ids::SELECT_COLOR, defaults.color.key()));
    doc.insert(control(ids::SELECT_FONT, defaults.font.key()));
    doc.insert(control(ids::SELECT_ENGRAVING, defaults.engraving.key()));
    doc.insert(control(ids::SELECT_ICON, defaults.icon.key()));
    doc.insert(control(ids::TOGGLE_BLOOD_DRIP, "on"));
    doc.insert(control(ids::TOGGLE_MOSS, "on"));
    doc.insert(control(ids::TOGGLE_CRACKS, "on"));
    doc.insert(control(ids::SELECT_SCENE, defaults.scene.key()));

    doc.insert(Node::new(ids::CONTAINER, Role::Plain).with_classes("gravestone-container"));
    doc.insert(Node::new(ids::CARD, Role::Plain).with_classes("gravestone"));
    doc.insert(Node::new(ids::ICON, Role::Plain).with_classes("stone-icon"));
    doc.insert(Node::new(ids::NAME, Role::Plain).with_classes("stone-name"));
    doc.insert(Node::new(ids::DATES, Role::Plain).with_classes("stone-dates"));
    doc.insert(Node::new(ids::EPITAPH, Role::Plain).with_classes("stone-epitaph"));
    doc.insert(Node::new(ids::BLOOD_DRIP, Role::Plain).with_classes("blood-drip"));

    doc
}

/// Free-text inscription as typed into the controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoneText {
    pub name: String,
    pub dates: String,
    pub epitaph: String,
}

impl StoneText {
    /// Name as shown on the stone.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Every designer control value, captured once per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoneConfig {
    pub scene_theme: SceneTheme,
    pub shape: Choice<Shape>,
    pub stone_color: Choice<StoneColor>,
    pub font: Choice<Font>,
    pub engraving_color: Choice<EngravingColor>,
    pub icon: Choice<Icon>,
    pub blood_drip: bool,
    pub moss: bool,
    pub cracks: bool,
    pub text: StoneText,
}

impl StoneConfig {
    /// Read the current control values. A missing cracks toggle reads as off.
    pub fn capture(doc: &Document) -> Self {
        Self {
            scene_theme: SceneTheme::from_value(doc.value_of(ids::SELECT_SCENE)),
            shape: Choice::parse(doc.value_of(ids::SELECT_SHAPE)),
            stone_color: Choice::parse(doc.value_of(ids::SELECT_COLOR)),
            font: Choice::parse(doc.value_of(ids::SELECT_FONT)),
            engraving_color: Choice::parse(doc.value_of(ids::SELECT_ENGRAVING)),
            icon: Choice::parse(doc.value_of(ids::SELECT_ICON)),
            blood_drip: doc.checked(ids::TOGGLE_BLOOD_DRIP).unwrap_or(false),
            moss: doc.checked(ids::TOGGLE_MOSS).unwrap_or(false),
            cracks: doc.checked(ids::TOGGLE_CRACKS).unwrap_or(false),
            text: StoneText {
                name: doc.value_of(ids::INPUT_NAME).to_string(),
                dates: doc.value_of(ids::INPUT_DATES).to_string(),
                epitaph: doc.value_of(ids::INPUT_EPITAPH).to_string(),
            },
        }
    }
}

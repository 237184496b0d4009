//! Scene palettes: the class-token bundles that theme the designer chrome.

use crate::dom::Role;
use crate::stone::SceneTheme;

/// A named bundle of class tokens, one entry per themed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub name: &'static str,
    pub body: &'static str,
    pub controls: &'static str,
    pub preview: &'static str,
    pub ground: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub header_text: &'static str,
    pub caption: &'static str,
    pub label: &'static str,
    pub input_bg: &'static str,
    pub input_focus: &'static str,
}

pub const GOTHIC_NIGHT: ThemePalette = ThemePalette {
    name: "gothic-night",
    body: "bg-[#0A0A0A] text-gray-100",
    controls: "bg-[#1a1a1a] shadow-2xl border border-[#333333]",
    preview: "bg-[#1a1a1a]/50 shadow-2xl",
    ground: "bg-green-700 border-green-800",
    heading: "text-white",
    subheading: "text-gray-300 border-[#333333]",
    header_text: "text-gray-300",
    caption: "text-gray-500",
    label: "text-gray-300",
    input_bg: "bg-[#1a1a1a] border-[#555555] text-gray-100",
    input_focus: "focus:ring-[#FFC000] focus:border-[#FFC000]",
};

pub const DAYLIGHT: ThemePalette = ThemePalette {
    name: "daylight",
    body: "bg-white text-gray-900",
    controls: "bg-gradient-to-br from-[#E8E8E8] to-[#C8C8C8] shadow-lg border border-[#999]",
    preview: "bg-[#FFF8F0] shadow-lg",
    ground: "bg-green-400 border-green-500",
    heading: "text-gray-900",
    subheading: "text-gray-900 border-[#FFB380]",
    header_text: "text-gray-700",
    caption: "text-gray-600",
    label: "text-gray-900",
    input_bg: "bg-[#FFF8F0] border-[#FFD7B5] text-gray-900",
    input_focus: "focus:ring-[#FF6B00] focus:border-[#FF6B00]",
};

/// Background, border and focus-ring tokens of both palettes.
///
/// Controls are always swept of this whole list before the current
/// palette's input tokens are added.
pub const INPUT_RESIDUE: &[&str] = &[
    "bg-[#1a1a1a]",
    "border-[#555555]",
    "text-gray-100",
    "bg-[#FFF8F0]",
    "border-[#FFD7B5]",
    "text-gray-900",
    "focus:ring-[#FFC000]",
    "focus:border-[#FFC000]",
    "focus:ring-[#FF6B00]",
    "focus:border-[#FF6B00]",
];

impl ThemePalette {
    /// Current and opposite palette for a scene.
    pub fn for_scene(scene: SceneTheme) -> (&'static ThemePalette, &'static ThemePalette) {
        match scene {
            SceneTheme::GothicNight => (&GOTHIC_NIGHT, &DAYLIGHT),
            SceneTheme::Daylight => (&DAYLIGHT, &GOTHIC_NIGHT),
        }
    }

    /// Tokens this palette assigns to a region, `None` for unthemed roles.
    pub fn tokens_for(&self, role: Role) -> Option<String> {
        let tokens = match role {
            Role::Body => self.body,
            Role::ControlsPanel => self.controls,
            Role::PreviewArea => self.preview,
            Role::Ground => self.ground,
            Role::Heading => self.heading,
            Role::Subheading => self.subheading,
            Role::HeaderText => self.header_text,
            Role::Caption => self.caption,
            Role::Label => self.label,
            Role::Control => return Some(format!("{} {}", self.input_bg, self.input_focus)),
            Role::Plain => return None,
        };
        Some(tokens.to_string())
    }

    /// Every token this palette can put on any region.
    pub fn all_tokens(&self) -> Vec<&'static str> {
        [
            self.body,
            self.controls,
            self.preview,
            self.ground,
            self.heading,
            self.subheading,
            self.header_text,
            self.caption,
            self.label,
            self.input_bg,
            self.input_focus,
        ]
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect()
    }
}

/// Roles restyled by the scene palette, in application order.
pub const THEMED_ROLES: &[Role] = &[
    Role::Body,
    Role::ControlsPanel,
    Role::PreviewArea,
    Role::Ground,
    Role::Heading,
    Role::HeaderText,
    Role::Caption,
    Role::Subheading,
    Role::Label,
    Role::Control,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_scene_returns_opposite() {
        let (current, opposite) = ThemePalette::for_scene(SceneTheme::GothicNight);
        assert_eq!(current.name, "gothic-night");
        assert_eq!(opposite.name, "daylight");

        let (current, opposite) = ThemePalette::for_scene(SceneTheme::Daylight);
        assert_eq!(current.name, "daylight");
        assert_eq!(opposite.name, "gothic-night");
    }

    #[test]
    fn test_input_residue_covers_both_palettes() {
        for palette in [&GOTHIC_NIGHT, &DAYLIGHT] {
            for token in palette
                .input_bg
                .split_whitespace()
                .chain(palette.input_focus.split_whitespace())
            {
                assert!(INPUT_RESIDUE.contains(&token), "missing {token}");
            }
        }
    }

    #[test]
    fn test_plain_role_is_unthemed() {
        assert!(GOTHIC_NIGHT.tokens_for(Role::Plain).is_none());
        assert_eq!(
            DAYLIGHT.tokens_for(Role::Control).as_deref(),
            Some("bg-[#FFF8F0] border-[#FFD7B5] text-gray-900 focus:ring-[#FF6B00] focus:border-[#FF6B00]")
        );
    }
}

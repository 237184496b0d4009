//! Floating embers, bats and spirits behind the hero, over the ambient layer.

use dioxus::prelude::*;
use memorial_core::decor::{AmbientBackground, Particle};

#[derive(Props, Clone, PartialEq)]
pub struct ParticleFieldProps {
    pub particles: Vec<Particle>,
    pub ambient: Option<AmbientBackground>,
}

#[component]
pub fn ParticleField(props: ParticleFieldProps) -> Element {
    rsx! {
        div { class: "particle-field", "aria-hidden": "true",
            if let Some(ambient) = &props.ambient {
                div {
                    class: "{ambient.class}",
                    style: "animation-duration: {ambient.duration_s}s;",
                }
            }
            for (i, particle) in props.particles.iter().enumerate() {
                span {
                    key: "{i}",
                    class: particle.kind.class(),
                    style: particle.style(),
                    "{particle.kind.glyph()}"
                }
            }
        }
    }
}

//! Floating particles behind the landing page hero.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Ember,
    Bat,
    Spirit,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [ParticleKind::Ember, ParticleKind::Bat, ParticleKind::Spirit];

    /// How many of this kind one spawner creates.
    pub fn count(self) -> usize {
        match self {
            ParticleKind::Ember => 24,
            ParticleKind::Bat => 6,
            ParticleKind::Spirit => 4,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ParticleKind::Ember => "•",
            ParticleKind::Bat => "🦇",
            ParticleKind::Spirit => "👻",
        }
    }

    /// CSS class carrying the keyframes for this kind.
    pub fn class(self) -> &'static str {
        match self {
            ParticleKind::Ember => "particle ember",
            ParticleKind::Bat => "particle bat",
            ParticleKind::Spirit => "particle spirit",
        }
    }

    fn size_px(self) -> Range<f32> {
        match self {
            ParticleKind::Ember => 2.0..6.0,
            ParticleKind::Bat => 16.0..32.0,
            ParticleKind::Spirit => 20.0..40.0,
        }
    }

    fn duration_s(self) -> Range<f32> {
        match self {
            ParticleKind::Ember => 6.0..12.0,
            ParticleKind::Bat => 10.0..20.0,
            ParticleKind::Spirit => 15.0..25.0,
        }
    }
}

const DELAY_S: Range<f32> = 0.0..10.0;

/// One particle, positioned and timed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Horizontal position as a percentage of the container width.
    pub left_pct: f32,
    pub size_px: f32,
    pub delay_s: f32,
    pub duration_s: f32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; font-size: {:.1}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.size_px, self.delay_s, self.duration_s
        )
    }
}

/// Spawn `count` particles of `kind` with random placement and timing.
pub fn spawn_particles<R: Rng>(kind: ParticleKind, count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            kind,
            left_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(kind.size_px()),
            delay_s: rng.random_range(DELAY_S),
            duration_s: rng.random_range(kind.duration_s()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_count_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for kind in ParticleKind::ALL {
            let particles = spawn_particles(kind, kind.count(), &mut rng);
            assert_eq!(particles.len(), kind.count());
            for p in &particles {
                assert_eq!(p.kind, kind);
                assert!((0.0..100.0).contains(&p.left_pct));
                assert!(kind.size_px().contains(&p.size_px));
                assert!(DELAY_S.contains(&p.delay_s));
                assert!(kind.duration_s().contains(&p.duration_s));
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = spawn_particles(ParticleKind::Bat, 5, &mut StdRng::seed_from_u64(42));
        let b = spawn_particles(ParticleKind::Bat, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_mentions_position_and_timing() {
        let p = Particle {
            kind: ParticleKind::Ember,
            left_pct: 12.5,
            size_px: 4.0,
            delay_s: 1.0,
            duration_s: 8.0,
        };
        assert_eq!(
            p.style(),
            "left: 12.50%; font-size: 4.0px; animation-delay: 1.00s; animation-duration: 8.00s;"
        );
    }
}

//! Decorative effects started once when a page loads.
//!
//! Every effect is a [`StartupTask`]. Tasks run independently against the
//! detected [`Capabilities`]; one that is unsupported or fails is logged
//! and skipped, and the rest still run.

pub mod particles;
pub mod reveal;

use crate::error::{MemorialError, MemorialResult};

pub use particles::{spawn_particles, Particle, ParticleKind};
pub use reveal::{Extent, RevealObserver, LANDING_TARGETS};

/// What the host environment supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    /// Element geometry can be queried for scroll reveal.
    pub scroll_observation: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            scroll_observation: true,
        }
    }
}

/// Animated gradient layer behind the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbientBackground {
    pub class: &'static str,
    pub duration_s: u32,
}

impl Default for AmbientBackground {
    fn default() -> Self {
        Self {
            class: "ambient-eclipse",
            duration_s: 30,
        }
    }
}

/// Output slots the startup tasks fill in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorScene {
    pub particles: Vec<Particle>,
    pub reveal: RevealObserver,
    pub smooth_scroll: bool,
    pub ambient: Option<AmbientBackground>,
}

pub trait StartupTask {
    fn name(&self) -> &'static str;

    /// Feature detection. Unsupported tasks are skipped.
    fn supported(&self, _caps: &Capabilities) -> bool {
        true
    }

    fn run(&self, caps: &Capabilities, scene: &mut DecorScene) -> MemorialResult<()>;
}

/// Spawns one kind of particle.
pub struct ParticleSpawner {
    pub kind: ParticleKind,
    pub count: usize,
}

impl ParticleSpawner {
    pub fn new(kind: ParticleKind) -> Self {
        Self {
            kind,
            count: kind.count(),
        }
    }
}

impl StartupTask for ParticleSpawner {
    fn name(&self) -> &'static str {
        match self.kind {
            ParticleKind::Ember => "embers",
            ParticleKind::Bat => "bats",
            ParticleKind::Spirit => "spirits",
        }
    }

    fn supported(&self, caps: &Capabilities) -> bool {
        !caps.reduced_motion
    }

    fn run(&self, _caps: &Capabilities, scene: &mut DecorScene) -> MemorialResult<()> {
        let mut rng = rand::rng();
        scene
            .particles
            .extend(spawn_particles(self.kind, self.count, &mut rng));
        Ok(())
    }
}

/// Registers the landing sections with the reveal observer.
pub struct ScrollReveal {
    pub targets: &'static [(&'static str, bool)],
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self {
            targets: LANDING_TARGETS,
        }
    }
}

impl StartupTask for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn run(&self, caps: &Capabilities, scene: &mut DecorScene) -> MemorialResult<()> {
        if self.targets.is_empty() {
            return Err(MemorialError::Decor("no reveal targets".to_string()));
        }
        let mut observer = RevealObserver::with_targets(self.targets);
        if !caps.scroll_observation {
            observer.reveal_all();
        }
        scene.reveal = observer;
        Ok(())
    }
}

pub struct SmoothScroll;

impl StartupTask for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn supported(&self, caps: &Capabilities) -> bool {
        !caps.reduced_motion
    }

    fn run(&self, _caps: &Capabilities, scene: &mut DecorScene) -> MemorialResult<()> {
        scene.smooth_scroll = true;
        Ok(())
    }
}

pub struct Ambient;

impl StartupTask for Ambient {
    fn name(&self) -> &'static str {
        "ambient-background"
    }

    fn supported(&self, caps: &Capabilities) -> bool {
        !caps.reduced_motion
    }

    fn run(&self, _caps: &Capabilities, scene: &mut DecorScene) -> MemorialResult<()> {
        scene.ambient = Some(AmbientBackground::default());
        Ok(())
    }
}

/// The landing page task set.
pub fn landing_tasks() -> Vec<Box<dyn StartupTask>> {
    let mut tasks: Vec<Box<dyn StartupTask>> = ParticleKind::ALL
        .into_iter()
        .map(|kind| Box::new(ParticleSpawner::new(kind)) as Box<dyn StartupTask>)
        .collect();
    tasks.push(Box::new(ScrollReveal::default()));
    tasks.push(Box::new(SmoothScroll));
    tasks.push(Box::new(Ambient));
    tasks
}

/// Run every task into a fresh scene.
pub fn run_startup_tasks(tasks: &[Box<dyn StartupTask>], caps: &Capabilities) -> DecorScene {
    let mut scene = DecorScene::default();
    for task in tasks {
        if !task.supported(caps) {
            tracing::debug!(task = task.name(), "startup task unsupported, skipping");
            continue;
        }
        match task.run(caps, &mut scene) {
            Ok(()) => tracing::debug!(task = task.name(), "startup task ran"),
            Err(e) => tracing::warn!(task = task.name(), "startup task failed: {}", e),
        }
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl StartupTask for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn run(&self, _caps: &Capabilities, _scene: &mut DecorScene) -> MemorialResult<()> {
            Err(MemorialError::Decor("boom".to_string()))
        }
    }

    #[test]
    fn test_full_motion_runs_everything() {
        let scene = run_startup_tasks(&landing_tasks(), &Capabilities::default());
        let expected: usize = ParticleKind::ALL.iter().map(|k| k.count()).sum();
        assert_eq!(scene.particles.len(), expected);
        assert!(scene.smooth_scroll);
        assert!(scene.ambient.is_some());
        assert!(scene.reveal.is_revealed("hero-title"));
        assert!(!scene.reveal.is_revealed("about"));
    }

    #[test]
    fn test_reduced_motion_skips_animation() {
        let caps = Capabilities {
            reduced_motion: true,
            scroll_observation: true,
        };
        let scene = run_startup_tasks(&landing_tasks(), &caps);
        assert!(scene.particles.is_empty());
        assert!(!scene.smooth_scroll);
        assert!(scene.ambient.is_none());
        assert!(scene.reveal.is_revealed("hero-title"));
    }

    #[test]
    fn test_no_observation_reveals_everything() {
        let caps = Capabilities {
            reduced_motion: false,
            scroll_observation: false,
        };
        let scene = run_startup_tasks(&landing_tasks(), &caps);
        assert!(scene.reveal.pending().is_empty());
        assert!(scene.reveal.is_revealed("register"));
    }

    #[test]
    fn test_failure_does_not_stop_later_tasks() {
        let tasks: Vec<Box<dyn StartupTask>> = vec![
            Box::new(Failing),
            Box::new(SmoothScroll),
            Box::new(ScrollReveal { targets: &[] }),
            Box::new(Ambient),
        ];
        let scene = run_startup_tasks(&tasks, &Capabilities::default());
        assert!(scene.smooth_scroll);
        assert!(scene.ambient.is_some());
    }
}

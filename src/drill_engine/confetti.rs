//! Success celebration: a discrete-time confetti simulation.
//!
//! The host calls [`Confetti::tick`] once per visual frame. Each tick clears
//! the canvas and redraws every live particle, so there are no trails. After
//! `frame_budget` ticks the canvas is cleared for good and the burst ends,
//! whatever particle life remains.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::drill_engine::models::Bounds;

/// One particle as drawn on a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub size: f32,
    /// Degrees, `[0, 360)`.
    pub hue: f32,
    /// `(0, 1]`; fully faded particles are never drawn.
    pub alpha: f32,
}

/// Render surface owned by the animation engine.
pub trait Canvas {
    fn clear(&mut self);
    fn draw(&mut self, sprite: &Sprite);
}

/// In-memory canvas holding the sprites of the current frame.
#[derive(Debug, Clone, Default)]
pub struct SpriteBuffer {
    sprites: Vec<Sprite>,
    clears: usize,
}

impl SpriteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn is_blank(&self) -> bool {
        self.sprites.is_empty()
    }

    /// How many times the canvas has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Canvas for SpriteBuffer {
    fn clear(&mut self) {
        self.sprites.clear();
        self.clears += 1;
    }

    fn draw(&mut self, sprite: &Sprite) {
        self.sprites.push(*sprite);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub particle_count: usize,
    /// Hard ceiling on the number of frames a burst runs.
    pub frame_budget: u32,
    /// Added to vertical velocity every frame.
    pub gravity: f32,
    pub min_ttl: u32,
    /// Exclusive.
    pub max_ttl: u32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        ConfettiConfig {
            particle_count: 120,
            frame_budget: 140,
            gravity: 0.25,
            min_ttl: 90,
            max_ttl: 150,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    rotation: f32,
    spin: f32,
    size: f32,
    hue: f32,
    age: u32,
    ttl: u32,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, origin_x: f32, origin_y: f32, cfg: &ConfettiConfig) -> Self {
        let ttl = if cfg.max_ttl > cfg.min_ttl {
            rng.gen_range(cfg.min_ttl..cfg.max_ttl)
        } else {
            cfg.min_ttl
        };
        Particle {
            x: origin_x,
            y: origin_y,
            vx: rng.gen_range(-6.0..6.0),
            // Negative is up.
            vy: rng.gen_range(-14.0..-4.0),
            rotation: rng.gen_range(0.0..TAU),
            spin: rng.gen_range(-0.2..0.2),
            size: rng.gen_range(4.0..10.0),
            hue: rng.gen_range(0.0..360.0),
            age: 0,
            ttl,
        }
    }

    fn step(&mut self, gravity: f32) {
        self.age += 1;
        self.vy += gravity;
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.spin;
    }

    fn alpha(&self) -> f32 {
        if self.ttl == 0 {
            return 0.0;
        }
        1.0 - self.age as f32 / self.ttl as f32
    }

    fn sprite(&self, alpha: f32) -> Sprite {
        Sprite {
            x: self.x,
            y: self.y,
            rotation: self.rotation,
            size: self.size,
            hue: self.hue,
            alpha,
        }
    }
}

/// The confetti engine. Owns its canvas for its whole lifetime.
pub struct Confetti<C: Canvas> {
    canvas: C,
    config: ConfettiConfig,
    particles: Vec<Particle>,
    frame: u32,
    running: bool,
}

impl<C: Canvas> Confetti<C> {
    pub fn new(canvas: C, config: ConfettiConfig) -> Self {
        Confetti {
            canvas,
            particles: Vec::with_capacity(config.particle_count),
            config,
            frame: 0,
            running: false,
        }
    }

    /// Start a burst centred horizontally, a third of the way down.
    ///
    /// A burst already in flight is discarded; the last one started wins.
    pub fn start<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
        let origin_x = bounds.width / 2.0;
        let origin_y = bounds.height / 3.0;

        self.canvas.clear();
        self.particles.clear();
        self.particles.extend(
            (0..self.config.particle_count).map(|_| Particle::spawn(rng, origin_x, origin_y, &self.config)),
        );
        self.frame = 0;
        self.running = true;
        tracing::debug!(
            particles = self.particles.len(),
            width = bounds.width,
            height = bounds.height,
            "confetti burst started"
        );
    }

    /// Advance one frame. Returns whether the burst is still running.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.frame += 1;
        self.canvas.clear();

        let gravity = self.config.gravity;
        for p in &mut self.particles {
            p.step(gravity);
            let alpha = p.alpha();
            if alpha > 0.0 {
                self.canvas.draw(&p.sprite(alpha));
            }
        }

        if self.frame >= self.config.frame_budget {
            self.canvas.clear();
            self.particles.clear();
            self.running = false;
            tracing::trace!(frames = self.frame, "confetti burst finished");
        }
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames simulated in the current (or last) burst.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> Bounds {
        Bounds { width: 300.0, height: 90.0 }
    }

    fn started(seed: u64) -> Confetti<SpriteBuffer> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut confetti = Confetti::new(SpriteBuffer::new(), ConfettiConfig::default());
        confetti.start(bounds(), &mut rng);
        confetti
    }

    #[test]
    fn burst_spawns_120_particles_at_origin() {
        let c = started(1);
        assert!(c.is_running());
        assert_eq!(c.particle_count(), 120);
        for p in &c.particles {
            assert_eq!((p.x, p.y), (150.0, 30.0));
            assert!((90..150).contains(&p.ttl), "ttl {} out of range", p.ttl);
            assert!(p.vy < 0.0, "particle not launched upward");
            assert!((-6.0..6.0).contains(&p.vx));
            assert!((0.0..360.0).contains(&p.hue));
        }
    }

    #[test]
    fn first_frame_draws_every_particle() {
        let mut c = started(2);
        assert!(c.tick());
        assert_eq!(c.canvas().sprites().len(), 120);
        assert!(c.canvas().sprites().iter().all(|s| s.alpha > 0.0 && s.alpha < 1.0));
    }

    #[test]
    fn gravity_and_velocity_are_integrated() {
        let mut c = started(3);
        let before = c.particles[0];
        c.tick();
        let after = c.particles[0];
        assert_eq!(after.age, 1);
        assert_eq!(after.vy, before.vy + 0.25);
        assert_eq!(after.x, before.x + before.vx);
        assert_eq!(after.y, before.y + (before.vy + 0.25));
        assert_eq!(after.rotation, before.rotation + before.spin);
    }

    #[test]
    fn canvas_is_cleared_every_frame() {
        let mut c = started(4);
        let base = c.canvas().clear_count();
        for _ in 0..10 {
            c.tick();
        }
        assert_eq!(c.canvas().clear_count(), base + 10);
        // Redrawn from scratch, not accumulated.
        assert!(c.canvas().sprites().len() <= 120);
    }

    #[test]
    fn faded_particles_are_not_drawn() {
        let mut c = started(5);
        for _ in 0..100 {
            c.tick();
        }
        // Past frame 90 the shortest-lived particles are gone.
        let expired = c.particles.iter().filter(|p| p.age >= p.ttl).count();
        assert!(expired > 0);
        assert_eq!(c.canvas().sprites().len(), 120 - expired);
    }

    #[test]
    fn stops_at_frame_budget_and_clears() {
        let mut c = started(6);
        let mut frames = 0;
        while c.tick() {
            frames += 1;
            assert!(frames < 1000, "confetti never stopped");
        }
        assert_eq!(c.frame(), 140);
        assert!(!c.is_running());
        assert!(c.canvas().is_blank());
        assert_eq!(c.particle_count(), 0);
        assert!(!c.tick());
    }

    #[test]
    fn restart_supersedes_running_burst() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut c = Confetti::new(SpriteBuffer::new(), ConfettiConfig::default());
        c.start(bounds(), &mut rng);
        for _ in 0..50 {
            c.tick();
        }
        c.start(bounds(), &mut rng);
        assert_eq!(c.frame(), 0);
        assert_eq!(c.particle_count(), 120);
        assert!(c.canvas().is_blank());
        assert!(c.particles.iter().all(|p| p.age == 0));
    }

    #[test]
    fn idle_engine_does_nothing() {
        let mut c = Confetti::new(SpriteBuffer::new(), ConfettiConfig::default());
        assert!(!c.tick());
        assert_eq!(c.canvas().clear_count(), 0);
    }

    #[test]
    fn same_seed_spawns_identical_bursts() {
        assert_eq!(started(9).particles, started(9).particles);
        assert_ne!(started(9).particles, started(10).particles);
    }
}

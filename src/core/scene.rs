// Hero background scene: glow nodes, free particles and their update cycle.
//
// All motion here is frame-counted rather than wall-clock based; a dropped
// frame simply slows the animation down. The scene owns its entire state and
// exposes a steppable [`Scene::step`] so the numeric model runs without a
// rendering surface.

use super::color::{self, Rgba};
use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Fixed decorative point rendered with a halo, rings and a solid core.
#[derive(Clone, Debug)]
pub struct GlowNode {
    /// Set once at creation, proportional to the viewport at that moment.
    pub base: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub pulse_speed: f32,
    /// Reserved weighting value; kept as data, never read by the update.
    pub intensity: f32,
    /// Recomputed every frame from the clock.
    pub pulse_radius: f32,
    /// Drift offset recomputed every frame; rendering adds it to `base`.
    pub offset: Vec2,
}

impl GlowNode {
    pub fn is_accent(&self) -> bool {
        self.color.same_rgb(color::ACCENT)
    }
}

/// Moving point with a bounded position history.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Most recent positions, oldest first, capped at [`TRAIL_CAP`].
    pub trail: SmallVec<[Vec2; TRAIL_CAP]>,
    /// Reserved weighting value in [0.4, 1.0); never read by the update.
    pub life: f32,
    pub friction: f32,
}

impl Particle {
    /// One frame of motion: record the trail point, damp and integrate,
    /// bounce off the walls, pull weakly toward the center, clamp speed.
    pub fn step(&mut self, width: f32, height: f32) {
        if self.trail.len() == TRAIL_CAP {
            self.trail.remove(0);
        }
        self.trail.push(self.pos);

        self.vel *= self.friction;
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x *= -BOUNCE_DAMPING;
            self.pos.x = self.pos.x.clamp(0.0, width);
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y *= -BOUNCE_DAMPING;
            self.pos.y = self.pos.y.clamp(0.0, height);
        }

        let to_center = Vec2::new(width * 0.5, height * 0.5) - self.pos;
        let dist = to_center.length();
        if dist > CENTER_DEADZONE {
            self.vel += to_center / dist * CENTER_PULL;
        }

        let speed = self.vel.length();
        if speed > MAX_SPEED {
            self.vel *= MAX_SPEED / speed;
        }
    }
}

struct NodeSeed {
    fx: f32,
    fy: f32,
    radius: f32,
    color: Rgba,
    pulse_speed: f32,
    intensity: f32,
}

// Hand-tuned layout for the five nodes, as fractions of the viewport.
const NODE_SEEDS: [NodeSeed; NODE_COUNT] = [
    NodeSeed { fx: 0.2, fy: 0.35, radius: 14.0, color: color::INK, pulse_speed: 0.018, intensity: 1.2 },
    NodeSeed { fx: 0.5, fy: 0.5, radius: 12.0, color: color::ACCENT, pulse_speed: 0.022, intensity: 1.4 },
    NodeSeed { fx: 0.78, fy: 0.4, radius: 13.0, color: color::INK, pulse_speed: 0.02, intensity: 1.1 },
    NodeSeed { fx: 0.72, fy: 0.75, radius: 9.0, color: color::GRAY, pulse_speed: 0.019, intensity: 0.9 },
    NodeSeed { fx: 0.28, fy: 0.7, radius: 11.0, color: color::ACCENT, pulse_speed: 0.021, intensity: 1.15 },
];

/// The whole animated state: clock, bounds, pointer, nodes and particles.
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Frame counter; unbounded, drives every phase-based oscillation.
    pub time: u64,
    /// Last known cursor position; tracked for future use, unread downstream.
    pub pointer: Vec2,
    pub nodes: Vec<GlowNode>,
    pub particles: Vec<Particle>,
}

impl Scene {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let nodes = NODE_SEEDS
            .iter()
            .map(|s| GlowNode {
                base: Vec2::new(width * s.fx, height * s.fy),
                radius: s.radius,
                color: s.color,
                pulse_speed: s.pulse_speed,
                intensity: s.intensity,
                pulse_radius: s.radius,
                offset: Vec2::ZERO,
            })
            .collect();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let accent = rng.gen::<f32>() > ACCENT_SPLIT;
                Particle {
                    pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                    vel: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * SPAWN_SPEED_SPAN,
                        (rng.gen::<f32>() - 0.5) * SPAWN_SPEED_SPAN,
                    ),
                    radius: rng.gen::<f32>() * SPAWN_RADIUS_SPAN + SPAWN_RADIUS_MIN,
                    color: if accent {
                        color::PARTICLE_ACCENT
                    } else {
                        color::PARTICLE_INK
                    },
                    trail: SmallVec::new(),
                    life: rng.gen::<f32>() * LIFE_SPAN + LIFE_MIN,
                    friction: FRICTION,
                }
            })
            .collect();

        Self {
            width,
            height,
            time: 0,
            pointer: Vec2::new(width * 0.5, height * 0.5),
            nodes,
            particles,
        }
    }

    /// New bounds after a viewport resize. Node bases and both population
    /// counts are deliberately left untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance the clock by one frame and update every particle and node.
    pub fn step(&mut self) {
        self.time += 1;
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
        let t = self.time as f32;
        for n in &mut self.nodes {
            n.pulse_radius = n.radius + (t * n.pulse_speed).sin() * PULSE_AMPLITUDE;
            n.offset = Vec2::new(
                (t * DRIFT_X_FREQ).cos() * DRIFT_AMPLITUDE,
                (t * DRIFT_Y_FREQ).sin() * DRIFT_AMPLITUDE,
            );
        }
    }
}

/// Opacity of a particle-particle connection, or `None` when the pair is at
/// or beyond the threshold distance.
#[inline]
pub fn link_alpha(dist: f32) -> Option<f32> {
    (dist < LINK_DIST).then(|| LINK_ALPHA * (1.0 - dist / LINK_DIST))
}

/// Opacity of a particle-node connection; same strict-threshold rule.
#[inline]
pub fn node_link_alpha(dist: f32) -> Option<f32> {
    (dist < NODE_LINK_DIST).then(|| NODE_LINK_ALPHA * (1.0 - dist / NODE_LINK_DIST))
}

/// Vertical center of wave band `i`, as drawn on a canvas of `height` px.
#[inline]
pub fn wave_band_y(height: f32, band: usize) -> f32 {
    height * (WAVE_BAND_BASE + band as f32 * WAVE_BAND_STEP)
}

/// Wave sample at horizontal position `x` for the given frame.
#[inline]
pub fn wave_y(band_y: f32, x: f32, time: u64) -> f32 {
    band_y + ((x + time as f32 * WAVE_TIME_SCALE) / WAVE_LENGTH).sin() * WAVE_HEIGHT
}

/// Stroke opacity for wave band `i`; fades with the band index.
#[inline]
pub fn wave_alpha(band: usize) -> f32 {
    WAVE_ALPHA_BASE - band as f32 * WAVE_ALPHA_FALLOFF
}

/// Alpha ramp for a trail dot: older points are fainter.
#[inline]
pub fn trail_alpha(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    (index as f32 / len as f32) * TRAIL_ALPHA_MAX
}

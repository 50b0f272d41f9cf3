// Host-side tests for the hero scene model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;
use glam::Vec2;
use scene::*;
use smallvec::SmallVec;

fn make_scene() -> Scene {
    Scene::new(1280.0, 800.0, 42)
}

fn make_particle(pos: Vec2, vel: Vec2) -> Particle {
    Particle {
        pos,
        vel,
        radius: 1.5,
        color: color::PARTICLE_INK,
        trail: SmallVec::new(),
        life: 0.7,
        friction: FRICTION,
    }
}

#[test]
fn scene_has_fixed_population() {
    let scene = make_scene();
    assert_eq!(scene.nodes.len(), NODE_COUNT);
    assert_eq!(scene.particles.len(), PARTICLE_COUNT);
}

#[test]
fn population_survives_many_steps_and_resizes() {
    let mut scene = make_scene();
    for i in 0..200 {
        if i == 50 {
            scene.resize(640.0, 480.0);
        }
        if i == 100 {
            scene.resize(1920.0, 1080.0);
        }
        scene.step();
        assert_eq!(scene.nodes.len(), NODE_COUNT);
        assert_eq!(scene.particles.len(), PARTICLE_COUNT);
    }
}

#[test]
fn seeded_scenes_are_reproducible() {
    let a = Scene::new(1280.0, 800.0, 7);
    let b = Scene::new(1280.0, 800.0, 7);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.color, pb.color);
    }
}

#[test]
fn speed_stays_clamped_after_any_step() {
    let mut scene = make_scene();
    for _ in 0..500 {
        scene.step();
        for p in &scene.particles {
            assert!(
                p.vel.length() <= MAX_SPEED + 1e-4,
                "speed {} exceeds clamp",
                p.vel.length()
            );
        }
    }
}

#[test]
fn positions_stay_inside_canvas_bounds() {
    let mut scene = make_scene();
    for _ in 0..500 {
        scene.step();
        for p in &scene.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= scene.width, "x = {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y <= scene.height, "y = {}", p.pos.y);
        }
    }
}

#[test]
fn trail_is_fifo_capped_at_fifteen() {
    let mut p = make_particle(Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.5));
    for i in 1..=20 {
        p.step(800.0, 600.0);
        assert!(p.trail.len() <= TRAIL_CAP);
        assert_eq!(p.trail.len(), i.min(TRAIL_CAP));
    }
    assert_eq!(p.trail.len(), TRAIL_CAP);
}

#[test]
fn trail_evicts_oldest_point_first() {
    let mut p = make_particle(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
    let mut positions = Vec::new();
    for _ in 0..20 {
        positions.push(p.pos);
        p.step(10_000.0, 10_000.0);
    }
    // Trail should be the 15 most recent pre-step positions, oldest first
    let expected = &positions[positions.len() - TRAIL_CAP..];
    assert_eq!(p.trail.as_slice(), expected);
}

#[test]
fn friction_damps_velocity_by_two_percent() {
    // Center of a huge canvas: no bounce, no centering pull, under the
    // speed clamp, so the update reduces to friction + integration.
    let center = Vec2::new(5000.0, 5000.0);
    let mut p = make_particle(center, Vec2::new(1.0, 2.0));
    p.step(10_000.0, 10_000.0);
    assert!((p.vel.x - 0.98).abs() < 1e-6);
    assert!((p.vel.y - 1.96).abs() < 1e-6);
    assert!((p.pos.x - (5000.0 + 0.98)).abs() < 1e-3);
    assert!((p.pos.y - (5000.0 + 1.96)).abs() < 1e-3);
}

#[test]
fn fast_particle_is_rescaled_to_max_speed() {
    // (3, 4) damps to (2.94, 3.92), speed 4.9, then rescales to 3.5 while
    // keeping direction.
    let center = Vec2::new(5000.0, 5000.0);
    let mut p = make_particle(center, Vec2::new(3.0, 4.0));
    p.step(10_000.0, 10_000.0);
    assert!((p.vel.length() - MAX_SPEED).abs() < 1e-4);
    assert!((p.vel.x - 2.1).abs() < 1e-4);
    assert!((p.vel.y - 2.8).abs() < 1e-4);
}

#[test]
fn wall_hit_inverts_and_damps_velocity() {
    let mut p = make_particle(Vec2::new(99.9, 50.0), Vec2::new(5.0, 0.0));
    p.step(100.0, 100.0);
    // 5.0 * 0.98 = 4.9 carries past the wall; bounce gives -3.92, then the
    // speed clamp brings it to -3.5
    assert_eq!(p.pos.x, 100.0);
    assert!((p.vel.x + MAX_SPEED).abs() < 1e-4);
}

#[test]
fn far_particles_are_pulled_toward_center() {
    let mut p = make_particle(Vec2::ZERO, Vec2::ZERO);
    p.step(1000.0, 1000.0);
    // (0,0) is ~707px from center, beyond the deadzone
    assert!(p.vel.x > 0.0 && p.vel.y > 0.0);
    assert!((p.vel.length() - CENTER_PULL).abs() < 1e-5);
}

#[test]
fn near_particles_feel_no_centering_pull() {
    let mut p = make_particle(Vec2::new(500.0, 500.0), Vec2::ZERO);
    p.step(1000.0, 1000.0);
    assert_eq!(p.vel, Vec2::ZERO);
}

#[test]
fn link_threshold_is_strict() {
    assert!(scene::link_alpha(140.0).is_none());
    assert!(scene::link_alpha(139.99).is_some());
    assert!(scene::node_link_alpha(220.0).is_none());
    assert!(scene::node_link_alpha(219.99).is_some());
}

#[test]
fn link_alpha_scales_with_proximity() {
    assert!((scene::link_alpha(0.0).unwrap() - LINK_ALPHA).abs() < 1e-6);
    assert!((scene::link_alpha(70.0).unwrap() - LINK_ALPHA * 0.5).abs() < 1e-6);
    assert!((scene::node_link_alpha(110.0).unwrap() - NODE_LINK_ALPHA * 0.5).abs() < 1e-6);
}

#[test]
fn node_pulse_and_drift_follow_the_clock() {
    let mut scene = make_scene();
    scene.step();
    let t = scene.time as f32;
    assert_eq!(scene.time, 1);
    for n in &scene.nodes {
        let expected = n.radius + (t * n.pulse_speed).sin() * PULSE_AMPLITUDE;
        assert!((n.pulse_radius - expected).abs() < 1e-5);
        assert!((n.offset.x - (t * DRIFT_X_FREQ).cos() * DRIFT_AMPLITUDE).abs() < 1e-5);
        assert!((n.offset.y - (t * DRIFT_Y_FREQ).sin() * DRIFT_AMPLITUDE).abs() < 1e-5);
    }
}

#[test]
fn node_bases_are_fixed_across_resize_and_steps() {
    let mut scene = make_scene();
    let bases: Vec<Vec2> = scene.nodes.iter().map(|n| n.base).collect();
    scene.resize(640.0, 480.0);
    for _ in 0..50 {
        scene.step();
    }
    for (n, base) in scene.nodes.iter().zip(&bases) {
        assert_eq!(n.base, *base);
    }
}

#[test]
fn resize_updates_bounds_only() {
    let mut scene = make_scene();
    scene.resize(640.0, 480.0);
    assert_eq!(scene.width, 640.0);
    assert_eq!(scene.height, 480.0);
    assert_eq!(scene.nodes.len(), NODE_COUNT);
    assert_eq!(scene.particles.len(), PARTICLE_COUNT);
}

#[test]
fn node_layout_matches_the_design() {
    let scene = Scene::new(1000.0, 1000.0, 1);
    let n = &scene.nodes;
    assert!(n[0].base.distance(Vec2::new(200.0, 350.0)) < 1e-2);
    assert!(n[1].base.distance(Vec2::new(500.0, 500.0)) < 1e-2);
    assert!(n[4].base.distance(Vec2::new(280.0, 700.0)) < 1e-2);
    assert!(!n[0].is_accent());
    assert!(n[1].is_accent());
    assert!(!n[3].is_accent());
    assert!(n[4].is_accent());
    assert_eq!(n[0].radius, 14.0);
    assert!((n[1].pulse_speed - 0.022).abs() < 1e-6);
}

#[test]
fn both_particle_colors_appear() {
    let scene = make_scene();
    let accents = scene
        .particles
        .iter()
        .filter(|p| p.color == color::PARTICLE_ACCENT)
        .count();
    assert!(accents > 0 && accents < PARTICLE_COUNT);
    for p in &scene.particles {
        assert!(p.color == color::PARTICLE_ACCENT || p.color == color::PARTICLE_INK);
        assert!(p.life >= LIFE_MIN && p.life < LIFE_MIN + LIFE_SPAN);
        assert!(p.radius >= SPAWN_RADIUS_MIN);
    }
}

#[test]
fn wave_bands_and_alphas() {
    assert!((scene::wave_band_y(1000.0, 0) - 150.0).abs() < 1e-3);
    assert!((scene::wave_band_y(1000.0, 5) - 750.0).abs() < 1e-3);
    assert!((scene::wave_alpha(0) - 0.12).abs() < 1e-6);
    assert!((scene::wave_alpha(5) - 0.02).abs() < 1e-6);
}

#[test]
fn wave_sample_is_a_bounded_sine() {
    for t in [0u64, 10, 1000] {
        let mut x = 0.0f32;
        while x <= 1280.0 {
            let y = scene::wave_y(300.0, x, t);
            assert!(y >= 300.0 - WAVE_HEIGHT - 1e-3);
            assert!(y <= 300.0 + WAVE_HEIGHT + 1e-3);
            x += WAVE_SAMPLE_STEP;
        }
    }
    // Phase check: at time 0 the argument is x / 180
    let x = std::f32::consts::FRAC_PI_2 * 180.0;
    assert!((scene::wave_y(0.0, x, 0) - WAVE_HEIGHT).abs() < 1e-2);
}

#[test]
fn trail_alpha_ramps_with_index() {
    assert_eq!(scene::trail_alpha(0, 15), 0.0);
    let newest = scene::trail_alpha(14, 15);
    assert!((newest - 14.0 / 15.0 * TRAIL_ALPHA_MAX).abs() < 1e-6);
    assert_eq!(scene::trail_alpha(0, 0), 0.0);
}

#[test]
fn pointer_is_tracked_but_inert() {
    let mut scene = make_scene();
    let before: Vec<Vec2> = scene.particles.iter().map(|p| p.pos).collect();

    let mut other = Scene::new(1280.0, 800.0, 42);
    other.set_pointer(13.0, 37.0);

    scene.step();
    other.step();
    for (a, b) in scene.particles.iter().zip(&other.particles) {
        assert_eq!(a.pos, b.pos);
    }
    assert_ne!(
        before,
        scene.particles.iter().map(|p| p.pos).collect::<Vec<_>>()
    );
    assert_eq!(other.pointer, Vec2::new(13.0, 37.0));
}

#[test]
fn rgba_css_formatting() {
    assert_eq!(color::PARTICLE_ACCENT.to_css(), "rgba(220, 38, 38, 0.6)");
    assert_eq!(color::INK.to_css(), "rgba(31, 41, 55, 1)");
    let faded = color::ACCENT.with_alpha(0.5);
    assert_eq!(faded.to_css(), "rgba(220, 38, 38, 0.5)");
    assert!(faded.same_rgb(color::ACCENT));
    assert!(!color::INK.same_rgb(color::ACCENT));
}

//! Canvas2D painting of the hero scene.
//!
//! Strict draw order per frame: gradient background, waves, connections,
//! particle trails and cores, then nodes on top. All state lives in
//! [`crate::core::Scene`]; this module only reads it.

use crate::core::color;
use crate::core::constants::*;
use crate::core::scene::{self, Scene};
use std::f64::consts::TAU;
use web_sys as web;

// Node halo gradient stops and ring opacities (hex-alpha values from the
// original palette: 0x50, 0x25, 0x70, 0x40 out of 255).
const GLOW_STOP_INNER: f32 = 80.0 / 255.0;
const GLOW_STOP_MID: f32 = 37.0 / 255.0;
const RING_OUTER_ALPHA: f32 = 112.0 / 255.0;
const RING_INNER_ALPHA: f32 = 64.0 / 255.0;

const GLOW_RADIUS_SCALE: f64 = 5.0;
const RING_OUTER_SCALE: f64 = 1.8;

const LINK_LINE_WIDTH: f64 = 0.9;
const NODE_LINK_LINE_WIDTH: f64 = 0.6;
const WAVE_LINE_WIDTH: f64 = 1.2;

pub fn draw(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    draw_background(ctx, scene);
    draw_waves(ctx, scene);
    draw_connections(ctx, scene);
    draw_particles(ctx, scene);
    draw_nodes(ctx, scene);
}

fn draw_background(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    let (w, h) = (scene.width as f64, scene.height as f64);
    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
    let _ = gradient.add_color_stop(0.0, "#ffffff");
    let _ = gradient.add_color_stop(0.5, "#fafbfc");
    let _ = gradient.add_color_stop(1.0, "#ffffff");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_waves(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    for band in 0..WAVE_COUNT {
        let style = color::LINE.with_alpha(scene::wave_alpha(band));
        ctx.set_stroke_style_str(&style.to_css());
        ctx.set_line_width(WAVE_LINE_WIDTH);
        ctx.begin_path();

        let band_y = scene::wave_band_y(scene.height, band);
        let mut x = 0.0f32;
        while x <= scene.width {
            let y = scene::wave_y(band_y, x, scene.time);
            if x == 0.0 {
                ctx.move_to(x as f64, y as f64);
            } else {
                ctx.line_to(x as f64, y as f64);
            }
            x += WAVE_SAMPLE_STEP;
        }
        ctx.stroke();
    }
}

fn draw_connections(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    let particles = &scene.particles;
    for i in 0..particles.len() {
        let p1 = &particles[i];
        for p2 in &particles[i + 1..] {
            let dist = p1.pos.distance(p2.pos);
            if let Some(alpha) = scene::link_alpha(dist) {
                ctx.set_stroke_style_str(&color::LINE.with_alpha(alpha).to_css());
                ctx.set_line_width(LINK_LINE_WIDTH);
                ctx.begin_path();
                ctx.move_to(p1.pos.x as f64, p1.pos.y as f64);
                ctx.line_to(p2.pos.x as f64, p2.pos.y as f64);
                ctx.stroke();
            }
        }

        // Node links anchor to the node's base position, not its drift.
        for node in &scene.nodes {
            let dist = p1.pos.distance(node.base);
            if let Some(alpha) = scene::node_link_alpha(dist) {
                let stroke = if node.is_accent() {
                    color::ACCENT
                } else {
                    color::LINE
                };
                ctx.set_stroke_style_str(&stroke.with_alpha(alpha).to_css());
                ctx.set_line_width(NODE_LINK_LINE_WIDTH);
                ctx.begin_path();
                ctx.move_to(p1.pos.x as f64, p1.pos.y as f64);
                ctx.line_to(node.base.x as f64, node.base.y as f64);
                ctx.stroke();
            }
        }
    }
}

fn draw_particles(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    for p in &scene.particles {
        let len = p.trail.len();
        for (i, point) in p.trail.iter().enumerate() {
            let alpha = scene::trail_alpha(i, len);
            ctx.set_fill_style_str(&p.color.with_alpha(alpha).to_css());
            ctx.begin_path();
            let _ = ctx.arc(
                point.x as f64,
                point.y as f64,
                (p.radius * TRAIL_DOT_SCALE) as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }

        ctx.set_fill_style_str(&p.color.to_css());
        ctx.begin_path();
        let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.fill();
    }
}

fn draw_nodes(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    for node in &scene.nodes {
        let x = (node.base.x + node.offset.x) as f64;
        let y = (node.base.y + node.offset.y) as f64;
        let pulse = node.pulse_radius as f64;

        // Halo: radial gradient fading the node color to transparent
        let glow = pulse * GLOW_RADIUS_SCALE;
        if let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, glow) {
            let _ = gradient.add_color_stop(0.0, &node.color.with_alpha(GLOW_STOP_INNER).to_css());
            let _ = gradient.add_color_stop(0.3, &node.color.with_alpha(GLOW_STOP_MID).to_css());
            let _ = gradient.add_color_stop(1.0, &node.color.with_alpha(0.0).to_css());
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            let _ = ctx.arc(x, y, glow, 0.0, TAU);
            ctx.fill();
        }

        // Pulsing outer ring
        ctx.set_stroke_style_str(&node.color.with_alpha(RING_OUTER_ALPHA).to_css());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(x, y, pulse * RING_OUTER_SCALE, 0.0, TAU);
        ctx.stroke();

        // Inner ring
        ctx.set_stroke_style_str(&node.color.with_alpha(RING_INNER_ALPHA).to_css());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        let _ = ctx.arc(x, y, pulse, 0.0, TAU);
        ctx.stroke();

        // Core
        ctx.set_fill_style_str(&node.color.to_css());
        ctx.begin_path();
        let _ = ctx.arc(x, y, pulse, 0.0, TAU);
        ctx.fill();
    }
}

/// Scene tuning constants.
///
/// These express intended behavior (counts, clamp limits, oscillation
/// frequencies) and keep magic numbers out of the update and draw code.
// Population; both counts are fixed for the lifetime of a scene
pub const NODE_COUNT: usize = 5;
pub const PARTICLE_COUNT: usize = 120;

// Trail history cap per particle (FIFO)
pub const TRAIL_CAP: usize = 15;

// Particle motion
pub const FRICTION: f32 = 0.98;
pub const BOUNCE_DAMPING: f32 = 0.8; // velocity kept after a wall hit
pub const MAX_SPEED: f32 = 3.5;
pub const SPAWN_SPEED_SPAN: f32 = 2.5; // initial velocity component span, centered on 0
pub const SPAWN_RADIUS_MIN: f32 = 0.8;
pub const SPAWN_RADIUS_SPAN: f32 = 2.5;
pub const ACCENT_SPLIT: f32 = 0.65; // rng above this picks the accent color (~35%)
pub const LIFE_MIN: f32 = 0.4;
pub const LIFE_SPAN: f32 = 0.6;

// Trail rendering: dot size relative to the particle, alpha ramp ceiling
pub const TRAIL_DOT_SCALE: f32 = 0.4;
pub const TRAIL_ALPHA_MAX: f32 = 0.25;

// Centering pull kicks in beyond this radius from the canvas center
pub const CENTER_DEADZONE: f32 = 300.0;
pub const CENTER_PULL: f32 = 0.02;

// Connection thresholds (strict: at the threshold no line is drawn)
pub const LINK_DIST: f32 = 140.0;
pub const LINK_ALPHA: f32 = 0.25;
pub const NODE_LINK_DIST: f32 = 220.0;
pub const NODE_LINK_ALPHA: f32 = 0.12;

// Node pulse and drift
pub const PULSE_AMPLITUDE: f32 = 4.0;
pub const DRIFT_X_FREQ: f32 = 0.0008;
pub const DRIFT_Y_FREQ: f32 = 0.0006;
pub const DRIFT_AMPLITUDE: f32 = 20.0;

// Background waves
pub const WAVE_COUNT: usize = 6;
pub const WAVE_BAND_BASE: f32 = 0.15; // first band, fraction of canvas height
pub const WAVE_BAND_STEP: f32 = 0.12;
pub const WAVE_HEIGHT: f32 = 40.0;
pub const WAVE_LENGTH: f32 = 180.0;
pub const WAVE_TIME_SCALE: f32 = 60.0;
pub const WAVE_SAMPLE_STEP: f32 = 8.0; // horizontal sampling interval, px
pub const WAVE_ALPHA_BASE: f32 = 0.12;
pub const WAVE_ALPHA_FALLOFF: f32 = 0.02;

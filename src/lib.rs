//! Dodgefall - a falling-obstacle dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, power-ups, collisions, game state)
//! - `render`: Read-only frame snapshots for whatever backend draws them
//! - `audio`: Sound cue routing to a host-provided audio backend
//! - `settings`: Host preferences (volumes, particle budget)

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield spans [-1, 1] on both axes
    pub const PLAYFIELD_HALF: f32 = 1.0;
    /// Entities further than this outside the playfield are forcibly removed
    pub const SAFETY_MARGIN: f32 = 0.5;

    /// Player defaults - a small box near the bottom edge
    pub const PLAYER_Y: f32 = -0.8;
    pub const PLAYER_SIZE: f32 = 0.1;
    /// Player center x is clamped to this range
    pub const PLAYER_X_LIMIT: f32 = 0.9;
    pub const PLAYER_BASE_SPEED: f32 = 1.0;
    /// Extra horizontal speed while the speed effect is active
    pub const SPEED_BOOST_BONUS: f32 = 0.4;

    /// Obstacles only collide while inside this vertical band
    pub const COLLISION_BAND_TOP: f32 = -0.7;
    pub const COLLISION_BAND_BOTTOM: f32 = -0.9;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 0.1;
    pub const INITIAL_OBSTACLES: usize = 5;
    pub const MAX_OBSTACLES: usize = 40;
    /// Fall speed in playfield units per second
    pub const FALL_SPEED_START: f32 = 0.6;
    pub const FALL_SPEED_LEVEL_STEP: f32 = 0.03;
    pub const FALL_SPEED_SCORE_STEP: f32 = 0.003;

    /// Progression
    pub const SCORE_PER_LEVEL: u32 = 10;
    pub const START_HEALTH: u32 = 3;
    pub const MAX_HEALTH: u32 = 5;

    /// Power-up defaults
    pub const MAX_POWERUPS: usize = 5;
    pub const POWERUP_SIZE: f32 = 0.08;
    pub const PICKUP_RADIUS: f32 = 0.12;
    /// All timed effects share one duration
    pub const EFFECT_DURATION: f32 = 5.0;
    /// Fall-speed multiplier while time-slow is active
    pub const TIME_SLOW_FACTOR: f32 = 0.5;

    /// Maximum particles (oldest evicted on overflow)
    pub const MAX_PARTICLES: usize = 256;

    /// Movement patterns beyond linear only appear from this level on
    pub const PATTERN_UNLOCK_LEVEL: u32 = 3;
    pub const ZIGZAG_AMPLITUDE: f32 = 0.35;
    /// Phase advance in radians per second
    pub const ZIGZAG_RATE: f32 = 3.0;
    /// Vertical bob speed for the orbit pattern (units/sec)
    pub const ORBIT_BOB_RATE: f32 = 0.3;
    /// Hard cap on per-tick vertical displacement from orbit bobbing,
    /// half the collision band height so a bob can never skip the band
    pub const ORBIT_MAX_STEP_Y: f32 = 0.1;
}

/// Clamp an x coordinate so an entity of the given full width stays on the playfield
#[inline]
pub fn clamp_to_playfield(x: f32, width: f32) -> f32 {
    let limit = consts::PLAYFIELD_HALF - width / 2.0;
    x.clamp(-limit, limit)
}

/// True if a position is inside the generous safety envelope around the playfield
#[inline]
pub fn in_safety_envelope(pos: glam::Vec2) -> bool {
    let bound = consts::PLAYFIELD_HALF + consts::SAFETY_MARGIN;
    pos.x.is_finite() && pos.y.is_finite() && pos.x.abs() <= bound && pos.y.abs() <= bound
}

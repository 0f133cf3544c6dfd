//! Stochastic entity spawning
//!
//! Power-ups spawn on a per-tick Bernoulli trial whose odds improve with
//! level; obstacles get their randomized recycle state here so spawn and
//! recycle share one distribution.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::patterns;
use super::state::{GameState, MovementPattern, Obstacle, ObstacleShape, PowerUp, PowerUpKind};

/// One-in-N odds of a power-up spawning on a given tick
pub fn powerup_spawn_chance(level: u32) -> u32 {
    match level {
        0..=3 => 500,
        4..=5 => 300,
        6..=8 => 200,
        _ => 100,
    }
}

/// Probability that a drawn power-up is one of the advanced kinds
fn advanced_weight(level: u32) -> f32 {
    match level {
        0..=3 => 0.15,
        4..=6 => 0.35,
        7..=8 => 0.55,
        _ => 0.7,
    }
}

/// Draw a power-up kind from the level-weighted distribution
pub fn pick_powerup_kind(level: u32, rng: &mut Pcg32) -> PowerUpKind {
    let advanced = rng.random::<f32>() < advanced_weight(level);
    let roll = rng.random_range(0..3u32);
    if advanced {
        match roll {
            0 => PowerUpKind::TimeSlow,
            1 => PowerUpKind::Shield,
            _ => PowerUpKind::ExtraLife,
        }
    } else {
        match roll {
            0 => PowerUpKind::Speed,
            1 => PowerUpKind::ClearObstacles,
            _ => PowerUpKind::Invisibility,
        }
    }
}

/// Bernoulli spawn trial for one tick, gated on the live count being below cap
pub fn try_spawn_powerup(state: &mut GameState) {
    if state.powerups.len() >= MAX_POWERUPS {
        return;
    }
    let chance = powerup_spawn_chance(state.level);
    if state.rng().random_range(0..chance) != 0 {
        return;
    }
    let level = state.level;
    let x = state.random_column(POWERUP_SIZE);
    let kind = pick_powerup_kind(level, state.rng());
    state.powerups.push(PowerUp {
        pos: Vec2::new(x, PLAYFIELD_HALF),
        kind,
        duration: EFFECT_DURATION,
    });
    log::debug!("power-up spawned: {kind:?}");
}

/// A fresh randomized obstacle at the top edge
pub fn random_obstacle(level: u32, rng: &mut Pcg32) -> Obstacle {
    let limit = PLAYFIELD_HALF - OBSTACLE_SIZE / 2.0;
    let x = rng.random_range(-limit..limit);
    let shape = match rng.random_range(0..3u32) {
        0 => ObstacleShape::Square,
        1 => ObstacleShape::Triangle,
        _ => ObstacleShape::Circle,
    };
    let color = [
        0.6 + rng.random::<f32>() * 0.4,
        rng.random::<f32>() * 0.3,
        rng.random::<f32>() * 0.3,
    ];
    Obstacle {
        pos: Vec2::new(x, PLAYFIELD_HALF),
        shape,
        color,
        pattern: patterns::pick(level, rng),
        phase: 0.0,
        origin_x: x,
    }
}

/// Recycle an obstacle in place: new column, shape, color, and (level
/// permitting) a freshly drawn movement pattern with phase reset to zero
pub fn recycle_obstacle(ob: &mut Obstacle, level: u32, rng: &mut Pcg32) {
    let fresh = random_obstacle(level, rng);
    *ob = fresh;
    debug_assert_eq!(ob.phase, 0.0);
    debug_assert!(
        level >= PATTERN_UNLOCK_LEVEL || ob.pattern == MovementPattern::Linear
    );
}

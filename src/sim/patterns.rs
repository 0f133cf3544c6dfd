//! Obstacle movement patterns
//!
//! Horizontal displacement rules for falling obstacles. Zigzag and orbit are
//! level-gated: below the unlock level every obstacle is forced linear, a
//! recovery rule for early-game stability.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::clamp_to_playfield;

use super::state::{MovementPattern, Obstacle};

/// Apply one tick of an obstacle's movement pattern (after its vertical fall)
pub fn apply(ob: &mut Obstacle, dt: f32) {
    match ob.pattern {
        MovementPattern::Linear => {}
        MovementPattern::Zigzag => {
            ob.phase += ZIGZAG_RATE * dt;
            ob.pos.x = sweep_x(ob.origin_x, ob.phase);
        }
        MovementPattern::Orbit => {
            ob.phase += ZIGZAG_RATE * dt;
            ob.pos.x = sweep_x(ob.origin_x, ob.phase);
            // Small vertical bob on top of the fall. The per-tick delta is
            // hard-capped so a bob can never step over the collision band.
            let dy = (ob.phase.cos() * ORBIT_BOB_RATE * dt)
                .clamp(-ORBIT_MAX_STEP_Y, ORBIT_MAX_STEP_Y);
            ob.pos.y += dy;
        }
    }
}

/// Sinusoidal sweep around the spawn column, clamped to the playfield
fn sweep_x(origin_x: f32, phase: f32) -> f32 {
    clamp_to_playfield(origin_x + phase.sin() * ZIGZAG_AMPLITUDE, OBSTACLE_SIZE)
}

/// Force an obstacle back to a sane state if its numbers drifted.
///
/// Anything non-finite or outside the safety envelope horizontally reverts
/// to linear at a clamped position - anomalies degrade, they never propagate.
pub fn enforce_safe(ob: &mut Obstacle) {
    let bad_x = !ob.pos.x.is_finite() || ob.pos.x.abs() > PLAYFIELD_HALF;
    let bad_phase = !ob.phase.is_finite();
    if bad_x || bad_phase {
        ob.pos.x = if ob.pos.x.is_finite() {
            clamp_to_playfield(ob.pos.x, OBSTACLE_SIZE)
        } else {
            ob.origin_x
        };
        ob.phase = 0.0;
        ob.pattern = MovementPattern::Linear;
    }
    if !ob.pos.y.is_finite() || ob.pos.y > PLAYFIELD_HALF + SAFETY_MARGIN {
        ob.pos.y = PLAYFIELD_HALF;
        ob.pattern = MovementPattern::Linear;
    }
}

/// Pick a movement pattern from the level-appropriate weighted distribution.
///
/// Below the unlock level everything is linear. Exactly at the unlock level
/// the draw stays conservative (no orbit, mostly linear) so the whole field
/// doesn't gain new motion rules at once.
pub fn pick(level: u32, rng: &mut Pcg32) -> MovementPattern {
    if level < PATTERN_UNLOCK_LEVEL {
        return MovementPattern::Linear;
    }
    let roll: f32 = rng.random();
    if level == PATTERN_UNLOCK_LEVEL {
        if roll < 0.8 {
            MovementPattern::Linear
        } else {
            MovementPattern::Zigzag
        }
    } else if level <= 5 {
        if roll < 0.6 {
            MovementPattern::Linear
        } else if roll < 0.9 {
            MovementPattern::Zigzag
        } else {
            MovementPattern::Orbit
        }
    } else if roll < 0.4 {
        MovementPattern::Linear
    } else if roll < 0.8 {
        MovementPattern::Zigzag
    } else {
        MovementPattern::Orbit
    }
}

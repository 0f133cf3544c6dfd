//! Fixed timestep simulation tick
//!
//! Advances the whole simulation one step in a fixed order: state gate,
//! effect timers, obstacles, power-ups, collisions, particles, progression.

use glam::Vec2;

use crate::consts::*;

use super::state::{GameEvent, GamePhase, GameState, PowerUpKind};
use super::{collision, particles, patterns, spawn};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Start a run (from the title screen) or restart (after game over)
    pub start: bool,
    /// Toggle pause (only meaningful while playing or paused)
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Background color drifts in every phase, including the title screen
    state.tick_background(dt);

    match state.phase {
        GamePhase::NotStarted | GamePhase::GameOver => {
            // Entity updates are frozen; only the exit fade keeps moving
            if state.phase == GamePhase::GameOver {
                state.fade = (state.fade + dt * 0.8).min(1.0);
            }
            if input.start {
                state.reset_run();
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Started);
                log::info!("run started (seed {})", state.seed);
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Resumed);
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
                return;
            }
            run_frame(state, input, dt);
        }
    }
}

/// One frame of active gameplay
fn run_frame(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Entry fade-in decays toward fully visible
    state.fade = (state.fade - dt * 1.5).max(0.0);

    // Player movement is never time-scaled
    let dir = (input.right as i32 - input.left as i32) as f32;
    if dir != 0.0 {
        state.move_player(dir, dt);
    }

    // Timed effects decay at wall-clock rate
    state.tick_effects(dt);
    let time_scale = state.effects.time_scale();

    update_obstacles(state, dt, time_scale);
    update_powerups(state, dt, time_scale);
    particles::update(&mut state.particles, dt);
}

/// Advance, recycle, and collide every obstacle
fn update_obstacles(state: &mut GameState, dt: f32, time_scale: f32) {
    let fall = state.fall_speed * time_scale;

    for i in 0..state.obstacles.len() {
        {
            let ob = &mut state.obstacles[i];
            ob.pos.y -= fall * dt;
            patterns::apply(ob, dt);
            patterns::enforce_safe(ob);
        }

        // Bottom exit: recycle and score
        if state.obstacles[i].pos.y < -PLAYFIELD_HALF {
            let level = state.level;
            {
                let (obstacles, rng) = state.obstacles_and_rng();
                spawn::recycle_obstacle(&mut obstacles[i], level, rng);
            }
            on_obstacle_recycled(state);
            continue;
        }

        // At most one damage event per obstacle per frame
        if collision::player_hits_obstacle(state.player.x, &state.obstacles[i]) {
            resolve_obstacle_hit(state, i);
            if state.phase == GamePhase::GameOver {
                return;
            }
        }
    }
}

/// Damage policy on a detected overlap.
///
/// Invisibility short-circuits everything (no damage, shield untouched);
/// otherwise an active shield is consumed instead of health. The obstacle is
/// repositioned in every branch except the game-ending one.
fn resolve_obstacle_hit(state: &mut GameState, idx: usize) {
    let hit_pos = state.obstacles[idx].pos;

    if state.is_invisible() {
        // Passed through harmlessly
    } else if state.has_shield() {
        state.effects.shield = 0.0;
        state.push_event(GameEvent::ShieldBroken);
        burst(state, hit_pos, [0.4, 0.8, 1.0, 1.0], 24, particles::BurstKind::ShieldBreak);
        log::debug!("shield absorbed a hit");
    } else {
        state.health = state.health.saturating_sub(1);
        state.push_event(GameEvent::Collision);
        burst(state, hit_pos, [1.0, 0.3, 0.1, 1.0], 20, particles::BurstKind::Debris);
        log::info!("hit! health now {}", state.health);

        if state.health == 0 {
            state.phase = GamePhase::GameOver;
            state.push_event(GameEvent::GameOver);
            state.fade = 0.0;
            log::info!("game over at score {} (level {})", state.score, state.level);
            return;
        }
    }

    let level = state.level;
    let (obstacles, rng) = state.obstacles_and_rng();
    spawn::recycle_obstacle(&mut obstacles[idx], level, rng);
}

/// Score, level, and difficulty bookkeeping for a bottom-exit recycle
fn on_obstacle_recycled(state: &mut GameState) {
    state.score += 1;

    if state.score % SCORE_PER_LEVEL == 0 {
        state.level += 1;
        state.fall_speed += FALL_SPEED_LEVEL_STEP;
        state.push_event(GameEvent::LevelUp(state.level));

        let origin = Vec2::new(state.player.x, PLAYER_Y + 0.2);
        burst(state, origin, [1.0, 0.9, 0.2, 1.0], 32, particles::BurstKind::LevelUpRing);
        burst(state, origin, [1.0, 1.0, 0.7, 1.0], 16, particles::BurstKind::LevelUpSparkle);

        // The unlock level is handled conservatively: the field keeps its
        // size while existing obstacles pick up new patterns one recycle at
        // a time
        if state.level != PATTERN_UNLOCK_LEVEL && state.obstacles.len() < MAX_OBSTACLES {
            state.spawn_obstacle();
        }
        log::info!(
            "level {} | obstacles {} | fall speed {:.3}",
            state.level,
            state.obstacles.len(),
            state.fall_speed
        );
    } else {
        state.fall_speed += FALL_SPEED_SCORE_STEP;
    }
}

/// Spawn trial, advancement, pickup, and bounds sweep for power-ups
fn update_powerups(state: &mut GameState, dt: f32, time_scale: f32) {
    spawn::try_spawn_powerup(state);

    let fall = state.fall_speed * time_scale;
    let mut collected: Vec<(PowerUpKind, f32)> = Vec::new();

    let player_x = state.player.x;
    state.powerups.retain_mut(|pu| {
        pu.pos.y -= fall * dt;
        if collision::player_collects_powerup(player_x, pu) {
            collected.push((pu.kind, pu.duration));
            return false;
        }
        pu.pos.y >= -PLAYFIELD_HALF && crate::in_safety_envelope(pu.pos)
    });

    for (kind, duration) in collected {
        apply_powerup(state, kind, duration);
    }
}

/// Activate (or refresh) the effect a collected power-up grants, for the
/// duration carried by the power-up itself
fn apply_powerup(state: &mut GameState, kind: PowerUpKind, duration: f32) {
    state.push_event(GameEvent::PickupCollected(kind));
    let origin = collision::player_center(state.player.x);

    match kind {
        PowerUpKind::Speed => {
            state.effects.speed = duration;
            state.player.speed = PLAYER_BASE_SPEED + SPEED_BOOST_BONUS;
            burst(state, origin, [0.2, 1.0, 0.2, 1.0], 12, particles::BurstKind::Pickup);
        }
        PowerUpKind::ClearObstacles => {
            // A clear stacked inside an open window must not shrink the
            // restore target to the already-thinned field
            state.obstacle_restore = state.obstacle_restore.max(state.obstacles.len());
            state.obstacles.truncate(1);
            state.effects.block_reset = duration;
            burst(state, origin, [0.2, 0.4, 1.0, 1.0], 12, particles::BurstKind::Pickup);
        }
        PowerUpKind::Invisibility => {
            state.effects.invisibility = duration;
            burst(state, origin, [1.0, 1.0, 0.2, 1.0], 12, particles::BurstKind::Pickup);
        }
        PowerUpKind::TimeSlow => {
            state.effects.time_slow = duration;
            burst(state, origin, [0.5, 0.9, 1.0, 1.0], 12, particles::BurstKind::Pickup);
        }
        PowerUpKind::Shield => {
            state.effects.shield = duration;
            burst(state, origin, [0.4, 0.8, 1.0, 1.0], 12, particles::BurstKind::Pickup);
        }
        PowerUpKind::ExtraLife => {
            state.health = (state.health + 1).min(MAX_HEALTH);
            burst(state, origin, [1.0, 0.4, 0.7, 1.0], 16, particles::BurstKind::Heart);
        }
    }
    log::info!("power-up collected: {kind:?}");
}

/// Particle burst helper working around the split borrow of particles + rng
fn burst(
    state: &mut GameState,
    origin: Vec2,
    color: [f32; 4],
    count: usize,
    kind: particles::BurstKind,
) {
    let (parts, rng) = state.particles_and_rng();
    particles::spawn_burst(parts, rng, origin, color, count, kind);
}

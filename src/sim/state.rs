//! Game state and core simulation types
//!
//! Everything the simulation mutates per frame lives in one owned `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

use super::spawn;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    NotStarted,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for restart input
    GameOver,
}

/// Obstacle silhouettes (cosmetic except for the collision test used)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleShape {
    Square,
    Triangle,
    Circle,
}

/// Horizontal movement rules for falling obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementPattern {
    /// Straight down, no horizontal displacement
    #[default]
    Linear,
    /// Sinusoidal sweep around the spawn column
    Zigzag,
    /// Zigzag plus a small vertical bob
    Orbit,
}

/// A falling hazard. Never destroyed - recycled in place when it exits the
/// playfield or hits the player.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub shape: ObstacleShape,
    pub color: [f32; 3],
    pub pattern: MovementPattern,
    /// Accumulated phase for non-linear patterns
    pub phase: f32,
    /// Spawn column that zigzag/orbit sweeps are anchored to
    pub origin_x: f32,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Speed,
    ClearObstacles,
    Invisibility,
    TimeSlow,
    Shield,
    ExtraLife,
}

impl PowerUpKind {
    /// Advanced kinds only become common at higher levels
    pub fn is_advanced(&self) -> bool {
        matches!(
            self,
            PowerUpKind::TimeSlow | PowerUpKind::Shield | PowerUpKind::ExtraLife
        )
    }
}

/// A falling collectible granting a temporary player modifier
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Effect duration granted on pickup
    pub duration: f32,
}

/// A particle for visual effects. Purely cosmetic - never affects gameplay.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [f32; 4],
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub rotation: f32,
    pub rot_speed: f32,
}

impl Particle {
    /// Render alpha derived from remaining lifetime
    pub fn alpha(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0) * self.color[3]
        } else {
            0.0
        }
    }
}

/// The player's avatar. Never destroyed, only reset.
#[derive(Debug, Clone)]
pub struct Player {
    /// Horizontal center, clamped to the playfield
    pub x: f32,
    /// Current horizontal speed (base plus any active boost)
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: 0.0,
            speed: PLAYER_BASE_SPEED,
        }
    }
}

/// Remaining duration of each timed player modifier. Zero means inactive.
/// Timers decay at wall-clock rate, never at the time-slow rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveEffects {
    pub speed: f32,
    pub invisibility: f32,
    pub time_slow: f32,
    pub shield: f32,
    /// Window after an obstacle-clear pickup before the field repopulates
    pub block_reset: f32,
}

impl ActiveEffects {
    /// Fall-speed multiplier applied to obstacles and power-ups
    pub fn time_scale(&self) -> f32 {
        if self.time_slow > 0.0 {
            TIME_SLOW_FACTOR
        } else {
            1.0
        }
    }
}

/// Notifications the core emits for the host (audio cues, logging, UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run started (from NotStarted or GameOver)
    Started,
    Paused,
    Resumed,
    /// Player took damage from an obstacle
    Collision,
    /// An active shield absorbed a hit
    ShieldBroken,
    PickupCollected(PowerUpKind),
    LevelUp(u32),
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub effects: ActiveEffects,
    pub score: u32,
    pub level: u32,
    pub health: u32,
    /// Obstacle/power-up fall speed, strictly increasing within a run
    pub fall_speed: f32,
    pub time_ticks: u64,
    /// Overlay alpha: starts at 1 on a new run and fades in, rises back
    /// toward 1 on game over
    pub fade: f32,
    /// Slow background color oscillation, 0..1
    pub background_pulse: f32,
    pulse_rising: bool,
    /// Obstacle count to restore when the block-reset window ends (0 = none)
    pub(super) obstacle_restore: usize,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed, waiting at the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            player: Player::default(),
            obstacles: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            effects: ActiveEffects::default(),
            score: 0,
            level: 1,
            health: START_HEALTH,
            fall_speed: FALL_SPEED_START,
            time_ticks: 0,
            fade: 0.0,
            background_pulse: 0.0,
            pulse_rising: true,
            obstacle_restore: 0,
            events: Vec::new(),
        }
    }

    /// Reset everything for a fresh run and seed the initial obstacle field
    pub fn reset_run(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.powerups.clear();
        self.particles.clear();
        self.effects = ActiveEffects::default();
        self.score = 0;
        self.level = 1;
        self.health = START_HEALTH;
        self.fall_speed = FALL_SPEED_START;
        self.obstacle_restore = 0;
        self.fade = 1.0;

        for _ in 0..INITIAL_OBSTACLES {
            self.spawn_obstacle();
        }
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Split borrow: the obstacle list together with the RNG
    pub fn obstacles_and_rng(&mut self) -> (&mut Vec<Obstacle>, &mut Pcg32) {
        (&mut self.obstacles, &mut self.rng)
    }

    /// Split borrow: the particle list together with the RNG
    pub fn particles_and_rng(&mut self) -> (&mut Vec<Particle>, &mut Pcg32) {
        (&mut self.particles, &mut self.rng)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to the host, clearing the queue
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_invisible(&self) -> bool {
        self.effects.invisibility > 0.0
    }

    pub fn has_shield(&self) -> bool {
        self.effects.shield > 0.0
    }

    /// Append one randomized obstacle at the top edge, respecting the cap
    pub fn spawn_obstacle(&mut self) {
        if self.obstacles.len() >= MAX_OBSTACLES {
            return;
        }
        let level = self.level;
        let ob = spawn::random_obstacle(level, &mut self.rng);
        self.obstacles.push(ob);
    }

    /// Decrement active effect timers and revert expired effects.
    ///
    /// This is the timer registry: each effect is independent, and expiry
    /// restores whatever state the activation changed.
    pub fn tick_effects(&mut self, dt: f32) {
        let e = &mut self.effects;

        if e.speed > 0.0 {
            e.speed -= dt;
            if e.speed <= 0.0 {
                e.speed = 0.0;
                self.player.speed = PLAYER_BASE_SPEED;
                log::debug!("speed boost ended");
            }
        }
        if e.invisibility > 0.0 {
            e.invisibility -= dt;
            if e.invisibility <= 0.0 {
                e.invisibility = 0.0;
                log::debug!("invisibility ended");
            }
        }
        if e.time_slow > 0.0 {
            e.time_slow -= dt;
            if e.time_slow <= 0.0 {
                e.time_slow = 0.0;
                log::debug!("time-slow ended");
            }
        }
        if e.shield > 0.0 {
            e.shield -= dt;
            if e.shield <= 0.0 {
                e.shield = 0.0;
                log::debug!("shield expired unused");
            }
        }
        if e.block_reset > 0.0 {
            e.block_reset -= dt;
            if e.block_reset <= 0.0 {
                e.block_reset = 0.0;
                let target = self.obstacle_restore.min(MAX_OBSTACLES);
                self.obstacle_restore = 0;
                while self.obstacles.len() < target {
                    self.spawn_obstacle();
                }
                log::debug!("obstacle field restored to {target}");
            }
        }
    }

    /// Advance the slow background color oscillation (runs in every phase)
    pub fn tick_background(&mut self, dt: f32) {
        let step = 0.06 * dt;
        if self.pulse_rising {
            self.background_pulse += step;
            if self.background_pulse >= 1.0 {
                self.background_pulse = 1.0;
                self.pulse_rising = false;
            }
        } else {
            self.background_pulse -= step;
            if self.background_pulse <= 0.0 {
                self.background_pulse = 0.0;
                self.pulse_rising = true;
            }
        }
    }

    /// Move the player horizontally, clamped to the playfield
    pub fn move_player(&mut self, dir: f32, dt: f32) {
        let x = self.player.x + dir * self.player.speed * dt;
        self.player.x = x.clamp(-PLAYER_X_LIMIT, PLAYER_X_LIMIT);
    }

    /// Random x for a freshly spawned or recycled entity of the given width
    pub fn random_column(&mut self, width: f32) -> f32 {
        let limit = PLAYFIELD_HALF - width / 2.0;
        self.rng.random_range(-limit..limit)
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod patterns;
pub mod spawn;
pub mod state;
pub mod tick;

pub use particles::BurstKind;
pub use state::{
    ActiveEffects, GameEvent, GamePhase, GameState, MovementPattern, Obstacle, ObstacleShape,
    Particle, Player, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};

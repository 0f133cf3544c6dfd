//! Read-only frame snapshots
//!
//! The render backend is an external collaborator: each frame it asks for a
//! flat list of shapes plus HUD values and draws them however it likes.
//! Nothing here can mutate the simulation.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, ObstacleShape, PowerUpKind};

/// Primitive shapes the render backend must support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Triangle,
    Circle,
}

/// One draw command: a shape at a position with an RGBA color
#[derive(Debug, Clone)]
pub struct RenderEntity {
    pub kind: ShapeKind,
    pub pos: Vec2,
    /// Full extents (diameter for circles)
    pub size: Vec2,
    pub color: [f32; 4],
    pub rotation: f32,
}

/// HUD values for the text overlay
#[derive(Debug, Clone)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub health: u32,
    pub phase: GamePhase,
}

/// Everything the render backend needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Background clear color driven by the slow pulse
    pub clear_color: [f32; 3],
    /// Full-screen overlay alpha for fade transitions
    pub fade: f32,
    pub entities: Vec<RenderEntity>,
    pub hud: Hud,
}

fn powerup_color(kind: PowerUpKind) -> [f32; 4] {
    match kind {
        PowerUpKind::Speed => [0.0, 1.0, 0.0, 1.0],
        PowerUpKind::ClearObstacles => [0.0, 0.0, 1.0, 1.0],
        PowerUpKind::Invisibility => [1.0, 1.0, 0.0, 1.0],
        PowerUpKind::TimeSlow => [0.4, 0.9, 1.0, 1.0],
        PowerUpKind::Shield => [0.4, 0.6, 1.0, 1.0],
        PowerUpKind::ExtraLife => [1.0, 0.3, 0.6, 1.0],
    }
}

fn obstacle_shape(shape: ObstacleShape) -> ShapeKind {
    match shape {
        ObstacleShape::Square => ShapeKind::Rect,
        ObstacleShape::Triangle => ShapeKind::Triangle,
        ObstacleShape::Circle => ShapeKind::Circle,
    }
}

/// Build the draw list for the current state. The settings' particle budget
/// caps how many particles are drawn; the newest win, matching the
/// simulation's own eviction order.
pub fn snapshot(state: &GameState, settings: &Settings) -> FrameSnapshot {
    let pulse = state.background_pulse;
    let clear_color = [pulse * 0.2, pulse * 0.1, 0.3 + pulse * 0.2];

    let mut entities = Vec::with_capacity(
        1 + state.obstacles.len() + state.powerups.len() + state.particles.len(),
    );

    if state.phase != GamePhase::NotStarted {
        // Player, semi-transparent while invisible
        let alpha = if state.is_invisible() { 0.4 } else { 1.0 };
        let color = if state.has_shield() {
            [0.4, 0.9, 1.0, alpha]
        } else {
            [0.0, 1.0, 0.0, alpha]
        };
        entities.push(RenderEntity {
            kind: ShapeKind::Rect,
            pos: Vec2::new(state.player.x, PLAYER_Y),
            size: Vec2::splat(PLAYER_SIZE),
            color,
            rotation: 0.0,
        });

        for ob in &state.obstacles {
            entities.push(RenderEntity {
                kind: obstacle_shape(ob.shape),
                pos: ob.pos,
                size: Vec2::splat(OBSTACLE_SIZE),
                color: [ob.color[0], ob.color[1], ob.color[2], 1.0],
                rotation: 0.0,
            });
        }

        for pu in &state.powerups {
            entities.push(RenderEntity {
                kind: ShapeKind::Rect,
                pos: pu.pos,
                size: Vec2::splat(POWERUP_SIZE),
                color: powerup_color(pu.kind),
                rotation: 0.0,
            });
        }

        let budget = settings.max_particles.min(MAX_PARTICLES);
        let skip = state.particles.len().saturating_sub(budget);
        for p in state.particles.iter().skip(skip) {
            entities.push(RenderEntity {
                kind: ShapeKind::Rect,
                pos: p.pos,
                size: Vec2::splat(p.size),
                color: [p.color[0], p.color[1], p.color[2], p.alpha()],
                rotation: p.rotation,
            });
        }
    }

    FrameSnapshot {
        clear_color,
        fade: state.fade,
        entities,
        hud: Hud {
            score: state.score,
            level: state.level,
            health: state.health,
            phase: state.phase,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn title_screen_draws_no_entities() {
        let state = GameState::new(1);
        let frame = snapshot(&state, &Settings::default());
        assert!(frame.entities.is_empty());
        assert_eq!(frame.hud.phase, GamePhase::NotStarted);
    }

    #[test]
    fn playing_frame_contains_player_and_obstacles() {
        let mut state = GameState::new(2);
        let input = TickInput {
            start: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, 1.0 / 60.0);

        let frame = snapshot(&state, &Settings::default());
        assert_eq!(frame.entities.len(), 1 + INITIAL_OBSTACLES);
        // Player is drawn first
        assert_eq!(frame.entities[0].pos.y, PLAYER_Y);
    }

    #[test]
    fn particle_draw_list_respects_budget() {
        let mut state = GameState::new(4);
        let input = TickInput {
            start: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, 1.0 / 60.0);
        let (particles, rng) = state.particles_and_rng();
        crate::sim::particles::spawn_burst(
            particles,
            rng,
            Vec2::ZERO,
            [1.0; 4],
            20,
            crate::sim::BurstKind::Debris,
        );

        let settings = Settings {
            max_particles: 3,
            ..Settings::default()
        };
        let frame = snapshot(&state, &settings);
        assert_eq!(
            frame.entities.len(),
            1 + state.obstacles.len() + state.powerups.len() + 3
        );
    }

    #[test]
    fn invisible_player_renders_translucent() {
        let mut state = GameState::new(3);
        let input = TickInput {
            start: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, 1.0 / 60.0);
        state.effects.invisibility = 1.0;

        let frame = snapshot(&state, &Settings::default());
        assert!(frame.entities[0].color[3] < 1.0);
    }
}

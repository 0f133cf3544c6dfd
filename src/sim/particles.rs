//! Cosmetic particle bursts
//!
//! All presets share one update rule (velocity integration, light gravity,
//! drag, lifetime decay); they differ only in initial velocity distribution,
//! color, lifetime range, and count. Nothing here may affect gameplay.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::in_safety_envelope;

use super::state::Particle;

/// Constant downward acceleration on particles (units/sec^2)
const PARTICLE_GRAVITY: f32 = 0.8;
/// Velocity drag per second
const PARTICLE_DRAG: f32 = 1.2;

/// Emission presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    /// Debris scattering from a damaging collision
    Debris,
    /// Expanding ring on level-up
    LevelUpRing,
    /// Slow upward sparkles accompanying the ring
    LevelUpSparkle,
    /// Small pop when a power-up is collected
    Pickup,
    /// Ring when a shield absorbs a hit
    ShieldBreak,
    /// Rising burst for an extra life
    Heart,
}

/// Enqueue up to `count` particles of the given preset. Overflow past the
/// global cap evicts the oldest particles; excess is never an error.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    origin: Vec2,
    color: [f32; 4],
    count: usize,
    kind: BurstKind,
) {
    for i in 0..count {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        particles.push(make_particle(rng, origin, color, i, count, kind));
    }
}

fn make_particle(
    rng: &mut Pcg32,
    origin: Vec2,
    color: [f32; 4],
    index: usize,
    count: usize,
    kind: BurstKind,
) -> Particle {
    let (vel, life) = match kind {
        BurstKind::Debris => {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(0.3..0.9);
            (Vec2::from_angle(angle) * speed, rng.random_range(0.4..0.8))
        }
        BurstKind::LevelUpRing => {
            // Evenly spaced ring, radial velocity
            let angle = TAU * index as f32 / count.max(1) as f32;
            let speed = 0.5 + rng.random::<f32>() * 0.2;
            (Vec2::from_angle(angle) * speed, rng.random_range(0.8..1.2))
        }
        BurstKind::LevelUpSparkle => {
            let vx = rng.random_range(-0.15..0.15);
            let vy = rng.random_range(0.2..0.6);
            (Vec2::new(vx, vy), rng.random_range(0.6..1.4))
        }
        BurstKind::Pickup => {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(0.2..0.5);
            (Vec2::from_angle(angle) * speed, rng.random_range(0.3..0.6))
        }
        BurstKind::ShieldBreak => {
            let angle = TAU * index as f32 / count.max(1) as f32;
            (Vec2::from_angle(angle) * 0.7, rng.random_range(0.5..0.9))
        }
        BurstKind::Heart => {
            let vx = rng.random_range(-0.2..0.2);
            let vy = rng.random_range(0.3..0.7);
            (Vec2::new(vx, vy), rng.random_range(0.7..1.1))
        }
    };

    Particle {
        pos: origin,
        vel,
        color,
        life,
        max_life: life,
        size: rng.random_range(0.01..0.03),
        rotation: rng.random_range(0.0..TAU),
        rot_speed: rng.random_range(-4.0..4.0),
    }
}

/// Integrate every particle by one tick and drop the dead or escaped ones
pub fn update(particles: &mut Vec<Particle>, dt: f32) {
    for p in particles.iter_mut() {
        p.pos += p.vel * dt;
        p.vel.y -= PARTICLE_GRAVITY * dt;
        p.vel *= (1.0 - PARTICLE_DRAG * dt).max(0.0);
        p.rotation += p.rot_speed * dt;
        p.life -= dt;
    }
    particles.retain(|p| p.life > 0.0 && in_safety_envelope(p.pos));
}

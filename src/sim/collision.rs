//! Collision detection between the player and falling entities
//!
//! Obstacles use shape-specific tests restricted to a narrow vertical band
//! around the player's row; power-ups use a plain center-distance pickup test.

use glam::Vec2;

use crate::consts::*;

use super::state::{Obstacle, ObstacleShape, PowerUp};

/// Player hitbox center
#[inline]
pub fn player_center(player_x: f32) -> Vec2 {
    Vec2::new(player_x, PLAYER_Y)
}

/// Player hitbox half extents
#[inline]
pub fn player_half_extents() -> Vec2 {
    Vec2::splat(PLAYER_SIZE / 2.0)
}

/// True if an obstacle row is inside the collision band, shrunk by `margin`
/// on each side
#[inline]
fn in_band(y: f32, margin: f32) -> bool {
    y > COLLISION_BAND_BOTTOM + margin && y < COLLISION_BAND_TOP - margin
}

/// Axis-aligned overlap of two centered boxes
#[inline]
fn aabb_overlap(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> bool {
    (a_center.x - b_center.x).abs() < a_half.x + b_half.x
        && (a_center.y - b_center.y).abs() < a_half.y + b_half.y
}

/// Circle vs axis-aligned rectangle: distance from the circle center to the
/// closest point on the rectangle, against the radius. Tangency counts as a
/// hit.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_center: Vec2, rect_half: Vec2) -> bool {
    let closest = center.clamp(rect_center - rect_half, rect_center + rect_half);
    center.distance_squared(closest) <= radius * radius
}

/// Per-frame player/obstacle test. At most one damage event per obstacle per
/// frame - the caller resolves and recycles on the first hit.
pub fn player_hits_obstacle(player_x: f32, ob: &Obstacle) -> bool {
    let p_center = player_center(player_x);
    let p_half = player_half_extents();
    let ob_half = Vec2::splat(OBSTACLE_SIZE / 2.0);

    match ob.shape {
        ObstacleShape::Square => {
            in_band(ob.pos.y, 0.0) && aabb_overlap(p_center, p_half, ob.pos, ob_half)
        }
        // Triangles reuse the box test with a reduced vertical extent
        ObstacleShape::Triangle => {
            in_band(ob.pos.y, OBSTACLE_SIZE / 4.0)
                && aabb_overlap(
                    p_center,
                    p_half,
                    ob.pos,
                    Vec2::new(ob_half.x, ob_half.y / 2.0),
                )
        }
        ObstacleShape::Circle => {
            circle_rect_overlap(ob.pos, OBSTACLE_SIZE / 2.0, p_center, p_half)
        }
    }
}

/// Player/power-up pickup test: center-to-center distance against a fixed
/// pickup radius
pub fn player_collects_powerup(player_x: f32, pu: &PowerUp) -> bool {
    player_center(player_x).distance_squared(pu.pos) <= PICKUP_RADIUS * PICKUP_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sim::state::{MovementPattern, PowerUpKind};

    fn obstacle_at(x: f32, y: f32, shape: ObstacleShape) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            shape,
            color: [1.0, 0.0, 0.0],
            pattern: MovementPattern::Linear,
            phase: 0.0,
            origin_x: x,
        }
    }

    #[test]
    fn square_hit_inside_band() {
        let ob = obstacle_at(0.0, PLAYER_Y, ObstacleShape::Square);
        assert!(player_hits_obstacle(0.0, &ob));
    }

    #[test]
    fn square_miss_outside_band() {
        // Directly above the player but not yet in the band
        let ob = obstacle_at(0.0, 0.0, ObstacleShape::Square);
        assert!(!player_hits_obstacle(0.0, &ob));
        // Below the band
        let ob = obstacle_at(0.0, -0.95, ObstacleShape::Square);
        assert!(!player_hits_obstacle(0.0, &ob));
    }

    #[test]
    fn square_miss_horizontally() {
        let ob = obstacle_at(0.5, PLAYER_Y, ObstacleShape::Square);
        assert!(!player_hits_obstacle(0.0, &ob));
    }

    #[test]
    fn triangle_has_reduced_vertical_extent() {
        // Near the band edge: a square would hit, a triangle would not
        let y = COLLISION_BAND_TOP - 0.01;
        let square = obstacle_at(0.0, y, ObstacleShape::Square);
        let triangle = obstacle_at(0.0, y, ObstacleShape::Triangle);
        assert!(player_hits_obstacle(0.0, &square));
        assert!(!player_hits_obstacle(0.0, &triangle));
    }

    #[test]
    fn circle_tangent_counts_as_hit() {
        let radius = OBSTACLE_SIZE / 2.0;
        let half = player_half_extents();
        // Circle exactly tangent to the player's right edge
        let center = Vec2::new(half.x + radius, PLAYER_Y);
        assert!(circle_rect_overlap(center, radius, player_center(0.0), half));
        // A hair further out misses
        let center = Vec2::new(half.x + radius + 1e-4, PLAYER_Y);
        assert!(!circle_rect_overlap(center, radius, player_center(0.0), half));
    }

    #[test]
    fn circle_corner_distance_is_euclidean() {
        let radius = OBSTACLE_SIZE / 2.0;
        let half = player_half_extents();
        let corner = player_center(0.0) + half;
        // Diagonal offset such that the straight-line distance exceeds the
        // radius even though each axis offset alone would not
        let offset = radius * 0.8;
        let center = corner + Vec2::splat(offset);
        let expect = (2.0 * offset * offset).sqrt() <= radius;
        assert_eq!(
            circle_rect_overlap(center, radius, player_center(0.0), half),
            expect
        );
    }

    #[test]
    fn circle_hits_across_synthetic_geometries() {
        // Property sweep: result always matches closest-point distance math
        let half = player_half_extents();
        let rect_center = player_center(0.0);
        let radius = OBSTACLE_SIZE / 2.0;
        for ix in -20..=20 {
            for iy in -20..=20 {
                let center =
                    rect_center + Vec2::new(ix as f32 * 0.02, iy as f32 * 0.02);
                let closest = center.clamp(rect_center - half, rect_center + half);
                let expect = center.distance(closest) <= radius;
                assert_eq!(
                    circle_rect_overlap(center, radius, rect_center, half),
                    expect,
                    "center {center:?}"
                );
            }
        }
    }

    #[test]
    fn powerup_pickup_radius() {
        let near = PowerUp {
            pos: Vec2::new(0.05, PLAYER_Y + 0.05),
            kind: PowerUpKind::Speed,
            duration: 5.0,
        };
        assert!(player_collects_powerup(0.0, &near));

        let far = PowerUp {
            pos: Vec2::new(0.5, PLAYER_Y),
            kind: PowerUpKind::Speed,
            duration: 5.0,
        };
        assert!(!player_collects_powerup(0.0, &far));
    }
}

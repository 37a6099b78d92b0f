//! Semi-implicit Euler integration.

use crate::math::Vec2;

/// Advance every node by one time step.
///
/// Velocity is updated first, then position from the new velocity
/// (symplectic Euler). All nodes have unit mass, so force doubles as
/// acceleration. `dt` is not clamped; stability is the caller's choice.
pub fn advance(positions: &mut [Vec2], velocities: &mut [Vec2], forces: &[Vec2], dt: f64) {
    for i in 0..positions.len() {
        velocities[i] += forces[i] * dt;
        positions[i] += velocities[i] * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_force_keeps_stationary_nodes_still() {
        let mut positions = [Vec2::new(1.0, 2.0), Vec2::new(-3.0, 4.0)];
        let mut velocities = [Vec2::ZERO; 2];
        let forces = [Vec2::ZERO; 2];

        advance(&mut positions, &mut velocities, &forces, 0.5);

        assert_eq!(positions[0], Vec2::new(1.0, 2.0));
        assert_eq!(positions[1], Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut positions = [Vec2::ZERO];
        let mut velocities = [Vec2::ZERO];
        let forces = [Vec2::new(2.0, 0.0)];

        advance(&mut positions, &mut velocities, &forces, 0.5);

        // v = 2 * 0.5 = 1; p = 1 * 0.5 = 0.5 (the new velocity moves the node).
        assert_eq!(velocities[0], Vec2::new(1.0, 0.0));
        assert_eq!(positions[0], Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_existing_velocity_carries_without_force() {
        let mut positions = [Vec2::ZERO];
        let mut velocities = [Vec2::new(3.0, -1.0)];
        let forces = [Vec2::ZERO];

        advance(&mut positions, &mut velocities, &forces, 2.0);

        assert_eq!(velocities[0], Vec2::new(3.0, -1.0));
        assert_eq!(positions[0], Vec2::new(6.0, -2.0));
    }
}

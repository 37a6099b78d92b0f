//! Spring and repulsion force accumulation.
//!
//! Both passes read positions from a single snapshot and add into a shared
//! per-node force buffer, so the order of the passes does not matter and
//! every pairwise contribution obeys Newton's third law by construction.

use tracing::trace;

use crate::math::Vec2;

/// Substitute distance for exactly coincident nodes.
///
/// Keeps the repulsion term finite; the difference vector is zero in that
/// case, so the resulting force is still zero.
pub const MIN_SEPARATION: f64 = 1e-19;

/// Accumulate the Hookean spring force of every edge.
///
/// Edges arrive in canonical storage orientation `(owner, older)` with
/// `owner > older`. The springs have zero natural length: each edge pulls
/// its endpoints toward coincidence with force `spring_factor * distance`,
/// balanced only by repulsion.
pub fn accumulate_spring<I>(forces: &mut [Vec2], positions: &[Vec2], edges: I, spring_factor: f64)
where
    I: IntoIterator<Item = (usize, usize)>,
{
    for (owner, older) in edges {
        let pull = spring_factor * (positions[owner] - positions[older]);
        forces[older] += pull;
        forces[owner] -= pull;
    }
}

/// Accumulate the pairwise repulsion force over all unordered node pairs.
///
/// Falls off with the square of the distance: the contribution for a pair
/// is `repulse_factor * |v|^-3 * v`, which folds the direction unit vector
/// into the difference vector `v` and avoids a separate normalization.
/// O(n^2) in the node count; this is the dominant cost of a step.
pub fn accumulate_repulsion(forces: &mut [Vec2], positions: &[Vec2], repulse_factor: f64) {
    for i in 0..positions.len() {
        for j in 0..i {
            let vec = positions[j] - positions[i];
            let mut dist = vec.magnitude();
            if dist == 0.0 {
                trace!(a = i, b = j, "coincident nodes, clamping separation");
                dist = MIN_SEPARATION;
            }
            let push = repulse_factor * dist.powi(-3) * vec;
            forces[i] += push;
            forces[j] -= push;
        }
    }
}

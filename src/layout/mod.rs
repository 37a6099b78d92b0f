//! Force model and integrator for the layout simulation.
//!
//! One simulation step accumulates spring attraction along edges and
//! pairwise repulsion between all nodes, then applies a semi-implicit
//! Euler update. The graph engine drives both from `step`.

pub mod forces;
pub mod integrate;

use serde::{Deserialize, Serialize};

pub use forces::MIN_SEPARATION;

/// Parameters for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Strength of the pairwise inverse-square repulsion.
    pub repulse_factor: f64,
    /// Spring constant of the zero-length edge springs.
    pub spring_factor: f64,
    /// Integration time step. Not clamped; large values diverge.
    pub dt: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            repulse_factor: 10.0,
            spring_factor: 1.0,
            dt: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.repulse_factor, 10.0);
        assert_eq!(config.spring_factor, 1.0);
        assert_eq!(config.dt, 0.5);
    }
}

//! Stochastic motion for simulated moves.
//!
//! With slip probability `p` a move drifts to each perpendicular side with
//! probability `p / 2`. At `p = 0.2` this is the same motion the policy
//! solver assumes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Direction;

/// Seeded slip sampler
#[derive(Clone, Debug)]
pub struct SlipModel {
    probability: f64,
    rng: StdRng,
}

impl SlipModel {
    /// Create a slip model. A seed of 0 draws the seed from the OS.
    pub fn new(probability: f64, seed: u64) -> Self {
        let rng = if seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(seed)
        };
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Motion that never slips
    pub fn deterministic() -> Self {
        Self::new(0.0, 1)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Direction actually taken for an intended move, and whether it slipped
    pub fn sample(&mut self, intended: Direction) -> (Direction, bool) {
        if self.probability <= 0.0 {
            return (intended, false);
        }
        let [left, right] = intended.perpendicular();
        let roll: f64 = self.rng.random();
        if roll < self.probability / 2.0 {
            (left, true)
        } else if roll < self.probability {
            (right, true)
        } else {
            (intended, false)
        }
    }
}

//! Injected pseudo-random source.
//!
//! Randomness enters navigation in exactly two places: the opportunistic
//! repath draw and the stuck-escalation coin flip.  The generator is owned by
//! the traveler, so a seeded traveler makes repeatable decisions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG used for navigation tie-breaking.
pub struct NavRng(SmallRng);

impl NavRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        NavRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        NavRng(SmallRng::from_entropy())
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl Default for NavRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

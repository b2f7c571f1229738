//! Coin toss deciding who moves first.

use crate::setup::Seat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Source of the pre-round toss.
pub trait Toss {
    /// Picks the seat that moves first.
    fn flip(&mut self) -> Seat;
}

/// Fair 50/50 toss.
#[derive(Debug, Clone)]
pub struct RandomToss {
    rng: StdRng,
}

impl RandomToss {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of tosses.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomToss {
    fn default() -> Self {
        Self::new()
    }
}

impl Toss for RandomToss {
    #[instrument(skip(self))]
    fn flip(&mut self) -> Seat {
        let seat = if self.rng.gen_bool(0.5) {
            Seat::PlayerOne
        } else {
            Seat::PlayerTwo
        };
        debug!(?seat, "Toss landed");
        seat
    }
}

/// Always picks the same seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedToss(pub Seat);

impl Toss for FixedToss {
    fn flip(&mut self) -> Seat {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_toss_is_reproducible() {
        let mut a = RandomToss::seeded(7);
        let mut b = RandomToss::seeded(7);
        let first: Vec<Seat> = (0..16).map(|_| a.flip()).collect();
        let second: Vec<Seat> = (0..16).map(|_| b.flip()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_toss_lands_both_ways() {
        let mut toss = RandomToss::seeded(42);
        let ones = (0..200).filter(|_| toss.flip() == Seat::PlayerOne).count();
        assert!(ones > 50 && ones < 150, "{ones} of 200 tosses went to player one");
    }
}

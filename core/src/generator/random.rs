use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Shuffles a standard deck from `seed` and deals it round-robin.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDealGenerator {
    seed: u64,
}

impl RandomDealGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The deck in dealing order, card 0 lands at the bottom of column 0.
    pub fn shuffled_deck(&self) -> Vec<Card> {
        let mut deck = standard_deck();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        shuffle(&mut deck, &mut rng);
        deck
    }
}

impl DealGenerator for RandomDealGenerator {
    fn generate(self) -> Board {
        let deck = self.shuffled_deck();
        log::debug!("Dealing seed {}, first card {:?}", self.seed, deck.first());
        Board::deal(deck)
    }
}

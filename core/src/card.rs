use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit, also the size of a complete foundation.
pub const RANK_COUNT: usize = 13;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Suits in foundation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn color(self) -> Color {
        use Suit::*;
        match self {
            Spade | Club => Color::Black,
            Heart | Diamond => Color::Red,
        }
    }

    pub const fn symbol(self) -> char {
        use Suit::*;
        match self {
            Spade => '♠',
            Heart => '♥',
            Diamond => '♦',
            Club => '♣',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal in `0..=12`, Ace is 0.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        if (value as usize) < RANK_COUNT {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    pub const fn label(self) -> &'static str {
        use Rank::*;
        match self {
            Ace => "A",
            Two => "2",
            Three => "3",
            Four => "4",
            Five => "5",
            Six => "6",
            Seven => "7",
            Eight => "8",
            Nine => "9",
            Ten => "10",
            Jack => "J",
            Queen => "Q",
            King => "K",
        }
    }
}

/// A playing card, identified by suit and rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    pub const fn color(self) -> Color {
        self.suit.color()
    }

    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    pub fn alternates_with(self, other: Card) -> bool {
        self.color() != other.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Orders cards by rank alone, suit never breaks ties.
pub fn compare(a: Card, b: Card) -> Ordering {
    a.value().cmp(&b.value())
}

/// All 52 cards, suit-major in [`Suit::ALL`] order.
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::string::ToString;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn standard_deck_has_every_card_once() {
        let deck = standard_deck();
        let unique: BTreeSet<_> = deck.iter().map(|card| (card.suit(), card.rank())).collect();

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let mut first = standard_deck();
        let mut second = standard_deck();
        shuffle(&mut first, &mut SmallRng::seed_from_u64(42));
        shuffle(&mut second, &mut SmallRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_ne!(first, standard_deck());

        let mut sorted = first.clone();
        sorted.sort_by_key(|card| (card.suit(), card.rank()));
        assert_eq!(sorted, standard_deck());
    }

    #[test]
    fn compare_ignores_suit() {
        let seven_spades = Card::new(Suit::Spade, Rank::Seven);
        let seven_hearts = Card::new(Suit::Heart, Rank::Seven);
        let king_clubs = Card::new(Suit::Club, Rank::King);

        assert_eq!(compare(seven_spades, seven_hearts), Ordering::Equal);
        assert_eq!(compare(seven_hearts, king_clubs), Ordering::Less);
        assert_eq!(compare(king_clubs, seven_spades), Ordering::Greater);
    }

    #[test]
    fn colors_alternate_between_black_and_red() {
        let spade = Card::new(Suit::Spade, Rank::Two);
        let club = Card::new(Suit::Club, Rank::Two);
        let diamond = Card::new(Suit::Diamond, Rank::Two);

        assert!(spade.alternates_with(diamond));
        assert!(!spade.alternates_with(club));
    }

    #[test]
    fn display_matches_rank_and_suit() {
        assert_eq!(Card::new(Suit::Heart, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spade, Rank::Ace).to_string(), "A♠");
        assert_eq!(Rank::from_value(12), Some(Rank::King));
        assert_eq!(Rank::from_value(13), None);
    }
}

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const TABLEAU_COLUMNS: usize = 8;
pub const FREE_CELLS: usize = 5;
pub const FOUNDATIONS: usize = 4;

/// A zone a card can be picked up from. Foundations are never a source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Tableau(usize),
    FreeCell(usize),
}

/// A zone a card can be put down on. `Foundation` always means the moving card's own suit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Tableau(usize),
    FreeCell(usize),
    Foundation,
}

/// Exact card position, used to anchor animations and to hide cards in transit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Tableau { column: usize, row: usize },
    FreeCell(usize),
    Foundation(Suit),
}

/// A single-card move that has already passed the legality checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub from: Source,
    pub to: Destination,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column(Vec<Card>);

impl Column {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn top(&self) -> Option<Card> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `card` may be pushed next, buried cards are not checked.
    pub fn accepts(&self, card: Card) -> bool {
        can_place_on_tableau(card, self.top())
    }

    fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    fn pop(&mut self) -> Option<Card> {
        self.0.pop()
    }
}

impl From<Vec<Card>> for Column {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation(Vec<Card>);

impl Foundation {
    /// Builds the pile `Ace..=up_to` of `suit`.
    pub fn filled(suit: Suit, up_to: Rank) -> Self {
        Self(
            Rank::ALL[..=usize::from(up_to.value())]
                .iter()
                .map(|&rank| Card::new(suit, rank))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn top(&self) -> Option<Card> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == RANK_COUNT
    }

    pub fn accepts(&self, card: Card) -> bool {
        can_place_on_foundation(card, &self.0)
    }

    fn push(&mut self, card: Card) {
        debug_assert!(self.accepts(card), "foundation rejects {card}");
        self.0.push(card);
    }
}

/// All three zone collections. Cloning one is a full snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tableau: [Column; TABLEAU_COLUMNS],
    free_cells: [Option<Card>; FREE_CELLS],
    foundations: [Foundation; FOUNDATIONS],
}

impl Board {
    /// Deals round-robin, card `i` goes to column `i % 8`.
    pub fn deal(deck: impl IntoIterator<Item = Card>) -> Self {
        let mut board = Self::default();
        for (i, card) in deck.into_iter().enumerate() {
            board.tableau[i % TABLEAU_COLUMNS].push(card);
        }
        board
    }

    /// Builds an arbitrary position, foundations are given in [`Suit::ALL`] order.
    pub fn from_zones(
        tableau: [Column; TABLEAU_COLUMNS],
        free_cells: [Option<Card>; FREE_CELLS],
        foundations: [Foundation; FOUNDATIONS],
    ) -> Self {
        Self {
            tableau,
            free_cells,
            foundations,
        }
    }

    pub fn columns(&self) -> &[Column; TABLEAU_COLUMNS] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    pub fn free_cells(&self) -> &[Option<Card>; FREE_CELLS] {
        &self.free_cells
    }

    pub fn free_cell(&self, index: usize) -> Option<Card> {
        self.free_cells.get(index).copied().flatten()
    }

    pub fn foundations(&self) -> &[Foundation; FOUNDATIONS] {
        &self.foundations
    }

    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    pub fn is_won(&self) -> bool {
        is_won(self)
    }

    /// Every card on the board, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        let tableau = self.tableau.iter().flat_map(|column| column.cards().iter().copied());
        let free_cells = self.free_cells.iter().flatten().copied();
        let foundations = self.foundations.iter().flat_map(|pile| pile.cards().iter().copied());
        tableau.chain(free_cells).chain(foundations)
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    pub fn validate_source(&self, source: Source) -> Result<Source> {
        let in_bounds = match source {
            Source::Tableau(column) => column < TABLEAU_COLUMNS,
            Source::FreeCell(cell) => cell < FREE_CELLS,
        };
        if in_bounds {
            Ok(source)
        } else {
            Err(GameError::InvalidZone)
        }
    }

    pub fn validate_destination(&self, destination: Destination) -> Result<Destination> {
        let in_bounds = match destination {
            Destination::Tableau(column) => column < TABLEAU_COLUMNS,
            Destination::FreeCell(cell) => cell < FREE_CELLS,
            Destination::Foundation => true,
        };
        if in_bounds {
            Ok(destination)
        } else {
            Err(GameError::InvalidZone)
        }
    }

    /// The card that would be picked up from `source`.
    pub fn top_of(&self, source: Source) -> Option<Card> {
        match source {
            Source::Tableau(column) => self.column(column).and_then(Column::top),
            Source::FreeCell(cell) => self.free_cell(cell),
        }
    }

    /// Where the top card of `source` currently sits.
    pub fn source_slot(&self, source: Source) -> Slot {
        match source {
            Source::Tableau(column) => Slot::Tableau {
                column,
                row: self.tableau[column].len().saturating_sub(1),
            },
            Source::FreeCell(cell) => Slot::FreeCell(cell),
        }
    }

    /// Where `card` would land when put on `destination`.
    pub fn destination_slot(&self, destination: Destination, card: Card) -> Slot {
        match destination {
            Destination::Tableau(column) => Slot::Tableau {
                column,
                row: self.tableau[column].len(),
            },
            Destination::FreeCell(cell) => Slot::FreeCell(cell),
            Destination::Foundation => Slot::Foundation(card.suit()),
        }
    }

    /// Performs an approved move. Returns `false` without touching the board when the source
    /// no longer holds the moving card.
    pub(crate) fn apply(&mut self, mv: Move) -> bool {
        if self.top_of(mv.from) != Some(mv.card) {
            log::warn!("Move source {:?} no longer holds {}", mv.from, mv.card);
            return false;
        }

        let card = match mv.from {
            Source::Tableau(column) => self.tableau[column].pop(),
            Source::FreeCell(cell) => self.free_cells[cell].take(),
        };
        let Some(card) = card else {
            return false;
        };

        match mv.to {
            Destination::Tableau(column) => self.tableau[column].push(card),
            Destination::FreeCell(cell) => self.free_cells[cell] = Some(card),
            Destination::Foundation => self.foundations[card.suit().index()].push(card),
        }
        true
    }
}

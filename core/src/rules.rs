//! Placement predicates and the move searches built on them.
//!
//! Only the exposed top card of a pile takes part in any check, and only single-card moves
//! exist. Everything here is pure: nothing mutates the board.

use crate::*;

/// A card goes on an empty column, or on an opposite-color card exactly one rank higher.
pub fn can_place_on_tableau(moving: Card, dest_top: Option<Card>) -> bool {
    match dest_top {
        None => true,
        Some(top) => moving.alternates_with(top) && moving.value() + 1 == top.value(),
    }
}

/// `foundation` is expected to be the moving card's own suit pile.
pub fn can_place_on_foundation(moving: Card, foundation: &[Card]) -> bool {
    match foundation.last() {
        None => moving.is_ace(),
        Some(top) => moving.value() == top.value() + 1,
    }
}

pub fn can_place_on_free_cell(cell: Option<Card>) -> bool {
    cell.is_none()
}

pub fn is_won(board: &Board) -> bool {
    board.foundations().iter().all(Foundation::is_complete)
}

/// Checks an explicitly chosen move and returns it when legal.
///
/// Free cell to free cell and same-column moves are never legal.
pub fn legal_move(board: &Board, from: Source, to: Destination) -> Option<Move> {
    let card = board.top_of(from)?;

    let allowed = match (from, to) {
        (_, Destination::Foundation) => board.foundation(card.suit()).accepts(card),
        (Source::Tableau(src), Destination::Tableau(dst)) if src == dst => false,
        (_, Destination::Tableau(dst)) => board.column(dst).is_some_and(|col| col.accepts(card)),
        (Source::FreeCell(_), Destination::FreeCell(_)) => false,
        (Source::Tableau(_), Destination::FreeCell(cell)) => {
            cell < FREE_CELLS && can_place_on_free_cell(board.free_cell(cell))
        }
    };

    allowed.then_some(Move { card, from, to })
}

/// Picks the destination for a click-to-move on `source`.
///
/// Order is fixed: own foundation, then the first accepting column, then the first empty free
/// cell (tableau sources only). `None` means the click does nothing.
pub fn resolve_selection(board: &Board, source: Source) -> Option<Move> {
    let card = board.top_of(source)?;

    if board.foundation(card.suit()).accepts(card) {
        return Some(Move {
            card,
            from: source,
            to: Destination::Foundation,
        });
    }

    let column = (0..TABLEAU_COLUMNS)
        .filter(|&dst| source != Source::Tableau(dst))
        .find(|&dst| board.columns()[dst].accepts(card));
    if let Some(dst) = column {
        return Some(Move {
            card,
            from: source,
            to: Destination::Tableau(dst),
        });
    }

    if let Source::Tableau(_) = source {
        let cell = (0..FREE_CELLS).find(|&cell| can_place_on_free_cell(board.free_cell(cell)));
        if let Some(cell) = cell {
            return Some(Move {
                card,
                from: source,
                to: Destination::FreeCell(cell),
            });
        }
    }

    None
}

/// Finds the next card to promote, tableau tops first, then free cells, lowest index first.
pub fn find_promotion(board: &Board) -> Option<Move> {
    let tableau = (0..TABLEAU_COLUMNS).map(Source::Tableau);
    let free_cells = (0..FREE_CELLS).map(Source::FreeCell);

    tableau.chain(free_cells).find_map(|source| {
        let card = board.top_of(source)?;
        board.foundation(card.suit()).accepts(card).then_some(Move {
            card,
            from: source,
            to: Destination::Foundation,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn board_with(columns: Vec<(usize, Vec<Card>)>, free_cells: [Option<Card>; FREE_CELLS]) -> Board {
        let mut tableau: [Column; TABLEAU_COLUMNS] = Default::default();
        for (index, cards) in columns {
            tableau[index] = Column::from(cards);
        }
        Board::from_zones(tableau, free_cells, Default::default())
    }

    #[test]
    fn tableau_needs_alternating_color_one_rank_lower() {
        let red_seven = card(Suit::Heart, Rank::Seven);

        assert!(can_place_on_tableau(red_seven, None));
        assert!(can_place_on_tableau(red_seven, Some(card(Suit::Club, Rank::Eight))));
        assert!(!can_place_on_tableau(red_seven, Some(card(Suit::Diamond, Rank::Eight))));
        assert!(!can_place_on_tableau(red_seven, Some(card(Suit::Spade, Rank::Nine))));
        assert!(!can_place_on_tableau(red_seven, Some(card(Suit::Spade, Rank::Seven))));
    }

    #[test]
    fn foundation_starts_with_ace_and_climbs_by_one() {
        let ace = card(Suit::Club, Rank::Ace);
        let two = card(Suit::Club, Rank::Two);
        let three = card(Suit::Club, Rank::Three);

        assert!(can_place_on_foundation(ace, &[]));
        assert!(!can_place_on_foundation(two, &[]));
        assert!(can_place_on_foundation(two, &[ace]));
        assert!(!can_place_on_foundation(three, &[ace]));
    }

    #[test]
    fn free_cell_takes_only_into_empty() {
        assert!(can_place_on_free_cell(None));
        assert!(!can_place_on_free_cell(Some(card(Suit::Heart, Rank::Two))));
    }

    #[test]
    fn selection_prefers_foundation() {
        let ace = card(Suit::Diamond, Rank::Ace);
        let board = board_with(vec![(3, vec![ace])], [None; FREE_CELLS]);

        let mv = resolve_selection(&board, Source::Tableau(3));

        assert_eq!(
            mv,
            Some(Move {
                card: ace,
                from: Source::Tableau(3),
                to: Destination::Foundation,
            })
        );
    }

    #[test]
    fn selection_takes_first_fitting_column_but_not_its_own() {
        let red_seven = card(Suit::Heart, Rank::Seven);
        let board = board_with(
            vec![
                (0, vec![card(Suit::Spade, Rank::Eight), red_seven]),
                (2, vec![card(Suit::Diamond, Rank::Nine)]),
                (5, vec![card(Suit::Club, Rank::Eight)]),
            ],
            [None; FREE_CELLS],
        );

        let mv = resolve_selection(&board, Source::Tableau(0)).unwrap();

        // column 1 is empty and comes before column 5
        assert_eq!(mv.to, Destination::Tableau(1));
    }

    #[test]
    fn selection_falls_back_to_first_empty_free_cell() {
        let filler: Vec<Card> = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]
            .iter()
            .enumerate()
            .map(|(i, &rank)| card(Suit::ALL[i % 4], rank))
            .collect();
        let columns = (0..TABLEAU_COLUMNS)
            .map(|index| (index, vec![card(Suit::Spade, Rank::Two)]))
            .collect::<Vec<_>>();
        let mut board = board_with(columns, [None; FREE_CELLS]);
        // occupy the first two cells
        board = Board::from_zones(
            board.columns().clone(),
            [Some(filler[0]), Some(filler[1]), None, None, None],
            Default::default(),
        );

        let mv = resolve_selection(&board, Source::Tableau(4)).unwrap();

        assert_eq!(mv.to, Destination::FreeCell(2));
    }

    #[test]
    fn free_cell_card_never_retargets_a_free_cell() {
        let columns = (0..TABLEAU_COLUMNS)
            .map(|index| (index, vec![card(Suit::Heart, Rank::Two)]))
            .collect::<Vec<_>>();
        let board = board_with(columns, [Some(card(Suit::Spade, Rank::Nine)), None, None, None, None]);

        assert_eq!(resolve_selection(&board, Source::FreeCell(0)), None);
        assert_eq!(resolve_selection(&board, Source::FreeCell(1)), None);
    }

    #[test]
    fn promotion_scans_tableau_before_free_cells() {
        let spade_ace = card(Suit::Spade, Rank::Ace);
        let heart_ace = card(Suit::Heart, Rank::Ace);
        let board = board_with(
            vec![(6, vec![heart_ace])],
            [Some(spade_ace), None, None, None, None],
        );

        let first = find_promotion(&board).unwrap();

        assert_eq!(first.card, heart_ace);
        assert_eq!(first.from, Source::Tableau(6));
    }

    #[test]
    fn promotion_is_none_when_nothing_fits() {
        let board = board_with(
            vec![(0, vec![card(Suit::Spade, Rank::Two)])],
            [Some(card(Suit::Heart, Rank::King)), None, None, None, None],
        );

        assert_eq!(find_promotion(&board), None);
    }

    #[test]
    fn explicit_moves_follow_zone_rules() {
        let red_seven = card(Suit::Diamond, Rank::Seven);
        let board = board_with(
            vec![(0, vec![red_seven]), (1, vec![card(Suit::Heart, Rank::Eight)])],
            [Some(card(Suit::Club, Rank::Four)), None, None, None, None],
        );

        assert_eq!(legal_move(&board, Source::Tableau(0), Destination::Tableau(1)), None);
        assert_eq!(legal_move(&board, Source::Tableau(0), Destination::Tableau(0)), None);
        assert_eq!(legal_move(&board, Source::Tableau(0), Destination::FreeCell(0)), None);
        assert_eq!(legal_move(&board, Source::FreeCell(0), Destination::FreeCell(1)), None);
        assert_eq!(legal_move(&board, Source::Tableau(0), Destination::Foundation), None);
        assert!(legal_move(&board, Source::Tableau(0), Destination::FreeCell(1)).is_some());
        assert!(legal_move(&board, Source::Tableau(0), Destination::Tableau(2)).is_some());
        assert_eq!(legal_move(&board, Source::Tableau(3), Destination::Tableau(2)), None);
    }

    #[test]
    fn won_only_with_four_complete_foundations() {
        let full = Suit::ALL.map(|suit| Foundation::filled(suit, Rank::King));
        let board = Board::from_zones(Default::default(), [None; FREE_CELLS], full.clone());
        assert!(is_won(&board));

        let mut short = full;
        short[2] = Foundation::filled(Suit::Diamond, Rank::Queen);
        let board = Board::from_zones(Default::default(), [None; FREE_CELLS], short);
        assert!(!is_won(&board));
    }
}

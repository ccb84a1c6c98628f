use std::fmt;
use std::io::{self, Write};

use freecell_core::*;

const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Plain-text picture of a frame. Cards in transit are left out of their source slot.
pub struct BoardView<'a> {
    frame: RenderFrame<'a>,
    color: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(frame: RenderFrame<'a>, color: bool) -> Self {
        Self { frame, color }
    }

    fn card(&self, card: Option<Card>, empty: &str) -> String {
        let Some(card) = card else {
            return format!("{empty:>3}");
        };
        let label = format!("{:>3}", card.to_string());
        match (self.color, card.color()) {
            (false, _) => label,
            (true, Color::Red) => format!("{RED}{label}{RESET}"),
            (true, Color::Black) => format!("{BOLD}{label}{RESET}"),
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.frame.board;
        writeln!(f, "Seed {}, {} moves", self.frame.seed, self.frame.moves)?;

        write!(f, "Free cells: ")?;
        for (index, cell) in board.free_cells().iter().enumerate() {
            let card = cell.filter(|_| !self.frame.is_hidden(Slot::FreeCell(index)));
            write!(f, " {index}:[{}]", self.card(card, ""))?;
        }
        writeln!(f)?;

        write!(f, "Foundations:")?;
        for suit in Suit::ALL {
            write!(f, " {}[{}]", suit.symbol(), self.card(board.foundation(suit).top(), "--"))?;
        }
        writeln!(f)?;

        write!(f, "    ")?;
        for column in 0..TABLEAU_COLUMNS {
            write!(f, " {column:^5}")?;
        }
        writeln!(f)?;

        let rows = board.columns().iter().map(Column::len).max().unwrap_or(0);
        for row in 0..rows {
            write!(f, "{row:>3} ")?;
            for (column, cards) in board.columns().iter().enumerate() {
                match cards.cards().get(row) {
                    Some(&card) if !self.frame.is_hidden(Slot::Tableau { column, row }) => {
                        write!(f, " [{}]", self.card(Some(card), ""))?
                    }
                    _ => write!(f, "      ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draws the board whenever it changes and a single progress line while a card moves.
pub struct TextRenderer {
    color: bool,
    moving: Option<(Card, Slot)>,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            moving: None,
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        match frame.animation {
            Some(animation) => {
                log::trace!(
                    "{} at ({}, {}), {:.0}%",
                    animation.card,
                    animation.position.x,
                    animation.position.y,
                    animation.progress * 100.0
                );
                let moving = Some((animation.card, animation.source));
                if self.moving != moving {
                    if self.moving.is_some() {
                        println!();
                    }
                    self.moving = moving;
                    print!("{}", BoardView::new(*frame, self.color));
                }
                print!(
                    "\r  {} -> {:?} {:>3.0}%",
                    animation.card,
                    animation.target,
                    animation.progress * 100.0
                );
                let _ = io::stdout().flush();
            }
            None => {
                if self.moving.take().is_some() {
                    println!();
                }
                print!("{}", BoardView::new(*frame, self.color));
                if frame.won {
                    println!("All cards are home, you won! Type r to deal again.");
                }
            }
        }
    }
}

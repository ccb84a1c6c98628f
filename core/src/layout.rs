use serde::{Deserialize, Serialize};

use crate::*;

/// Screen-space position of a card's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation at `step / steps`, truncating toward `self`.
    pub fn lerp(self, to: Point, step: u16, steps: u16) -> Point {
        let steps = i64::from(steps.max(1));
        let step = i64::from(step).min(steps);
        let axis = |from: i32, to: i32| {
            let from = i64::from(from);
            (from + (i64::from(to) - from) * step / steps) as i32
        };
        Point::new(axis(self.x, to.x), axis(self.y, to.y))
    }
}

/// Supplied by the renderer. Queried once per animation, when it is scheduled.
pub trait Layout {
    fn anchor(&self, slot: Slot) -> Point;
}

/// Fixed-size card layout with free cells on the top left, foundations to their right and
/// the tableau below.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardLayout {
    pub margin: i32,
    pub card_width: i32,
    pub card_height: i32,
    pub tableau_gap: i32,
    pub free_cell_gap: i32,
    pub foundation_width: i32,
    pub foundation_gap: i32,
    pub row_offset: i32,
    pub tableau_top_gap: i32,
}

impl StandardLayout {
    /// Uniformly scales every measurement, clamped so cards never collapse.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |value: i32| ((value as f32) * factor).max(1.0) as i32;
        Self {
            margin: scale(self.margin),
            card_width: scale(self.card_width),
            card_height: scale(self.card_height),
            tableau_gap: scale(self.tableau_gap),
            free_cell_gap: scale(self.free_cell_gap),
            foundation_width: scale(self.foundation_width),
            foundation_gap: scale(self.foundation_gap),
            row_offset: scale(self.row_offset),
            tableau_top_gap: scale(self.tableau_top_gap),
        }
    }

    fn tableau_origin(&self) -> i32 {
        self.margin + self.card_height + self.tableau_top_gap
    }
}

impl Default for StandardLayout {
    fn default() -> Self {
        Self {
            margin: 20,
            card_width: 80,
            card_height: 120,
            tableau_gap: 30,
            free_cell_gap: 20,
            foundation_width: 48,
            foundation_gap: 20,
            row_offset: 30,
            tableau_top_gap: 60,
        }
    }
}

impl Layout for StandardLayout {
    fn anchor(&self, slot: Slot) -> Point {
        match slot {
            Slot::FreeCell(cell) => Point::new(
                self.margin + cell as i32 * (self.card_width + self.free_cell_gap),
                self.margin,
            ),
            Slot::Foundation(suit) => Point::new(
                self.margin
                    + (suit.index() + FREE_CELLS) as i32
                        * (self.foundation_width + self.foundation_gap),
                self.margin + 10,
            ),
            Slot::Tableau { column, row } => Point::new(
                self.margin + column as i32 * (self.card_width + self.tableau_gap),
                self.tableau_origin() + row as i32 * self.row_offset,
            ),
        }
    }
}

impl<L: Layout + ?Sized> Layout for &L {
    fn anchor(&self, slot: Slot) -> Point {
        (**self).anchor(slot)
    }
}

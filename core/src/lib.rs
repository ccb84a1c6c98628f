#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use history::*;
pub use layout::*;
pub use render::*;
pub use rules::*;
pub use scheduler::*;

mod board;
mod card;
mod engine;
mod error;
mod generator;
mod history;
mod layout;
mod render;
mod rules;
mod scheduler;

/// Upper bound for [`GameConfig::animation_steps`], ten seconds at [`STEPS_PER_SECOND`].
pub const MAX_ANIMATION_STEPS: u16 = 600;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub history_limit: usize,
    pub animation_steps: u16,
}

impl GameConfig {
    pub const fn new_unchecked(history_limit: usize, animation_steps: u16) -> Self {
        Self {
            history_limit,
            animation_steps,
        }
    }

    pub fn new(history_limit: usize, animation_steps: u16) -> Self {
        let history_limit = history_limit.max(1);
        let animation_steps = animation_steps.clamp(1, MAX_ANIMATION_STEPS);
        Self::new_unchecked(history_limit, animation_steps)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_HISTORY_LIMIT, DEFAULT_ANIMATION_STEPS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No legal destination, nothing changed.
    NoChange,
    /// Refused because a card is moving or the game is already won.
    Ignored,
    /// Snapshotted and animating, lands when the animation completes.
    Scheduled,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Ignored => false,
            Self::Scheduled => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UndoOutcome {
    NoChange,
    Restored,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Restored => true,
        }
    }
}

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A Freecell session: the board, its undo history and the animation in flight.
///
/// Moves are checked and snapshotted when they are scheduled, but only land on the board
/// once [`PlayEngine::tick`] runs their animation to completion. Every completed move is
/// followed by one promotion scan, which may schedule the next animation right away.
#[derive(Clone, Debug)]
pub struct PlayEngine<L = StandardLayout> {
    config: GameConfig,
    layout: L,
    board: Board,
    history: History,
    scheduler: Scheduler,
    state: EngineState,
    seed: u64,
    seeds: SmallRng,
    moves: u32,
}

impl PlayEngine<StandardLayout> {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default(), StandardLayout::default())
    }
}

impl<L: Layout> PlayEngine<L> {
    pub fn with_config(seed: u64, config: GameConfig, layout: L) -> Self {
        let mut engine = Self {
            config,
            layout,
            board: Board::default(),
            history: History::new(config.history_limit),
            scheduler: Scheduler::new(config.animation_steps),
            state: Default::default(),
            seed,
            seeds: SmallRng::seed_from_u64(seed),
            moves: 0,
        };
        engine.new_game(seed);
        engine
    }

    /// Deals a fresh board from `seed`, dropping history and any animation.
    pub fn new_game(&mut self, seed: u64) -> &Board {
        log::debug!("New game with seed {}", seed);
        self.board = RandomDealGenerator::new(seed).generate();
        self.seed = seed;
        self.history.clear();
        self.scheduler.clear();
        self.state = EngineState::Playing;
        self.moves = 0;
        &self.board
    }

    /// Replaces the board with an arbitrary position, dropping history and any animation.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
        self.scheduler.clear();
        self.state = if is_won(&self.board) {
            EngineState::Won
        } else {
            EngineState::Playing
        };
        self.moves = 0;
    }

    /// Deals again with the next seed of this session's sequence.
    pub fn restart(&mut self) -> &Board {
        let seed = self.seeds.random();
        self.new_game(seed)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.scheduler.current()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Completed moves, cascade promotions included, minus undone ones.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Click-to-move on the top card of `source`.
    pub fn handle_selection(&mut self, source: Source) -> Result<MoveOutcome> {
        let source = self.board.validate_source(source)?;
        if !self.accepts_input() {
            return Ok(MoveOutcome::Ignored);
        }

        Ok(match resolve_selection(&self.board, source) {
            Some(mv) => {
                self.schedule(mv);
                MoveOutcome::Scheduled
            }
            None => {
                log::trace!("Nothing to do for {:?}", source);
                MoveOutcome::NoChange
            }
        })
    }

    /// Moves the top card of `from` onto `to` if the zones allow it.
    pub fn try_move(&mut self, from: Source, to: Destination) -> Result<MoveOutcome> {
        let from = self.board.validate_source(from)?;
        let to = self.board.validate_destination(to)?;
        if !self.accepts_input() {
            return Ok(MoveOutcome::Ignored);
        }

        Ok(match legal_move(&self.board, from, to) {
            Some(mv) => {
                self.schedule(mv);
                MoveOutcome::Scheduled
            }
            None => {
                log::trace!("Rejected move {:?} -> {:?}", from, to);
                MoveOutcome::NoChange
            }
        })
    }

    /// Runs one promotion scan by hand, the same scan that follows every completed move.
    pub fn auto_promote(&mut self) -> MoveOutcome {
        if !self.accepts_input() {
            return MoveOutcome::Ignored;
        }

        if self.cascade() {
            MoveOutcome::Scheduled
        } else {
            MoveOutcome::NoChange
        }
    }

    /// Restores the board from before the latest move. Always leaves the won state.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.is_animating() {
            return UndoOutcome::NoChange;
        }

        match self.history.pop() {
            Some(board) => {
                self.board = board;
                self.state = EngineState::Playing;
                self.moves = self.moves.saturating_sub(1);
                log::debug!("Undo, {} snapshots left", self.history.len());
                UndoOutcome::Restored
            }
            None => UndoOutcome::NoChange,
        }
    }

    /// Advances the animation in flight by `steps`. A finished animation applies its move and
    /// triggers the next promotion scan before this returns.
    pub fn tick(&mut self, steps: u16) -> RenderFrame<'_> {
        if let Some(mv) = self.scheduler.advance(steps) {
            self.complete(mv);
        }
        self.frame()
    }

    pub fn frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            board: &self.board,
            animation: self.scheduler.current().map(AnimationFrame::from),
            won: self.state.is_finished(),
            moves: self.moves,
            seed: self.seed,
        }
    }

    fn accepts_input(&self) -> bool {
        self.scheduler.is_idle() && !self.state.is_finished()
    }

    fn schedule(&mut self, mv: Move) {
        let source = self.board.source_slot(mv.from);
        let target = self.board.destination_slot(mv.to, mv.card);
        let start = self.layout.anchor(source);
        let end = self.layout.anchor(target);

        self.history.snapshot(&self.board);
        if self.scheduler.enqueue(mv, source, target, start, end) {
            log::debug!("Scheduled {} {:?} -> {:?}", mv.card, mv.from, mv.to);
        } else {
            // only reachable if a caller skipped accepts_input
            self.history.pop();
            log::warn!("Dropped {} while another card is moving", mv.card);
        }
    }

    fn complete(&mut self, mv: Move) {
        if !self.board.apply(mv) {
            return;
        }
        self.moves = self.moves.saturating_add(1);
        log::debug!("Moved {} to {:?}", mv.card, mv.to);

        if is_won(&self.board) {
            log::debug!("Won after {} moves", self.moves);
            self.state = EngineState::Won;
        }

        self.cascade();
    }

    /// Schedules at most one promotion, returning whether one was found.
    fn cascade(&mut self) -> bool {
        match find_promotion(&self.board) {
            Some(promotion) => {
                log::debug!("Promoting {} from {:?}", promotion.card, promotion.from);
                self.schedule(promotion);
                true
            }
            None => false,
        }
    }
}

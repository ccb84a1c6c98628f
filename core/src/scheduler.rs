use serde::{Deserialize, Serialize};

use crate::*;

/// Steps advanced per second by a frame loop running at full speed.
pub const STEPS_PER_SECOND: u16 = 60;

/// Half a second at [`STEPS_PER_SECOND`].
pub const DEFAULT_ANIMATION_STEPS: u16 = 30;

/// A card travelling from one slot to another. The board is untouched until it completes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    mv: Move,
    source: Slot,
    target: Slot,
    start: Point,
    end: Point,
    step: u16,
    steps: u16,
}

impl Animation {
    pub fn pending_move(&self) -> Move {
        self.mv
    }

    pub fn card(&self) -> Card {
        self.mv.card
    }

    /// Slot the card is leaving; renderers should not draw it there.
    pub fn source(&self) -> Slot {
        self.source
    }

    pub fn target(&self) -> Slot {
        self.target
    }

    pub fn step(&self) -> u16 {
        self.step
    }

    pub fn progress(&self) -> f32 {
        f32::from(self.step) / f32::from(self.steps)
    }

    pub fn position(&self) -> Point {
        self.start.lerp(self.end, self.step, self.steps)
    }

    pub fn is_complete(&self) -> bool {
        self.step >= self.steps
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SchedulerState {
    Idle,
    Animating(Animation),
}

impl SchedulerState {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Runs at most one animation at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheduler {
    state: SchedulerState,
    steps: u16,
}

impl Scheduler {
    pub fn new(steps: u16) -> Self {
        Self {
            state: SchedulerState::Idle,
            steps: steps.max(1),
        }
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn current(&self) -> Option<&Animation> {
        match &self.state {
            SchedulerState::Idle => None,
            SchedulerState::Animating(animation) => Some(animation),
        }
    }

    /// Starts animating `mv`. Refused, returning `false`, while another animation runs.
    pub fn enqueue(&mut self, mv: Move, source: Slot, target: Slot, start: Point, end: Point) -> bool {
        if !self.is_idle() {
            return false;
        }

        log::trace!("Animating {} from {:?} to {:?}", mv.card, start, end);
        self.state = SchedulerState::Animating(Animation {
            mv,
            source,
            target,
            start,
            end,
            step: 0,
            steps: self.steps,
        });
        true
    }

    /// Advances by `steps` and hands back the move once its animation has finished. Surplus
    /// steps are not carried into whatever is scheduled next.
    pub fn advance(&mut self, steps: u16) -> Option<Move> {
        let SchedulerState::Animating(animation) = &mut self.state else {
            return None;
        };

        animation.step = animation.step.saturating_add(steps).min(animation.steps);
        log::trace!(
            "{} at {:?} ({}/{})",
            animation.mv.card,
            animation.position(),
            animation.step,
            animation.steps
        );

        if animation.is_complete() {
            let mv = animation.mv;
            self.state = SchedulerState::Idle;
            Some(mv)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.state = SchedulerState::Idle;
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_move() -> Move {
        Move {
            card: Card::new(Suit::Club, Rank::Ace),
            from: Source::FreeCell(1),
            to: Destination::Foundation,
        }
    }

    fn enqueue(scheduler: &mut Scheduler) -> bool {
        scheduler.enqueue(
            sample_move(),
            Slot::FreeCell(1),
            Slot::Foundation(Suit::Club),
            Point::new(0, 0),
            Point::new(300, 60),
        )
    }

    #[test]
    fn completes_after_configured_steps() {
        let mut scheduler = Scheduler::default();
        assert!(enqueue(&mut scheduler));

        for _ in 0..DEFAULT_ANIMATION_STEPS - 1 {
            assert_eq!(scheduler.advance(1), None);
        }
        assert!(!scheduler.is_idle());
        assert_eq!(scheduler.advance(1), Some(sample_move()));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn refuses_second_animation() {
        let mut scheduler = Scheduler::default();

        assert!(enqueue(&mut scheduler));
        assert!(!enqueue(&mut scheduler));
    }

    #[test]
    fn position_interpolates_between_anchors() {
        let mut scheduler = Scheduler::new(10);
        enqueue(&mut scheduler);
        scheduler.advance(5);

        let animation = scheduler.current().unwrap();
        assert_eq!(animation.position(), Point::new(150, 30));
        assert_eq!(animation.progress(), 0.5);
        assert_eq!(animation.source(), Slot::FreeCell(1));
    }

    #[test]
    fn large_step_finishes_at_once() {
        let mut scheduler = Scheduler::default();
        enqueue(&mut scheduler);

        assert_eq!(scheduler.advance(u16::MAX), Some(sample_move()));
        assert_eq!(scheduler.advance(1), None);
    }

    #[test]
    fn zero_steps_keeps_animation_in_place() {
        let mut scheduler = Scheduler::default();
        enqueue(&mut scheduler);

        assert_eq!(scheduler.advance(0), None);
        assert_eq!(scheduler.current().map(Animation::step), Some(0));
    }
}

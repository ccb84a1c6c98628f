use serde::Serialize;

use crate::*;

/// The card in flight this frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AnimationFrame {
    pub card: Card,
    pub source: Slot,
    pub target: Slot,
    pub position: Point,
    pub progress: f32,
}

impl From<&Animation> for AnimationFrame {
    fn from(animation: &Animation) -> Self {
        Self {
            card: animation.card(),
            source: animation.source(),
            target: animation.target(),
            position: animation.position(),
            progress: animation.progress(),
        }
    }
}

/// Read-only view handed to the renderer once per frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RenderFrame<'a> {
    pub board: &'a Board,
    pub animation: Option<AnimationFrame>,
    pub won: bool,
    pub moves: u32,
    pub seed: u64,
}

impl RenderFrame<'_> {
    /// Whether the card at `slot` is in transit and must be drawn at the animation position
    /// instead.
    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.animation.is_some_and(|animation| animation.source == slot)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        (**self).render(frame)
    }
}

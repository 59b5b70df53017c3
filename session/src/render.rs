//! Renderer-facing view of a session
//!
//! The renderer is a collaborator: it reads a `MatchView` once per frame
//! and paints it. Nothing here feeds back into the simulation; the one UI
//! control that does (the help close button) calls the session directly.

use glam::Vec2;
use match_core::Phase;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// Everything a frame needs to paint
#[derive(Debug, Clone, Copy)]
pub struct MatchView {
    pub board: Vec2,
    pub ball: Rect,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub center_line_x: f32,
    pub score: (u32, u32),
    pub phase: Phase,
    pub help_open: bool,
}

impl MatchView {
    /// Whether the "press start" message should show
    pub fn awaiting_start(&self) -> bool {
        self.phase == Phase::NotStarted
    }
}

/// A host-side painter. Implementations read the view; they never mutate
/// game state.
pub trait Renderer {
    fn render(&mut self, view: &MatchView);
}

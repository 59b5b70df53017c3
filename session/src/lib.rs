//! Session glue around the Pong simulation
//!
//! Owns the match state, translates host key events and assistant commands
//! into it, and drives the fixed-order physics-then-render frame loop.

pub mod driver;
pub mod input;
pub mod match_session;
pub mod render;

pub use driver::GameLoop;
pub use input::{binding_for, KeyBinding};
pub use match_session::MatchSession;
pub use render::{MatchView, Rect, Renderer};

//! Fixed-order frame loop
//!
//! Physics and rendering share one scheduled callback: `frame` steps the
//! simulation and then paints, so a frame never renders ahead of the state
//! it shows. `stop` releases the loop, so a torn-down view cannot keep
//! ticking against a dead session.

use tracing::info;

use crate::match_session::MatchSession;
use crate::render::Renderer;

pub struct GameLoop<R: Renderer> {
    session: MatchSession,
    renderer: R,
    stopped: bool,
}

impl<R: Renderer> GameLoop<R> {
    pub fn new(session: MatchSession, renderer: R) -> Self {
        Self {
            session,
            renderer,
            stopped: false,
        }
    }

    /// One host animation tick: physics first, then render.
    pub fn frame(&mut self) {
        if self.stopped {
            return;
        }
        self.session.tick();
        let view = self.session.view();
        self.renderer.render(&view);
    }

    /// Cancel the loop. Subsequent frames are no-ops.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            info!("game loop stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut MatchSession {
        &mut self.session
    }

    /// Tear down the loop, recovering the session.
    pub fn into_session(self) -> MatchSession {
        self.session
    }
}

use std::time::Duration;

use newsai_core::{update, AppState, AppViewModel, Msg};
use newsai_engine::EngineHandle;
use newsai_logging::newsai_debug;

use super::effects::EffectRunner;

/// Owns the UI state and routes messages through `update` and the effect runner.
///
/// Only the UI thread touches the state; engine completions are pulled in with
/// [`Controller::pump`] or [`Controller::settle`].
pub struct Controller {
    state: AppState,
    effects: EffectRunner,
}

impl Controller {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(engine),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies `msg` and runs its effects. Returns whether a redraw is needed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        if let Msg::SubmitSuccess { request_id, .. } | Msg::SubmitFailure { request_id, .. } = &msg
        {
            if self.state.in_flight() != Some(*request_id) {
                newsai_debug!("Ignoring stale completion for request {}", request_id);
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.run(effects);
        was_dirty
    }

    /// Feeds any finished requests back into the state without blocking.
    pub fn pump(&mut self) -> bool {
        let mut dirty = false;
        while let Some(msg) = self.effects.try_next() {
            dirty |= self.dispatch(msg);
        }
        dirty
    }

    /// Blocks until no request is pending, polling every `poll`.
    pub fn settle(&mut self, poll: Duration) {
        while self.state.is_pending() {
            if let Some(msg) = self.effects.next_timeout(poll) {
                self.dispatch(msg);
            }
        }
    }
}

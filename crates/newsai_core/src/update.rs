use crate::{AppState, Effect, Msg, Outcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SetMode(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::SetInput(value) => {
            state.set_input(value);
            Vec::new()
        }
        Msg::SubmitStart => {
            // One request at a time, and blank input never reaches the service.
            if state.is_pending() || state.input_is_blank() {
                return (state, Vec::new());
            }
            let (request_id, request) = state.begin_submission();
            vec![Effect::Analyze {
                request_id,
                request,
            }]
        }
        Msg::SubmitSuccess { request_id, result } => {
            state.resolve(request_id, Outcome::Success(result));
            Vec::new()
        }
        Msg::SubmitFailure {
            request_id,
            message,
        } => {
            state.resolve(request_id, Outcome::Failure(message));
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

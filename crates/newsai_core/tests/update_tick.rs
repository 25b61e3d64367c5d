use newsai_core::{update, AppState, Msg};

#[test]
fn tick_leaves_state_untouched() {
    let (state, _) = update(AppState::new(), Msg::SetInput("https://a.example".to_string()));
    let (mut state, _) = update(state, Msg::SubmitStart);
    state.consume_dirty();

    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_does_not_mark_dirty() {
    let (mut next, effects) = update(AppState::new(), Msg::Tick);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

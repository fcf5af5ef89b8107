//! Multi-message flows through the application reducer.

mod common;

use cambio::domain::{AppReducer, AppState, Message};
use cambio::mvu::Reducer;
use common::*;

/// Reduce and drop the commands, for steps where only state matters.
fn reduce(state: AppState, message: Message) -> AppState {
    let (state, _) = AppReducer::reduce(state, message);
    state
}

// -- Loading rates ------------------------------------------------------------

#[test]
fn valid_payload_replaces_rates() {
    let (after, commands) = AppReducer::reduce(
        AppState::default(),
        Message::DataReceived(Some(rates_payload())),
    );
    assert_eq!(after.rates, Some(rate_table(&[("USD", 1.18), ("GBP", 0.86)])));
    assert!(after.converter.is_none());
    assert!(commands.is_empty());
}

#[test]
fn malformed_payloads_leave_state_unchanged() {
    let before = state_with_rates(&[("USD", 1.18)]);
    let malformed: [&[u8]; 3] = [b"not json at all", b"", br#"{"base": "EUR"}"#];
    for body in malformed {
        let (after, commands) = AppReducer::reduce(
            before.clone(),
            Message::DataReceived(Some(body.to_vec())),
        );
        assert_eq!(
            after,
            before,
            "payload {:?} should have been discarded",
            String::from_utf8_lossy(body)
        );
        assert!(commands.is_empty());
    }
}

#[test]
fn transport_failure_before_first_load_stays_empty() {
    let after = reduce(AppState::default(), Message::DataReceived(None));
    assert_eq!(after, AppState::default());
}

#[test]
fn later_response_wins_on_rates() {
    // No cancellation: whatever arrives last replaces the table.
    let first = br#"{"rates": {"USD": 1.18}}"#.to_vec();
    let second = br#"{"rates": {"USD": 1.25}}"#.to_vec();
    let state = reduce(AppState::default(), Message::DataReceived(Some(first)));
    let state = reduce(state, Message::DataReceived(Some(second)));
    assert_eq!(state.rates, Some(rate_table(&[("USD", 1.25)])));
}

// -- Selecting and converting -------------------------------------------------

#[test]
fn selection_captures_rate_and_resets_input() {
    let state = state_with_rates(&[("USD", 1.18), ("GBP", 0.86)]);
    let after = reduce(state, Message::CurrencySelected("USD".to_string()));
    let converter = after.converter.expect("converter should open");
    assert_eq!(converter.currency, "USD");
    assert_eq!(converter.rate, 1.18);
    assert_eq!(converter.input_text.as_deref(), Some("100"));
}

#[test]
fn reselection_replaces_converter_wholesale() {
    let state = state_with_rates(&[("USD", 1.18), ("GBP", 0.86)]);
    let state = reduce(state, Message::CurrencySelected("USD".to_string()));
    let state = reduce(state, Message::SetInputText(Some("250".to_string())));
    let state = reduce(state, Message::CurrencySelected("GBP".to_string()));

    let converter = state.converter.expect("converter should stay open");
    assert_eq!(converter.currency, "GBP");
    assert_eq!(converter.rate, 0.86);
    // Replacement, not an edit: the typed text is gone.
    assert_eq!(converter.input_text.as_deref(), Some("100"));
}

#[test]
fn selection_without_rates_is_ignored() {
    let (after, commands) = AppReducer::reduce(
        AppState::default(),
        Message::CurrencySelected("USD".to_string()),
    );
    assert_eq!(after, AppState::default());
    assert!(commands.is_empty());
}

#[test]
fn rates_refresh_leaves_open_converter_stale() {
    let state = state_with_rates(&[("USD", 1.18)]);
    let state = reduce(state, Message::CurrencySelected("USD".to_string()));
    let state = reduce(
        state,
        Message::DataReceived(Some(br#"{"rates": {"USD": 1.25}}"#.to_vec())),
    );

    assert_eq!(state.rates, Some(rate_table(&[("USD", 1.25)])));
    // The open converter keeps the rate captured at selection time.
    assert_eq!(state.converter.expect("still open").rate, 1.18);
}

// -- Editing the input --------------------------------------------------------

#[test]
fn set_input_text_drives_derived_amounts() {
    let state = state_with_rates(&[("USD", 1.18)]);
    let state = reduce(state, Message::CurrencySelected("USD".to_string()));
    let state = reduce(state, Message::SetInputText(Some("250".to_string())));

    let converter = state.converter.expect("converter open");
    assert_eq!(converter.input_amount(), Some(250.0));
    assert_eq!(converter.output_amount(), Some(295.0));
}

#[test]
fn unparseable_input_clears_derived_amounts() {
    let state = state_with_rates(&[("USD", 1.18)]);
    let state = reduce(state, Message::CurrencySelected("USD".to_string()));
    let state = reduce(state, Message::SetInputText(Some("abc".to_string())));

    let converter = state.converter.expect("converter open");
    assert_eq!(converter.input_text.as_deref(), Some("abc"));
    assert_eq!(converter.input_amount(), None);
    assert_eq!(converter.output_amount(), None);
}

#[test]
fn cleared_field_clears_derived_amounts() {
    let state = state_with_rates(&[("USD", 1.18)]);
    let state = reduce(state, Message::CurrencySelected("USD".to_string()));
    let state = reduce(state, Message::SetInputText(None));

    let converter = state.converter.expect("converter open");
    assert_eq!(converter.input_text, None);
    assert_eq!(converter.input_amount(), None);
    assert_eq!(converter.output_amount(), None);
}

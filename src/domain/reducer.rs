//! Reducer for the whole application.

use crate::mvu::Reducer;

use super::command::Command;
use super::message::Message;
use super::rates::parse_rates;
use super::state::AppState;

/// State transitions for the converter application.
///
/// Pure function: the only I/O it ever asks for is returned as a
/// command value, and everything it learns comes back in as a message.
pub struct AppReducer;

impl Reducer for AppReducer {
    type Model = AppState;
    type Message = Message;
    type Command = Command;

    fn reduce(state: AppState, message: Message) -> (AppState, Vec<Command>) {
        match message {
            Message::SetInputText(text) => {
                // No converter open: nothing to edit.
                let mut state = state;
                if let Some(converter) = state.converter.as_mut() {
                    converter.input_text = text;
                }
                (state, Vec::new())
            }

            Message::DataReceived(body) => {
                let mut state = state;
                match body.as_deref().map(parse_rates) {
                    Some(Ok(rates)) => {
                        tracing::debug!(currencies = rates.len(), "rates table replaced");
                        state.rates = Some(rates);
                    }
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "discarding malformed rates response");
                    }
                    None => {
                        tracing::warn!("rates fetch failed; keeping previous rates");
                    }
                }
                (state, Vec::new())
            }

            Message::Reload => (
                state,
                vec![Command::FetchRates {
                    deliver: Message::DataReceived,
                }],
            ),

            Message::CurrencySelected(currency) => {
                let mut state = state;
                match state.select_currency(&currency) {
                    Ok(converter) => state.converter = Some(converter),
                    // Unreachable through correct wiring: the selection
                    // list is derived from the rate table.
                    Err(err) => {
                        tracing::error!(error = %err, "ignoring invalid currency selection");
                    }
                }
                (state, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::RateTable;

    fn state_with_rates() -> AppState {
        AppState {
            rates: Some(RateTable::from([
                ("USD".to_string(), 1.18),
                ("GBP".to_string(), 0.86),
            ])),
            converter: None,
        }
    }

    #[test]
    fn set_input_without_converter_is_noop() {
        let before = state_with_rates();
        let (after, commands) = AppReducer::reduce(
            before.clone(),
            Message::SetInputText(Some("250".to_string())),
        );
        assert_eq!(after, before);
        assert!(commands.is_empty());
    }

    #[test]
    fn reload_leaves_state_untouched() {
        let before = state_with_rates();
        let (after, commands) = AppReducer::reduce(before.clone(), Message::Reload);
        assert_eq!(after, before);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn reload_command_delivers_as_data_received() {
        let (_, commands) = AppReducer::reduce(AppState::default(), Message::Reload);
        let Command::FetchRates { deliver } = commands[0];
        assert_eq!(
            deliver(Some(b"payload".to_vec())),
            Message::DataReceived(Some(b"payload".to_vec()))
        );
        assert_eq!(deliver(None), Message::DataReceived(None));
    }

    #[test]
    fn failed_fetch_keeps_previous_rates() {
        let before = state_with_rates();
        let (after, commands) = AppReducer::reduce(before.clone(), Message::DataReceived(None));
        assert_eq!(after, before);
        assert!(commands.is_empty());
    }

    #[test]
    fn invalid_selection_is_ignored() {
        let before = state_with_rates();
        let (after, commands) = AppReducer::reduce(
            before.clone(),
            Message::CurrencySelected("CHF".to_string()),
        );
        assert_eq!(after, before);
        assert!(commands.is_empty());
    }
}

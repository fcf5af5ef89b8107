//! Messages driving the converter's reducer.

use crate::mvu::Message as MvuMessage;

/// Everything that can happen to the application, whether the user did
/// it or a command result came back.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The converter's input field changed. `None` means the platform
    /// reported a cleared field.
    SetInputText(Option<String>),

    /// Raw response body from the rates endpoint, `None` on any
    /// transport-level failure.
    DataReceived(Option<Vec<u8>>),

    /// The refresh button was pressed.
    Reload,

    /// A currency row was chosen on the rates screen.
    CurrencySelected(String),
}

impl MvuMessage for Message {}

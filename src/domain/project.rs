//! Projection of application state into a view tree.

use crate::view::{
    Background, Button, Glyph, NavFrame, Screen, Table, TableRow, ViewTree, Widget,
};

use super::message::Message;
use super::state::{AppState, Converter};

const RATES_TITLE: &str = "Rates";
const NO_RATES_TEXT: &str = "No rates loaded";
const PENDING_OUTPUT: &str = "...";

/// Describes the whole UI for `state`.
///
/// Pure and total: every reachable state projects to a tree, and equal
/// states project to equal trees.
pub fn project(state: &AppState) -> ViewTree<Message> {
    let screen = match &state.rates {
        None => Screen::Plain(Widget::Label {
            text: NO_RATES_TEXT.to_string(),
        }),
        Some(rates) => Screen::Table(Table {
            rows: rates
                .keys()
                .map(|code| TableRow {
                    id: code.clone(),
                    text: code.clone(),
                    on_select: Some(Message::CurrencySelected(code.clone())),
                    on_delete: None,
                })
                .collect(),
        }),
    };

    let mut stack = vec![NavFrame {
        title: RATES_TITLE.to_string(),
        right_buttons: vec![Button {
            glyph: Glyph::Refresh,
            on_press: Message::Reload,
        }],
        screen,
    }];

    if let Some(converter) = &state.converter {
        stack.push(NavFrame {
            title: converter.currency.clone(),
            right_buttons: Vec::new(),
            screen: Screen::Plain(converter_screen(converter)),
        });
    }

    ViewTree { stack }
}

fn converter_screen(converter: &Converter) -> Widget<Message> {
    let background = if converter.input_amount().is_some() {
        Background::Normal
    } else {
        Background::Error
    };
    let output = match converter.output_amount() {
        Some(amount) => format!("{} {}", amount, converter.currency),
        None => PENDING_OUTPUT.to_string(),
    };
    Widget::Column(vec![
        Widget::TextField {
            text: converter.input_text.clone().unwrap_or_default(),
            background,
            on_change: Message::SetInputText,
        },
        Widget::Label { text: output },
    ])
}

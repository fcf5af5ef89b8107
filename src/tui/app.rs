use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::domain::{project, AppReducer, AppState, Command, Message};
use crate::mvu::Reducer;
use crate::net::RatesClient;
use crate::view::{NavFrame, Table, ViewTree};

use super::events::AppEvent;

/// The driver's side of the loop: owns the root state, runs messages
/// through the reducer, executes the returned commands, and keeps the
/// cursors the pure core deliberately does not model.
///
/// Renderer-local cursors are `depth` (how far the user has navigated
/// into the projected stack; going back pops this, never the state) and
/// `selection` (the highlighted table row). Everything the app shows or
/// dispatches is read from the projected view tree, never hard-coded.
pub struct App {
    state: AppState,
    tree: ViewTree<Message>,
    depth: usize,
    selection: usize,
    should_quit: bool,
    client: RatesClient,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl App {
    pub fn new(client: RatesClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        let state = AppState::default();
        let tree = project(&state);
        Self {
            state,
            tree,
            depth: 0,
            selection: 0,
            should_quit: false,
            client,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The domain state, read-only. Mutation goes through `dispatch`.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// How deep the user has navigated into the stack.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Highlighted row on the visible table.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The frame the user is currently looking at.
    pub fn visible_frame(&self) -> Option<&NavFrame<Message>> {
        self.tree.visible_frame(self.depth)
    }

    /// Whether the visible screen has an editable text field.
    pub fn is_editing(&self) -> bool {
        self.visible_text_field().is_some()
    }

    /// Run one message through the reducer, execute the commands it
    /// returns, and re-project the tree.
    pub fn dispatch(&mut self, message: Message) {
        let (state, commands) = AppReducer::reduce(std::mem::take(&mut self.state), message);
        self.state = state;
        for command in commands {
            self.execute(command);
        }
        self.sync_tree();
    }

    /// Pop the renderer's navigation cursor. The state is untouched: an
    /// open converter survives and reappears when its frame is pushed
    /// again.
    pub fn navigate_back(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Move the table highlight, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let Some(len) = self.visible_table().map(|table| table.rows.len()) else {
            return;
        };
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Dispatch the highlighted row's selection message, then focus the
    /// deepest frame so a pushed (or replaced) screen becomes visible.
    pub fn activate_selection(&mut self) {
        let message = self
            .visible_table()
            .and_then(|table| table.rows.get(self.selection))
            .and_then(|row| row.on_select.clone());
        let Some(message) = message else {
            return;
        };
        self.dispatch(message);
        self.depth = self.tree.stack.len().saturating_sub(1);
    }

    /// Dispatch the visible frame's first bar-button message, if any.
    pub fn press_bar_button(&mut self) {
        let message = self
            .visible_frame()
            .and_then(|frame| frame.right_buttons.first())
            .map(|button| button.on_press.clone());
        if let Some(message) = message {
            self.dispatch(message);
        }
    }

    /// Append a character to the visible text field, dispatching the
    /// whole edited text through the field's change binding.
    pub fn insert_char(&mut self, ch: char) {
        let field = self
            .visible_text_field()
            .map(|(text, on_change)| (text.to_string(), on_change));
        let Some((mut text, on_change)) = field else {
            return;
        };
        text.push(ch);
        self.dispatch(on_change(Some(text)));
    }

    /// Delete the last character of the visible text field.
    pub fn delete_backwards(&mut self) {
        let field = self
            .visible_text_field()
            .map(|(text, on_change)| (text.to_string(), on_change));
        let Some((mut text, on_change)) = field else {
            return;
        };
        if text.pop().is_none() {
            return;
        }
        self.dispatch(on_change(Some(text)));
    }

    fn execute(&self, command: Command) {
        match command {
            Command::FetchRates { deliver } => {
                let client = self.client.clone();
                let events = self.events.clone();
                self.runtime.spawn(async move {
                    let body = client.fetch().await;
                    let _ = events.send(AppEvent::Message(deliver(body)));
                });
            }
        }
    }

    /// Re-project after a state change and keep the cursors sensible: a
    /// freshly pushed frame takes focus, like a navigation push, and
    /// both cursors are clamped to what the new tree actually has.
    fn sync_tree(&mut self) {
        let tree = project(&self.state);
        if tree.stack.len() > self.tree.stack.len() {
            self.depth = tree.stack.len() - 1;
        }
        self.depth = self.depth.min(tree.stack.len().saturating_sub(1));
        self.tree = tree;

        // The cursor tracks the table wherever it sits in the stack,
        // visible or not; a refresh can shrink the list while the
        // converter screen is up.
        let rows = self
            .tree
            .stack
            .iter()
            .find_map(|frame| frame.screen.table())
            .map(|table| table.rows.len());
        if let Some(len) = rows {
            self.selection = if len == 0 { 0 } else { self.selection.min(len - 1) };
        }
    }

    fn visible_table(&self) -> Option<&Table<Message>> {
        self.visible_frame()?.screen.table()
    }

    fn visible_text_field(&self) -> Option<(&str, fn(Option<String>) -> Message)> {
        self.visible_frame()?.screen.text_field()
    }
}

//! Platform-neutral view-tree vocabulary.
//!
//! The projector describes the whole UI as a value of these types; a
//! renderer (here the `tui` module) instantiates it with real widgets.
//! Trees are rebuilt from scratch on every state change; diffing, if
//! any, is the renderer's business.
//!
//! Every interactive element carries the message it emits, so a renderer
//! translates user input by reading the tree instead of knowing the
//! domain: rows carry `on_select`, buttons carry `on_press`, and text
//! fields carry an `on_change` constructor that wraps the edited text.

/// A navigation stack, bottom frame first. Never empty once projected.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTree<M> {
    pub stack: Vec<NavFrame<M>>,
}

impl<M> ViewTree<M> {
    /// Frame shown when the user is `depth` levels into the stack,
    /// clamped to the top. `None` only for an empty tree.
    pub fn visible_frame(&self, depth: usize) -> Option<&NavFrame<M>> {
        let top = self.stack.len().checked_sub(1)?;
        self.stack.get(depth.min(top))
    }
}

/// One level of the navigation stack: a titled screen with optional
/// action buttons on the trailing side of its bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavFrame<M> {
    pub title: String,
    pub right_buttons: Vec<Button<M>>,
    pub screen: Screen<M>,
}

/// A bar action button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button<M> {
    pub glyph: Glyph,
    pub on_press: M,
}

/// System glyph set for bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Refresh,
}

/// The body of a navigation frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<M> {
    /// A plain widget filling the frame.
    Plain(Widget<M>),
    /// A selectable table of rows.
    Table(Table<M>),
}

impl<M> Screen<M> {
    /// The selectable table, when this screen is one.
    pub fn table(&self) -> Option<&Table<M>> {
        match self {
            Screen::Table(table) => Some(table),
            Screen::Plain(_) => None,
        }
    }

    /// The editable text field on this screen, if it has one.
    pub fn text_field(&self) -> Option<(&str, fn(Option<String>) -> M)> {
        match self {
            Screen::Plain(widget) => widget.text_field(),
            Screen::Table(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<M> {
    pub rows: Vec<TableRow<M>>,
}

/// A selectable table row.
///
/// `id` is a stable identity for renderers that diff; `on_select` and
/// `on_delete` are the messages the row emits, with `None` meaning the
/// interaction is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<M> {
    pub id: String,
    pub text: String,
    pub on_select: Option<M>,
    pub on_delete: Option<M>,
}

/// Background treatment for input widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Normal,
    /// Distinct error color; the renderer picks the actual shade.
    Error,
}

/// Leaf and container widgets.
#[derive(Debug, Clone)]
pub enum Widget<M> {
    /// Vertical stack of child widgets.
    Column(Vec<Widget<M>>),
    Label {
        text: String,
    },
    /// Editable one-line field. `on_change` wraps the full edited text
    /// (or `None` when the platform reports a cleared field) into a
    /// message on every edit.
    TextField {
        text: String,
        background: Background,
        on_change: fn(Option<String>) -> M,
    },
}

impl<M> Widget<M> {
    /// First editable text field in this widget, depth-first.
    pub fn text_field(&self) -> Option<(&str, fn(Option<String>) -> M)> {
        match self {
            Widget::TextField {
                text, on_change, ..
            } => Some((text, *on_change)),
            Widget::Column(children) => children.iter().find_map(Widget::text_field),
            Widget::Label { .. } => None,
        }
    }
}

/// Widgets compare by what they display; the `on_change` binding is not
/// part of identity (function-pointer comparison is not meaningful).
impl<M: PartialEq> PartialEq for Widget<M> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Widget::Column(a), Widget::Column(b)) => a == b,
            (Widget::Label { text: a }, Widget::Label { text: b }) => a == b,
            (
                Widget::TextField {
                    text: a,
                    background: bg_a,
                    ..
                },
                Widget::TextField {
                    text: b,
                    background: bg_b,
                    ..
                },
            ) => a == b && bg_a == bg_b,
            _ => false,
        }
    }
}

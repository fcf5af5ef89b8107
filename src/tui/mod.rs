//! Terminal driver for the converter.
//!
//! The external collaborator the pure core assumes: renders the
//! projected view tree with ratatui, translates keyboard input back
//! into messages through the tree's own bindings, and executes fetch
//! commands on a tokio runtime. No conversion logic lives here.

pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod nav_bar;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;

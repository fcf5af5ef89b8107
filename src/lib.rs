//! cambio, a terminal currency converter with an Elm-style core.
//!
//! The application is one pure reducer plus one pure projector
//! (`domain`), driven in a closed loop by a terminal front-end (`tui`):
//! the driver renders the projected view tree, feeds user input back in
//! as messages, executes the commands the reducer returns, and delivers
//! their results as new messages.

pub mod config;
pub mod domain;
pub mod logging;
pub mod mvu;
pub mod net;
pub mod tui;
pub mod view;

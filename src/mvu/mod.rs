//! Model-View-Update (MVU) architecture primitives.
//!
//! This module provides the base traits for the unidirectional data flow
//! the application is built on.
//!
//! # Architecture
//!
//! ```text
//! Message ──→ Reducer ──→ (Model, Commands) ──→ View
//!    ↑                          │
//!    └──── driver executes ─────┘
//! ```
//!
//! - **Model**: Immutable representation of application state
//! - **Message**: User actions or delivered command results
//! - **Reducer**: Pure function computing the successor model plus the
//!   side effects to run, described as command values
//!
//! Commands are plain data; the driver interprets them and feeds their
//! results back into the loop as new messages.

mod message;
mod model;
mod reducer;

pub use message::Message;
pub use model::Model;
pub use reducer::Reducer;

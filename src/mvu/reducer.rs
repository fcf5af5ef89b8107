//! Reducer trait for the MVU architecture.

use super::message::Message;
use super::model::Model;

/// Reducer transforms the model based on messages.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Model, Message) -> (Model, Commands).
/// Side effects are never performed here; they are returned as command
/// values for the driver to execute.
pub trait Reducer {
    /// The model type this reducer operates on.
    type Model: Model;

    /// The message type this reducer handles.
    type Message: Message;

    /// The command type describing side effects the driver must run.
    type Command;

    /// Process a message and return the successor model plus the
    /// commands to execute.
    fn reduce(
        model: Self::Model,
        message: Self::Message,
    ) -> (Self::Model, Vec<Self::Command>);
}

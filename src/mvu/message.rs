//! Base trait for messages (events) in the MVU architecture.

/// Marker trait for message objects.
///
/// Messages represent:
/// - User actions (row selection, text edits, button presses)
/// - Command results delivered by the driver (network responses)
///
/// Messages are processed by reducers to produce new models.
pub trait Message: Send + 'static {}

//! Base trait for application state in the MVU architecture.

/// Marker trait for model objects.
///
/// Models should be:
/// - Immutable (Clone to create new models)
/// - Self-contained (all data needed to project the view)
/// - Comparable (PartialEq for detecting changes)
pub trait Model: Clone + PartialEq + Default + Send + 'static {}

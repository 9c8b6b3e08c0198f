//! Base trait for screen state in the MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the screen)
/// - Comparable (PartialEq for change suppression in the store)
pub trait ScreenState: Clone + PartialEq + Default + Send + 'static {}

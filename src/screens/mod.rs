//! Concrete Navi screens, each an instance of the MVI cycle.

pub mod invite;
pub mod places;
pub mod settings;
pub mod tracker;

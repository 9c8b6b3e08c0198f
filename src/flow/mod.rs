//! Generic flow building blocks shared by all screens.
//!
//! Every screen used to hand-roll its own loading flags, confirmation
//! dialogs and toast timers; these three types replace that duplication:
//!
//! - [`Remote`] — a retryable async load
//! - [`Confirmable`] — a staged action behind an explicit confirm step
//! - [`Notice`] — transient user feedback with timed dismissal

mod confirm;
mod load;
mod notice;

pub use confirm::Confirmable;
pub use load::Remote;
pub use notice::{Notice, NoticeLevel};

//! Model-View-Intent (MVI) screen-state primitives.
//!
//! Every Navi screen is built on the same unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ StateStore ──→ Subscribers
//!    ↑                                      │
//!    └──── effect tasks / user actions ─────┘
//! ```
//!
//! - **State**: immutable snapshot of everything a renderer needs
//! - **Intent**: user actions or async completions
//! - **Reducer**: pure function that transforms state based on intents
//! - **StateStore**: single-writer container fanning snapshots out to subscribers
//! - **Screen**: the per-screen owner that runs the cycle and scopes async work

mod effects;
mod intent;
mod reducer;
mod screen;
mod state;
mod store;

pub use effects::{Effect, EffectTask, IntentSender};
pub use intent::Intent;
pub use reducer::Reducer;
pub use screen::{Feature, ScreenHandle};
pub use state::ScreenState;
pub use store::{StateStore, Subscription};

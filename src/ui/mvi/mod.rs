//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits and runtime containers for
//! unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//!                  Effect ──→ View (one-shot)
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: One-shot instruction for the view (navigation, dialogs)
//! - **StateStore**: Holds the latest state and broadcasts it to observers
//! - **EffectChannel**: Single-consumer queue of effects, never replayed

mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use effect::{Effect, EffectChannel, EffectReceiver, EffectSender};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::StateStore;

//! Lumen Browser State
//!
//! Centralized state container for tabs and their engine sessions.
//! Components never mutate state directly: they dispatch a [`BrowserAction`]
//! to a [`Store`] and the store applies it.

mod action;
mod state;
mod store;
mod tab;

pub use action::{BrowserAction, EngineAction, TabListAction};
pub use state::BrowserState;
pub use store::{BrowserStore, Store};
pub use tab::{create_tab, ContentState, EngineState, TabSessionState};

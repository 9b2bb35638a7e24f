//! Lumen Session Bridge
//!
//! Browsing sessions live in the engine layer; the rest of the browser reads
//! tabs from the state store. [`SessionRegistrar`] keeps the two in step by
//! turning session lifecycle events into store actions.

mod adapter;
mod registrar;
mod session;

pub use adapter::{NativeEngineSession, PlaceholderEngineState};
pub use registrar::SessionRegistrar;
pub use session::Session;

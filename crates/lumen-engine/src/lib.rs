//! Lumen Engine Interfaces
//!
//! Capability set a browser engine session exposes to the state store.
//! Concrete engines (or adapters over them) implement [`EngineSession`];
//! the store only ever talks to this trait.

mod handle;
mod session;
mod settings;
mod state;
mod tracking;

pub use handle::EngineHandle;
pub use session::{EngineSession, LoadUrlFlags};
pub use settings::Settings;
pub use state::EngineSessionState;
pub use tracking::{CookiePolicy, TrackingCategory, TrackingProtectionPolicy};

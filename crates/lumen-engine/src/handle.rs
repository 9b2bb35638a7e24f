//! Native engine handle
//!
//! A live engine instance backing one tab. Engines expose far more than this;
//! the bridge only needs to hand it a URI.

pub trait EngineHandle: Send + Sync + std::fmt::Debug {
    /// Start loading `uri` in this engine instance
    fn load_uri(&self, uri: &str);
}

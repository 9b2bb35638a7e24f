//! Once-initialized client holder
//!
//! Holds the factory for a client and builds it on first [`LazyClient::get`].
//! Construction runs under a mutex, so concurrent first callers see exactly
//! one build. A failed build is not cached and the next call tries again.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use crate::Result;

type Init<C> = Box<dyn Fn() -> Result<C> + Send + Sync>;

pub struct LazyClient<C> {
    init: Init<C>,
    slot: Mutex<Option<Arc<C>>>,
}

impl<C> LazyClient<C> {
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> Result<C> + Send + Sync + 'static,
    {
        Self {
            init: Box::new(init),
            slot: Mutex::new(None),
        }
    }

    /// Return the client, building it if this is the first successful call
    pub fn get(&self) -> Result<Arc<C>> {
        let mut slot = self.slot.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new((self.init)()?);
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl<C> fmt::Debug for LazyClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyClient")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

//! Generic concurrency-safe object pool.
//!
//! [`Pool`] is the shared core of the buffer, reader and writer pools. It
//! hands out idle instances LIFO and falls back to a factory closure on a
//! miss. Resetting an instance before it is released is the caller's job;
//! the typed pools do that on every release path.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::config::PoolConfig;

type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;

/// A point-in-time snapshot of pool activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Instances handed out, recycled or new.
    pub acquired: u64,
    /// Instances built by the factory on a miss.
    pub created: u64,
    /// Instances returned and retained for reuse.
    pub released: u64,
    /// Instances returned but dropped because the idle bound was reached.
    pub discarded: u64,
    /// Instances currently idle in the pool.
    pub idle: usize,
}

/// A pool of reusable instances of one kind.
pub(crate) struct Pool<T> {
    idle: Mutex<Vec<T>>,
    factory: Factory<T>,
    max_idle: Option<usize>,
    acquired: AtomicU64,
    created: AtomicU64,
    released: AtomicU64,
    discarded: AtomicU64,
}

impl<T> Pool<T> {
    /// Creates an empty pool that builds instances with `factory` on a miss.
    pub(crate) fn new<F>(config: &PoolConfig, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            idle: Mutex::new(Vec::new()),
            factory: Box::new(factory),
            max_idle: config.max_idle(),
            acquired: AtomicU64::new(0),
            created: AtomicU64::new(0),
            released: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
        }
    }

    /// Takes an idle instance or builds a new one.
    pub(crate) fn get(&self) -> T {
        self.acquired.fetch_add(1, Ordering::Relaxed);

        // Keep the lock scope tight; the factory may allocate.
        let recycled = self.idle.lock().pop();
        match recycled {
            Some(item) => item,
            None => {
                self.created.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("pool miss, constructing new instance");
                (self.factory)()
            }
        }
    }

    /// Returns an already reset instance to the pool.
    pub(crate) fn put(&self, item: T) {
        let mut idle = self.idle.lock();
        if self.max_idle.is_some_and(|max| idle.len() >= max) {
            drop(idle);
            self.discarded.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("pool full, dropping released instance");
            return;
        }
        idle.push(item);
        drop(idle);
        self.released.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of idle instances.
    pub(crate) fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    /// Returns a snapshot of the pool counters.
    pub(crate) fn stats(&self) -> PoolStats {
        PoolStats {
            acquired: self.acquired.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            idle: self.idle(),
        }
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("idle", &self.idle())
            .field("max_idle", &self.max_idle)
            .finish_non_exhaustive()
    }
}

#![allow(dead_code)]
//! Free-list object pools.
//!
//! Released instances keep their backing storage (collection capacity) and
//! are handed out again instead of allocating fresh ones each frame.
//! Ownership does the bookkeeping the original free lists needed manual
//! discipline for: an instance cannot be handed out twice or touched after
//! release.

/// Reset an instance's logical state on release: collections cleared (not
/// deallocated), scalars back to construction defaults, caller-supplied
/// closures dropped so no external references outlive the release.
pub trait Recycle {
    fn recycle(&mut self);
}

/// A free list of recycled instances.
#[derive(Debug)]
pub struct Pool<X: Recycle> {
    free: Vec<X>,
}

impl<X: Recycle> Pool<X> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
        }
    }

    /// Pop a recycled instance, or build a fresh one if the pool is empty.
    #[inline]
    pub fn acquire_with(&mut self, make: impl FnOnce() -> X) -> X {
        self.free.pop().unwrap_or_else(make)
    }

    /// Return an instance for future reuse.
    #[inline]
    pub fn release(&mut self, mut instance: X) {
        instance.recycle();
        self.free.push(instance);
    }

    /// Number of instances currently parked in the free list.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

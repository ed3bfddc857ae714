//! Per-instance memoization of zero-argument properties
//!
//! A [`Memoized`] field on a struct plays the role of a cached property: the
//! owning type exposes an accessor that routes through
//! [`Memoized::get_or_compute`] (or the fallible variant), so the computation
//! runs on first access and every later access returns the stored value.

use std::cell::OnceCell;
use std::fmt;

/// Lazily filled, never invalidated cache slot owned by a single instance.
///
/// The slot is not `Sync`; sharing one instance between threads requires an
/// external lock.
pub struct Memoized<T> {
    name: &'static str,
    slot: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Create an empty slot. `name` only appears in log output.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceCell::new(),
        }
    }

    /// Return the cached value, computing and storing it on first access
    pub fn get_or_compute<F>(&self, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.slot.get() {
            log::debug!("Memo hit: {}", self.name);
            return value;
        }

        log::debug!("Memo miss: {}", self.name);
        self.slot.get_or_init(compute)
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// An error is returned to the caller and nothing is stored, so the next
    /// access runs the computation again.
    pub fn get_or_try_compute<F, E>(&self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.slot.get() {
            log::debug!("Memo hit: {}", self.name);
            return Ok(value);
        }

        log::debug!("Memo miss: {}", self.name);
        let value = compute()?;
        Ok(self.slot.get_or_init(|| value))
    }

    /// Whether a value has been stored
    pub fn is_cached(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The stored value, without computing
    pub fn peek(&self) -> Option<&T> {
        self.slot.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("name", &self.name)
            .field("value", &self.slot.get())
            .finish()
    }
}

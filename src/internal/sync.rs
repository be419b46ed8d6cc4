//! Synchronization primitives behind the singleton, switchable by feature.

#[cfg(feature = "once-cell")]
pub(crate) type Slot<T> = once_cell::sync::OnceCell<T>;
#[cfg(not(feature = "once-cell"))]
pub(crate) type Slot<T> = std::sync::OnceLock<T>;

/// Exclusive section around the singleton's check-and-create sequence.
#[cfg(feature = "parking-lot")]
pub(crate) struct InitLock(parking_lot::Mutex<()>);

#[cfg(feature = "parking-lot")]
impl InitLock {
    pub(crate) const fn new() -> Self {
        Self(parking_lot::const_mutex(()))
    }

    pub(crate) fn acquire(&self) -> parking_lot::MutexGuard<'_, ()> {
        self.0.lock()
    }
}

/// Exclusive section around the singleton's check-and-create sequence.
#[cfg(not(feature = "parking-lot"))]
pub(crate) struct InitLock(std::sync::Mutex<()>);

#[cfg(not(feature = "parking-lot"))]
impl InitLock {
    pub(crate) const fn new() -> Self {
        Self(std::sync::Mutex::new(()))
    }

    // The lock guards no data, only ordering, so a poisoned lock is safe to reuse.
    pub(crate) fn acquire(&self) -> std::sync::MutexGuard<'_, ()> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

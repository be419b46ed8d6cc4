//! Lifecycle-managed, process-wide single instances.
//!
//! A [`Singleton`] moves through `Uninitialized -> Initializing -> Ready`
//! exactly once. The whole check-and-create sequence runs inside one
//! exclusive section, so concurrent first callers cannot both construct an
//! instance: the winner builds it, everyone else blocks on the section and
//! then reads what the winner stored. Once `Ready`, reads take no lock.
//!
//! There is no reset or destroy operation. The instance lives until the
//! owning static is torn down with the process.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use crate::descriptors::VariantDescriptor;
use crate::internal::sync::{InitLock, Slot};
use crate::lifetime::Lifetime;

const SOURCE: &str = "singleton";

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const READY: u8 = 2;

/// Observable lifecycle of a [`Singleton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonState {
    Uninitialized,
    Initializing,
    /// Terminal.
    Ready,
}

/// A value created at most once, on first demand, and shared for the rest
/// of the process.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{Singleton, SingletonState};
///
/// struct Settings {
///     threads: usize,
/// }
///
/// static SETTINGS: Singleton<Settings> = Singleton::new(|| Settings { threads: 4 });
///
/// assert_eq!(SETTINGS.state(), SingletonState::Uninitialized);
/// assert!(SETTINGS.try_get().is_none());
///
/// let first = SETTINGS.get();
/// let second = SETTINGS.get();
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(SETTINGS.threads, 4);
/// assert_eq!(SETTINGS.state(), SingletonState::Ready);
/// ```
pub struct Singleton<T, F = fn() -> T> {
    state: AtomicU8,
    init_lock: InitLock,
    slot: Slot<T>,
    init: F,
}

impl<T, F> Singleton<T, F> {
    /// Creates an uninitialized singleton; `init` runs on the first [`get`](Self::get).
    pub const fn new(init: F) -> Self {
        Self {
            state: AtomicU8::new(UNINITIALIZED),
            init_lock: InitLock::new(),
            slot: Slot::new(),
            init,
        }
    }

    /// Current lifecycle state. A filled slot always reads as `Ready`, so
    /// this never disagrees with [`try_get`](Self::try_get).
    pub fn state(&self) -> SingletonState {
        if self.slot.get().is_some() {
            return SingletonState::Ready;
        }
        match self.state.load(Ordering::Acquire) {
            UNINITIALIZED => SingletonState::Uninitialized,
            INITIALIZING => SingletonState::Initializing,
            _ => SingletonState::Ready,
        }
    }

    /// The instance if it already exists. Never triggers construction.
    pub fn try_get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Describes the shared instance, whether or not it exists yet.
    pub fn descriptor(&self) -> VariantDescriptor {
        VariantDescriptor::new(
            SOURCE,
            std::any::type_name::<T>().to_string(),
            Lifetime::Singleton,
            std::any::type_name::<T>(),
        )
    }
}

impl<T, F: Fn() -> T> Singleton<T, F> {
    /// Returns the instance, creating it if this is the first request.
    ///
    /// Every call over the process lifetime returns a reference to the same
    /// instance.
    pub fn get(&self) -> &T {
        match self.slot.get() {
            Some(instance) => instance,
            None => self.initialize(),
        }
    }

    #[cold]
    fn initialize(&self) -> &T {
        let _guard = self.init_lock.acquire();

        // Another thread may have finished while we waited for the section.
        if let Some(instance) = self.slot.get() {
            return instance;
        }

        self.state.store(INITIALIZING, Ordering::Release);
        let rollback = Rollback(&self.state);
        let started = Instant::now();
        let value = (self.init)();
        let instance = self.slot.get_or_init(move || value);
        std::mem::forget(rollback);
        self.state.store(READY, Ordering::Release);

        tracing::info!(
            target: "ferrous_provision",
            source = SOURCE,
            instance = std::any::type_name::<T>(),
            lifetime = %Lifetime::Singleton,
            elapsed = ?started.elapsed(),
            "singleton ready"
        );
        instance
    }
}

impl<T, F: Fn() -> T> Deref for Singleton<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Singleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("state", &self.state())
            .field("instance", &self.try_get())
            .finish()
    }
}

/// Puts the state back to `Uninitialized` if the initializer unwinds, so a
/// later caller can retry.
struct Rollback<'a>(&'a AtomicU8);

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        self.0.store(UNINITIALIZED, Ordering::Release);
    }
}

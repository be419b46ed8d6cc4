//! Provisioning lifetime definitions.

use std::fmt;

/// How a product reached its caller
///
/// Every provisioning path hands the caller a product with one of these
/// ownership stories. Observers receive the lifetime with each creation
/// event so they can tell a fresh construction from a clone or a shared
/// instance.
///
/// # Lifetime Characteristics
///
/// - **Transient**: Fresh instance per request, exclusively owned by the caller
/// - **Cloned**: Deep copy of a held template, exclusively owned by the caller
/// - **Singleton**: One shared instance for the whole process, never handed over
///
/// # Examples
///
/// ```rust
/// use ferrous_provision::Lifetime;
///
/// assert!(Lifetime::Transient.is_caller_owned());
/// assert!(Lifetime::Cloned.is_caller_owned());
/// assert!(!Lifetime::Singleton.is_caller_owned());
/// assert_eq!(Lifetime::Cloned.to_string(), "cloned");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Lifetime {
    /// New instance per request, never cached
    ///
    /// Produced by keyed factories, family factories and builders. The
    /// provisioning subsystem keeps no reference once the value is returned.
    Transient,
    /// Copy of a registry-owned template
    ///
    /// The template stays in the registry; the caller owns an independent
    /// deep copy that can be mutated freely.
    Cloned,
    /// Single instance for the process, created on first demand
    ///
    /// Callers borrow the instance; it is released only at process teardown.
    Singleton,
}

impl Lifetime {
    /// Returns `true` when the caller receives exclusive ownership.
    pub fn is_caller_owned(self) -> bool {
        !matches!(self, Lifetime::Singleton)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Lifetime::Transient => "transient",
            Lifetime::Cloned => "cloned",
            Lifetime::Singleton => "singleton",
        };
        f.write_str(label)
    }
}

//! Internal implementation details.

pub(crate) mod sync;

/// Hash map used by the registries; `ahash` when the feature is enabled.
#[cfg(feature = "ahash")]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
#[cfg(not(feature = "ahash"))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;

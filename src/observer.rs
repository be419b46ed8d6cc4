//! Observation hooks for provisioning events.
//!
//! Factories and registries notify their observers after every creation and
//! every failure. Keep observers cheap: calls happen synchronously on the
//! caller's thread.

use std::sync::Arc;
use std::time::Duration;

use crate::error::ProvisionError;
use crate::lifetime::Lifetime;

/// A successful provisioning event.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionEvent {
    /// Component that produced the product, e.g. `"keyed_factory"`.
    pub source: &'static str,
    /// Discriminator or template name that was requested.
    pub variant: String,
    pub lifetime: Lifetime,
    /// Time spent inside the constructor or clone.
    pub duration: Duration,
}

/// Observer for provisioning events.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{ProvisionEvent, ProvisionObserver, ShapeFactory, ShapeKind};
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<String>>);
///
/// impl ProvisionObserver for Recorder {
///     fn created(&self, event: &ProvisionEvent) {
///         self.0.lock().unwrap().push(event.variant.clone());
///     }
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let mut factory = ShapeFactory::registry();
/// factory.add_observer(recorder.clone());
///
/// factory.create(&ShapeKind::Square).unwrap();
/// assert_eq!(*recorder.0.lock().unwrap(), vec!["square".to_string()]);
/// ```
pub trait ProvisionObserver: Send + Sync {
    fn created(&self, event: &ProvisionEvent);

    /// Called when a request could not be served. The error still reaches
    /// the caller afterwards.
    fn failed(&self, source: &'static str, error: &ProvisionError) {
        let _ = (source, error);
    }
}

/// Registered observers of one component.
#[derive(Default, Clone)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn ProvisionObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn ProvisionObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    #[inline]
    pub(crate) fn created(&self, event: &ProvisionEvent) {
        for observer in &self.observers {
            observer.created(event);
        }
    }

    #[inline]
    pub(crate) fn failed(&self, source: &'static str, error: &ProvisionError) {
        for observer in &self.observers {
            observer.failed(source, error);
        }
    }
}

/// Built-in observer that forwards events to `tracing`.
///
/// Creations are logged at `info`, failures at `warn`, both under the
/// `ferrous_provision` target.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{LoggingObserver, PrototypeRegistry};
/// use std::sync::Arc;
///
/// let mut registry = PrototypeRegistry::<String>::new();
/// registry.add_observer(Arc::new(LoggingObserver::with_prefix("[templates]")));
/// registry.register("greeting", "hello".to_string());
///
/// assert_eq!(registry.create_from_template("greeting").unwrap(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    pub fn new() -> Self {
        Self {
            prefix: "[ferrous-provision]".to_string(),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionObserver for LoggingObserver {
    fn created(&self, event: &ProvisionEvent) {
        tracing::info!(
            target: "ferrous_provision",
            source = event.source,
            variant = %event.variant,
            lifetime = %event.lifetime,
            elapsed = ?event.duration,
            "{} provisioned {}",
            self.prefix,
            event.variant
        );
    }

    fn failed(&self, source: &'static str, error: &ProvisionError) {
        tracing::warn!(
            target: "ferrous_provision",
            source,
            kind = error.kind(),
            "{} {}",
            self.prefix,
            error
        );
    }
}

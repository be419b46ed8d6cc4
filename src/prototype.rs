//! Prototype registry: named templates, handed out as clones.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ProvisionConfig;
use crate::descriptors::VariantDescriptor;
use crate::error::{ProvisionError, ProvisionResult};
use crate::internal::Map;
use crate::lifetime::Lifetime;
use crate::observer::{LoggingObserver, Observers, ProvisionEvent, ProvisionObserver};
use crate::traits::Provider;

const SOURCE: &str = "prototype_registry";

/// Holds named templates and provisions deep copies of them.
///
/// The registry owns its templates for its whole lifetime and never lends
/// them out: [`create_from_template`](Self::create_from_template) always
/// returns a clone. Use `Box<dyn Shape>` (or any other boxed product trait
/// object from this crate) as `T` to keep heterogeneous templates; the clone
/// keeps each template's concrete variant.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{Circle, PrototypeRegistry, ProvisionError, Shape, Style};
///
/// let mut registry: PrototypeRegistry<Box<dyn Shape>> = PrototypeRegistry::new();
/// registry.register("red-dot", Box::new(Circle { radius: 0.5, style: Style::new("red") }));
///
/// let mut dot = registry.create_from_template("red-dot").unwrap();
/// dot.scale(4.0);
///
/// let fresh = registry.create_from_template("red-dot").unwrap();
/// assert_eq!(fresh.render(), "Circle(radius=0.50, color=red)");
/// assert_eq!(
///     registry.create_from_template("blue-dot").unwrap_err(),
///     ProvisionError::TemplateNotFound("blue-dot".to_string()),
/// );
/// ```
pub struct PrototypeRegistry<T> {
    templates: Map<String, T>,
    observers: Observers,
}

impl<T: Clone> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            templates: Map::default(),
            observers: Observers::new(),
        }
    }

    /// Stores `template` under `name`, replacing any previous template.
    pub fn register(&mut self, name: impl Into<String>, template: T) -> &mut Self {
        let name = name.into();
        tracing::debug!(target: "ferrous_provision", template = %name, "template registered");
        self.templates.insert(name, template);
        self
    }

    /// Removes a template. Returns `false` if none was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.templates.remove(name).is_some()
    }

    pub fn add_observer(&mut self, observer: Arc<dyn ProvisionObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    /// Attaches a [`LoggingObserver`] when creation logging is enabled.
    pub fn configure(&mut self, config: &ProvisionConfig) -> &mut Self {
        if config.observe_creations {
            self.add_observer(Arc::new(LoggingObserver::with_prefix(config.log_prefix.clone())));
        }
        self
    }

    /// Returns an independent copy of the template registered as `name`.
    pub fn create_from_template(&self, name: &str) -> ProvisionResult<T> {
        let Some(template) = self.templates.get(name) else {
            let error = ProvisionError::TemplateNotFound(name.to_string());
            tracing::warn!(target: "ferrous_provision", template = name, "template not found");
            self.observers.failed(SOURCE, &error);
            return Err(error);
        };

        let started = Instant::now();
        let copy = template.clone();
        let duration = started.elapsed();
        tracing::debug!(target: "ferrous_provision", template = name, elapsed = ?duration, "template cloned");

        if self.observers.has_observers() {
            self.observers.created(&ProvisionEvent {
                source: SOURCE,
                variant: name.to_string(),
                lifetime: Lifetime::Cloned,
                duration,
            });
        }
        Ok(copy)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn descriptors(&self) -> Vec<VariantDescriptor> {
        self.names()
            .into_iter()
            .map(|name| {
                VariantDescriptor::new(
                    SOURCE,
                    name.to_string(),
                    Lifetime::Cloned,
                    std::any::type_name::<T>(),
                )
            })
            .collect()
    }
}

impl<T: Clone> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PrototypeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrototypeRegistry")
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T: Clone> Provider<str> for PrototypeRegistry<T> {
    type Output = T;

    fn provide(&self, name: &str) -> ProvisionResult<T> {
        self.create_from_template(name)
    }
}

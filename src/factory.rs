//! Keyed factory dispatch.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ProvisionConfig;
use crate::descriptors::VariantDescriptor;
use crate::error::{ProvisionError, ProvisionResult};
use crate::internal::Map;
use crate::key::{Discriminator, ShapeKind};
use crate::lifetime::Lifetime;
use crate::observer::{LoggingObserver, Observers, ProvisionEvent, ProvisionObserver};
use crate::product::{Circle, Rectangle, Shape, Square};
use crate::traits::Provider;

const SOURCE: &str = "keyed_factory";

type Ctor<P> = Arc<dyn Fn() -> Box<P> + Send + Sync>;

/// Maps a discriminator to a product constructor.
///
/// Every [`create`](Self::create) call runs the constructor afresh and hands
/// the caller exclusive ownership; nothing is cached. Unknown discriminators
/// fail with [`ProvisionError::UnsupportedVariant`], never with a default.
///
/// Registering an already-present key replaces its constructor.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{KeyedFactory, Product, ProvisionError};
///
/// #[derive(Debug, Clone)]
/// struct Plugin(&'static str);
///
/// impl Product for Plugin {
///     fn name(&self) -> &str { self.0 }
///     fn render(&self) -> String { format!("plugin {}", self.0) }
/// }
///
/// let mut plugins: KeyedFactory<&'static str, dyn Product> = KeyedFactory::new();
/// plugins
///     .register("csv", || Box::new(Plugin("csv")))
///     .register("json", || Box::new(Plugin("json")));
///
/// assert_eq!(plugins.create(&"json").unwrap().render(), "plugin json");
/// assert_eq!(
///     plugins.create(&"xml").unwrap_err(),
///     ProvisionError::UnsupportedVariant("xml".to_string()),
/// );
/// ```
pub struct KeyedFactory<K, P: ?Sized> {
    ctors: Map<K, Ctor<P>>,
    observers: Observers,
}

impl<K, P> KeyedFactory<K, P>
where
    K: Discriminator,
    P: ?Sized + 'static,
{
    pub fn new() -> Self {
        Self {
            ctors: Map::default(),
            observers: Observers::new(),
        }
    }

    /// Registers `ctor` under `key`, replacing any previous constructor.
    pub fn register<F>(&mut self, key: K, ctor: F) -> &mut Self
    where
        F: Fn() -> Box<P> + Send + Sync + 'static,
    {
        if self.ctors.insert(key.clone(), Arc::new(ctor)).is_some() {
            tracing::debug!(target: "ferrous_provision", variant = %key, "constructor replaced");
        }
        self
    }

    /// Attaches an observer notified of every creation and failure.
    pub fn add_observer(&mut self, observer: Arc<dyn ProvisionObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    /// Applies runtime options: attaches a [`LoggingObserver`] when
    /// creation logging is enabled.
    pub fn configure(&mut self, config: &ProvisionConfig) -> &mut Self {
        if config.observe_creations {
            self.add_observer(Arc::new(LoggingObserver::with_prefix(config.log_prefix.clone())));
        }
        self
    }

    /// Creates a fresh product for `key`.
    pub fn create(&self, key: &K) -> ProvisionResult<Box<P>> {
        let Some(ctor) = self.ctors.get(key) else {
            let error = ProvisionError::UnsupportedVariant(key.to_string());
            tracing::warn!(target: "ferrous_provision", variant = %key, "unsupported variant requested");
            self.observers.failed(SOURCE, &error);
            return Err(error);
        };

        let started = Instant::now();
        let product = ctor();
        let duration = started.elapsed();
        tracing::debug!(target: "ferrous_provision", variant = %key, elapsed = ?duration, "product created");

        if self.observers.has_observers() {
            self.observers.created(&ProvisionEvent {
                source: SOURCE,
                variant: key.to_string(),
                lifetime: Lifetime::Transient,
                duration,
            });
        }
        Ok(product)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.ctors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Registered discriminators, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.ctors.keys()
    }

    /// One descriptor per registered discriminator, sorted by label.
    pub fn descriptors(&self) -> Vec<VariantDescriptor> {
        let mut descriptors: Vec<_> = self
            .ctors
            .keys()
            .map(|key| {
                VariantDescriptor::new(
                    SOURCE,
                    key.to_string(),
                    Lifetime::Transient,
                    std::any::type_name::<P>(),
                )
            })
            .collect();
        descriptors.sort_by(|a, b| a.label.cmp(&b.label));
        descriptors
    }
}

impl<K, P> Default for KeyedFactory<K, P>
where
    K: Discriminator,
    P: ?Sized + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P: ?Sized> fmt::Debug for KeyedFactory<K, P>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedFactory")
            .field("keys", &self.ctors.keys().collect::<Vec<_>>())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<K, P> Provider<K> for KeyedFactory<K, P>
where
    K: Discriminator,
    P: ?Sized + 'static,
{
    type Output = Box<P>;

    fn provide(&self, key: &K) -> ProvisionResult<Box<P>> {
        self.create(key)
    }
}

/// Closed dispatch over [`ShapeKind`].
///
/// The variant set is fixed at compile time, so [`create`](Self::create) is
/// infallible. String input goes through [`create_named`](Self::create_named),
/// which rejects anything outside the set.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{ShapeFactory, ShapeKind};
///
/// let factory = ShapeFactory::new();
/// let circle = factory.create(ShapeKind::Circle);
/// let rectangle = factory.create_named("rectangle").unwrap();
///
/// assert!(circle.render().starts_with("Circle"));
/// assert!(rectangle.render().starts_with("Rectangle"));
/// assert!(factory.create_named("hexagon").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, kind: ShapeKind) -> Box<dyn Shape> {
        let shape: Box<dyn Shape> = match kind {
            ShapeKind::Circle => Box::new(Circle::default()),
            ShapeKind::Rectangle => Box::new(Rectangle::default()),
            ShapeKind::Square => Box::new(Square::default()),
        };
        tracing::debug!(target: "ferrous_provision", variant = %kind, "shape created");
        shape
    }

    /// Parses `name` as a [`ShapeKind`] and creates the matching shape.
    pub fn create_named(&self, name: &str) -> ProvisionResult<Box<dyn Shape>> {
        let kind = name.parse::<ShapeKind>().inspect_err(|error| {
            tracing::warn!(target: "ferrous_provision", %error, "shape lookup failed");
        })?;
        Ok(self.create(kind))
    }

    /// An open [`KeyedFactory`] pre-populated with every built-in shape,
    /// ready for additional registrations or observers.
    pub fn registry() -> KeyedFactory<ShapeKind, dyn Shape> {
        let mut factory = KeyedFactory::new();
        for kind in ShapeKind::ALL {
            factory.register(kind, move || ShapeFactory.create(kind));
        }
        factory
    }
}

impl Provider<ShapeKind> for ShapeFactory {
    type Output = Box<dyn Shape>;

    fn provide(&self, kind: &ShapeKind) -> ProvisionResult<Box<dyn Shape>> {
        Ok(self.create(*kind))
    }
}

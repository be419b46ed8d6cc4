//! Family factories: sets of mutually consistent products.
//!
//! A [`GuiFactory`] is bound to one [`FamilyTag`] when it is constructed and
//! has no way to change it, so every product it returns carries that tag.
//! Adding a family means adding one more `GuiFactory` implementation; the
//! existing ones stay untouched.

use std::fmt;
use std::sync::Arc;

use crate::config::ProvisionConfig;
use crate::error::{ProvisionError, ProvisionResult};
use crate::product::{Button, Checkbox, FamilyTag};
use crate::traits::Provider;

mod mac;
mod windows;

pub use mac::{MacButton, MacCheckbox, MacFactory};
pub use windows::{WindowsButton, WindowsCheckbox, WindowsFactory};

/// Abstract factory producing one product per role for a single family.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{FamilyTag, GuiFactory, MacFactory, WindowsFactory};
///
/// let windows = WindowsFactory::new();
/// assert_eq!(windows.create_button().family(), &FamilyTag::WINDOWS);
/// assert_eq!(windows.create_checkbox().family(), &FamilyTag::WINDOWS);
///
/// let mac = MacFactory::new();
/// assert_ne!(mac.create_button().family(), &FamilyTag::WINDOWS);
/// ```
pub trait GuiFactory: Send + Sync {
    /// The family every product of this factory belongs to.
    fn family(&self) -> &FamilyTag;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

/// One product per role, all from the same factory.
///
/// Members are only reachable through accessors, so a set can never be
/// assembled from two different families.
#[derive(Debug, Clone)]
pub struct WidgetSet {
    family: FamilyTag,
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl WidgetSet {
    pub fn from_factory(factory: &dyn GuiFactory) -> Self {
        Self {
            family: factory.family().clone(),
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn family(&self) -> &FamilyTag {
        &self.family
    }

    pub fn button(&self) -> &dyn Button {
        self.button.as_ref()
    }

    pub fn button_mut(&mut self) -> &mut dyn Button {
        self.button.as_mut()
    }

    pub fn checkbox(&self) -> &dyn Checkbox {
        self.checkbox.as_ref()
    }

    pub fn checkbox_mut(&mut self) -> &mut dyn Checkbox {
        self.checkbox.as_mut()
    }

    /// `true` when every member carries the factory's tag.
    pub fn is_consistent(&self) -> bool {
        self.button.family() == &self.family && self.checkbox.family() == &self.family
    }
}

/// Family factories indexed by tag.
///
/// Lookup is case-insensitive. Registering a factory whose tag is already
/// present replaces the old one; every other family is left as is.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{FamilyCatalog, FamilyTag, ProvisionError};
///
/// let catalog = FamilyCatalog::with_defaults();
/// let mac = catalog.factory("mac").unwrap();
/// assert_eq!(mac.family(), &FamilyTag::MAC);
///
/// assert_eq!(
///     catalog.factory("beos").err(),
///     Some(ProvisionError::UnsupportedVariant("beos".to_string())),
/// );
/// ```
#[derive(Clone, Default)]
pub struct FamilyCatalog {
    factories: Vec<Arc<dyn GuiFactory>>,
}

impl FamilyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in Windows and Mac families.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog
            .register(Arc::new(WindowsFactory::new()))
            .register(Arc::new(MacFactory::new()));
        catalog
    }

    pub fn register(&mut self, factory: Arc<dyn GuiFactory>) -> &mut Self {
        let tag = factory.family().clone();
        match self.factories.iter().position(|f| f.family().matches(tag.as_str())) {
            Some(pos) => self.factories[pos] = factory,
            None => self.factories.push(factory),
        }
        tracing::debug!(target: "ferrous_provision", family = %tag, "family registered");
        self
    }

    pub fn factory(&self, tag: &str) -> ProvisionResult<Arc<dyn GuiFactory>> {
        self.factories
            .iter()
            .find(|f| f.family().matches(tag))
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(target: "ferrous_provision", family = tag, "unknown family requested");
                ProvisionError::UnsupportedVariant(tag.trim().to_string())
            })
    }

    /// The factory for the configured default family.
    pub fn from_config(&self, config: &ProvisionConfig) -> ProvisionResult<Arc<dyn GuiFactory>> {
        self.factory(&config.default_family)
    }

    /// Registered tags in registration order.
    pub fn families(&self) -> Vec<FamilyTag> {
        self.factories.iter().map(|f| f.family().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for FamilyCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyCatalog")
            .field("families", &self.families())
            .finish()
    }
}

impl Provider<str> for FamilyCatalog {
    type Output = Arc<dyn GuiFactory>;

    fn provide(&self, tag: &str) -> ProvisionResult<Arc<dyn GuiFactory>> {
        self.factory(tag)
    }
}

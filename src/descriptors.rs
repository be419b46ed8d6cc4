//! Descriptors for introspecting what a factory or registry can provide.

use crate::lifetime::Lifetime;

/// Describes one provisionable variant.
///
/// Returned by [`KeyedFactory::descriptors`](crate::KeyedFactory::descriptors)
/// and [`PrototypeRegistry::descriptors`](crate::PrototypeRegistry::descriptors),
/// sorted by label.
///
/// # Examples
///
/// ```rust
/// use ferrous_provision::{Lifetime, ShapeFactory};
///
/// let descriptors = ShapeFactory::registry().descriptors();
/// let labels: Vec<_> = descriptors.iter().map(|d| d.label.as_str()).collect();
///
/// assert_eq!(labels, ["circle", "rectangle", "square"]);
/// assert!(descriptors.iter().all(|d| d.lifetime == Lifetime::Transient));
/// assert!(descriptors[0].product_type().contains("Shape"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Component holding the variant, e.g. `"keyed_factory"`.
    pub source: &'static str,
    /// Discriminator or template name, in display form.
    pub label: String,
    /// How products of this variant reach the caller.
    pub lifetime: Lifetime,
    product_type: &'static str,
}

impl VariantDescriptor {
    pub(crate) fn new(
        source: &'static str,
        label: String,
        lifetime: Lifetime,
        product_type: &'static str,
    ) -> Self {
        Self {
            source,
            label,
            lifetime,
            product_type,
        }
    }

    /// Name of the product type the variant produces, as reported by
    /// `std::any::type_name`.
    pub fn product_type(&self) -> &'static str {
        self.product_type
    }
}

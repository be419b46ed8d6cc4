//! The unified provisioning contract.

use crate::error::ProvisionResult;

/// One contract for every way of obtaining a product.
///
/// The request type is what distinguishes the provisioning strategies:
///
/// | Implementor | Request | Output |
/// |---|---|---|
/// | [`KeyedFactory<K, P>`](crate::KeyedFactory) | `K` | `Box<P>` |
/// | [`ShapeFactory`](crate::ShapeFactory) | `ShapeKind` | `Box<dyn Shape>` |
/// | [`FamilyCatalog`](crate::FamilyCatalog) | `str` (family tag) | `Arc<dyn GuiFactory>` |
/// | [`DirectedProvider<B>`](crate::DirectedProvider) | `Recipe` | `B::Output` |
/// | [`PrototypeRegistry<T>`](crate::PrototypeRegistry) | `str` (template name) | `T` |
///
/// Callers that only need "give me a product for this request" can be
/// written once against `Provider` and handed any of the above.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{Provider, ProvisionResult, ShapeFactory, ShapeKind, Shape};
///
/// fn render_all<P>(provider: &P, requests: &[ShapeKind]) -> ProvisionResult<Vec<String>>
/// where
///     P: Provider<ShapeKind, Output = Box<dyn Shape>>,
/// {
///     requests.iter().map(|kind| Ok(provider.provide(kind)?.render())).collect()
/// }
///
/// let rendered = render_all(&ShapeFactory::new(), &[ShapeKind::Circle, ShapeKind::Square]).unwrap();
/// assert!(rendered[0].starts_with("Circle"));
/// assert!(rendered[1].starts_with("Square"));
/// ```
pub trait Provider<R: ?Sized> {
    /// What the caller receives.
    type Output;

    /// Provisions a product for `request`.
    fn provide(&self, request: &R) -> ProvisionResult<Self::Output>;
}

//! The capability contract every provisioned object satisfies.

use std::fmt;

use super::boxed_clone;

/// Capability contract shared by every provisioned product.
///
/// Variants are substitutable wherever a `dyn Product` (or one of the role
/// traits built on top of it, such as [`Shape`](crate::Shape) or
/// [`Button`](crate::Button)) is expected. Products never share mutable
/// state with one another, which is why they are `Send + Sync` and can be
/// handed to any thread once created.
///
/// Every product is `Clone`, which makes `Box<dyn Product>` cloneable too:
/// the copy keeps the concrete variant and owns all of its state.
///
/// # Examples
///
/// ```
/// use ferrous_provision::Product;
///
/// #[derive(Debug, Clone)]
/// struct Banner {
///     text: String,
/// }
///
/// impl Product for Banner {
///     fn name(&self) -> &str {
///         "Banner"
///     }
///
///     fn render(&self) -> String {
///         format!("*** {} ***", self.text)
///     }
/// }
///
/// let products: Vec<Box<dyn Product>> = vec![Box::new(Banner { text: "hi".into() })];
/// let copies = products.clone();
/// assert_eq!(copies[0].render(), "*** hi ***");
/// ```
pub trait Product: fmt::Debug + Send + Sync + CloneProduct {
    /// Variant name, e.g. `"Circle"` or `"Windows button"`.
    fn name(&self) -> &str;

    /// Variant-specific textual rendering of the product.
    fn render(&self) -> String;
}

boxed_clone!(
    /// Object-safe deep copy for `Box<dyn Product>`.
    pub trait CloneProduct for dyn Product
);

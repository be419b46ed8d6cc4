//! Deep-copy support for boxed product trait objects.

/// Generates the cloning helper trait for a product trait object.
///
/// `Clone` is not object safe, so a `Box<dyn Shape>` cannot be cloned
/// directly. The macro emits a helper trait with a `clone_box` method,
/// blanket-implements it for every `Clone` implementor of the product
/// trait, and implements `Clone` for the boxed trait object by dispatching
/// through the vtable. The copy always has the same concrete variant as the
/// source.
///
/// Role traits inherit the helper of [`Product`](crate::Product) as well, so
/// the generated `Clone` impl calls its own helper by path.
///
/// The product trait must list the helper as a supertrait:
///
/// ```ignore
/// pub trait Shape: Product + CloneShape { /* ... */ }
/// boxed_clone!(pub trait CloneShape for dyn Shape);
/// ```
macro_rules! boxed_clone {
    ($(#[$meta:meta])* $vis:vis trait $helper:ident for dyn $product:ident) => {
        $(#[$meta])*
        $vis trait $helper {
            /// Deep-copies `self` into a new box holding the same concrete variant.
            fn clone_box(&self) -> Box<dyn $product>;
        }

        impl<T> $helper for T
        where
            T: $product + Clone + 'static,
        {
            fn clone_box(&self) -> Box<dyn $product> {
                Box::new(self.clone())
            }
        }

        impl Clone for Box<dyn $product> {
            fn clone(&self) -> Self {
                $helper::clone_box(&**self)
            }
        }
    };
}

pub(crate) use boxed_clone;

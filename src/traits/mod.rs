//! Core traits for the provisioning subsystem.

mod clone;
mod product;
mod provider;

pub(crate) use clone::boxed_clone;
pub use product::{CloneProduct, Product};
pub use provider::Provider;

//! Role contracts for family-bound widget products.

use std::borrow::Cow;
use std::fmt;

use crate::traits::{boxed_clone, Product};

/// Identifier binding a set of product variants as mutually consistent.
///
/// Tags compare by their text, so a tag created at runtime with
/// `FamilyTag::new("Windows")` equals [`FamilyTag::WINDOWS`].
///
/// # Examples
///
/// ```
/// use ferrous_provision::FamilyTag;
///
/// let tag = FamilyTag::new("Windows".to_string());
/// assert_eq!(tag, FamilyTag::WINDOWS);
/// assert_ne!(tag, FamilyTag::MAC);
/// assert_eq!(FamilyTag::MAC.to_string(), "Mac");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyTag(Cow<'static, str>);

impl FamilyTag {
    pub const WINDOWS: FamilyTag = FamilyTag::new_static("Windows");
    pub const MAC: FamilyTag = FamilyTag::new_static("Mac");

    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Const constructor for tags known at compile time, usable in statics.
    pub const fn new_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw tag string.
    pub fn matches(&self, raw: &str) -> bool {
        self.0.eq_ignore_ascii_case(raw.trim())
    }
}

impl fmt::Display for FamilyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product that belongs to exactly one family.
pub trait Widget: Product {
    fn family(&self) -> &FamilyTag;
}

/// Button role of a widget family.
pub trait Button: Widget + CloneButton {
    /// Simulates a click and reports what happened.
    fn press(&self) -> String;
}

/// Checkbox role of a widget family.
pub trait Checkbox: Widget + CloneCheckbox {
    /// Flips the checked state and returns the new value.
    fn toggle(&mut self) -> bool;

    fn is_checked(&self) -> bool;
}

boxed_clone!(
    /// Object-safe deep copy for `Box<dyn Button>`.
    pub trait CloneButton for dyn Button
);

boxed_clone!(
    /// Object-safe deep copy for `Box<dyn Checkbox>`.
    pub trait CloneCheckbox for dyn Checkbox
);

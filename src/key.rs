//! Discriminator keys for keyed factories.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::ProvisionError;

/// Key type accepted by [`KeyedFactory`](crate::KeyedFactory).
///
/// Any comparable, hashable, displayable value works: an enum for a closed
/// variant set, a `String` or `&'static str` for an open one. The `Display`
/// form is what ends up in [`ProvisionError::UnsupportedVariant`] and in log
/// output, so keep it human readable.
///
/// This trait is blanket-implemented; you never implement it by hand.
///
/// # Examples
///
/// ```rust
/// use ferrous_provision::{Discriminator, ShapeKind};
///
/// fn label<K: Discriminator>(key: &K) -> String {
///     key.to_string()
/// }
///
/// assert_eq!(label(&ShapeKind::Circle), "circle");
/// assert_eq!(label(&"plugin-a"), "plugin-a");
/// ```
pub trait Discriminator: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Discriminator for T where T: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// Closed discriminator set for the built-in shape variants.
///
/// Parsing is case-insensitive and ignores surrounding whitespace. Anything
/// outside the set fails with [`ProvisionError::UnsupportedVariant`].
///
/// # Examples
///
/// ```rust
/// use ferrous_provision::{ProvisionError, ShapeKind};
///
/// assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
/// assert_eq!(" RECTANGLE ".parse::<ShapeKind>(), Ok(ShapeKind::Rectangle));
/// assert_eq!(
///     "hexagon".parse::<ShapeKind>(),
///     Err(ProvisionError::UnsupportedVariant("hexagon".to_string())),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    /// Every member of the closed set, in declaration order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Square];

    /// Lowercase label, identical to the `Display` output.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProvisionError::UnsupportedVariant(trimmed.to_string()))
    }
}

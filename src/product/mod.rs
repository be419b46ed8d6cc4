//! Concrete product models.
//!
//! - [`shape`]: simple products selected by a closed discriminator
//! - [`widget`]: role contracts for products that belong to a family
//! - [`vehicle`]: complex products assembled step by step

pub mod shape;
pub mod vehicle;
pub mod widget;

pub use shape::{Circle, CloneShape, Rectangle, Shape, Square, Style};
pub use vehicle::{Car, Engine, Gps, Manual, SoundSystem};
pub use widget::{Button, CloneButton, CloneCheckbox, Checkbox, FamilyTag, Widget};

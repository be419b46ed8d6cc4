//! Shape products dispatched by [`ShapeKind`].

use std::f64::consts::PI;

use crate::key::ShapeKind;
use crate::traits::{boxed_clone, Product};

/// Owned styling sub-object carried by every shape.
///
/// Cloning a shape clones its style, tags included, so a copy can be
/// restyled without touching the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub color: String,
    pub tags: Vec<String>,
}

impl Style {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            tags: Vec::new(),
        }
    }

    /// Appends a tag, builder style.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new("black")
    }
}

/// A drawable product with a geometric area.
///
/// Boxed shapes are cloneable (`Box<dyn Shape>: Clone`); the clone keeps
/// the concrete variant and owns a deep copy of all state.
///
/// # Examples
///
/// ```
/// use ferrous_provision::{Circle, Shape, ShapeKind};
///
/// let original: Box<dyn Shape> = Box::new(Circle::new(2.0));
/// let mut copy = original.clone();
/// copy.style_mut().color = "red".to_string();
///
/// assert_eq!(copy.kind(), ShapeKind::Circle);
/// assert_eq!(original.style().color, "black");
/// ```
pub trait Shape: Product + CloneShape {
    fn kind(&self) -> ShapeKind;

    fn area(&self) -> f64;

    fn style(&self) -> &Style;

    fn style_mut(&mut self) -> &mut Style;

    /// Multiplies every linear dimension by `factor`.
    fn scale(&mut self, factor: f64);
}

boxed_clone!(
    /// Object-safe deep copy for `Box<dyn Shape>`.
    pub trait CloneShape for dyn Shape
);

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub style: Style,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            style: Style::default(),
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Product for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn render(&self) -> String {
        format!("Circle(radius={:.2}, color={})", self.radius, self.style.color)
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn scale(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub style: Style,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            style: Style::default(),
        }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(2.0, 1.0)
    }
}

impl Product for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn render(&self) -> String {
        format!(
            "Rectangle(width={:.2}, height={:.2}, color={})",
            self.width, self.height, self.style.color
        )
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn scale(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub side: f64,
    pub style: Style,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self {
            side,
            style: Style::default(),
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Product for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn render(&self) -> String {
        format!("Square(side={:.2}, color={})", self.side, self.style.color)
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn scale(&mut self, factor: f64) {
        self.side *= factor;
    }
}

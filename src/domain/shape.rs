//! Shape domain model
//!
//! Every shape carries a name, a color and a size. The name is fixed at
//! construction; color and size can change afterwards. Variants add their
//! own fields on top (circles carry a radius).

use serde::Serialize;
use std::fmt;

/// Variant tag for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Plain shape without extra fields
    Concrete,
    /// Circle with a radius
    Circle,
}

impl ShapeKind {
    /// Returns the type name used in the display form
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Concrete => "ConcreteShape",
            ShapeKind::Circle => "Circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A shape with no fields beyond the common ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcreteShape {
    name: String,
    pub color: String,
    pub size: i32,
}

impl ConcreteShape {
    pub fn new(name: impl Into<String>, color: impl Into<String>, size: i32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ConcreteShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConcreteShape(Name: {}, Color: {}, Size: {})",
            self.name, self.color, self.size
        )
    }
}

/// A circle
///
/// Circles serve as prototypes: `clone()` yields an independent copy with
/// the same name, radius, color and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Circle {
    name: String,
    pub radius: i32,
    pub color: String,
    pub size: i32,
}

impl Circle {
    /// Creates a circle with an empty color and zero size
    pub fn new(name: impl Into<String>, radius: i32) -> Self {
        Self {
            name: name.into(),
            radius,
            color: String::new(),
            size: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle(Name: {}, Radius: {}, Color: {}, Size: {})",
            self.name, self.radius, self.color, self.size
        )
    }
}

/// Any shape the registry can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant")]
pub enum Shape {
    #[serde(rename = "ConcreteShape")]
    Concrete(ConcreteShape),
    Circle(Circle),
}

impl Shape {
    /// Returns the variant tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Concrete(_) => ShapeKind::Concrete,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Shape::Concrete(s) => s.name(),
            Shape::Circle(c) => c.name(),
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Shape::Concrete(s) => &s.color,
            Shape::Circle(c) => &c.color,
        }
    }

    pub fn size(&self) -> i32 {
        match self {
            Shape::Concrete(s) => s.size,
            Shape::Circle(c) => c.size,
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        match self {
            Shape::Concrete(s) => s.color = color,
            Shape::Circle(c) => c.color = color,
        }
    }

    pub fn set_size(&mut self, size: i32) {
        match self {
            Shape::Concrete(s) => s.size = size,
            Shape::Circle(c) => c.size = size,
        }
    }

    /// Returns the circle if this shape is one
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Concrete(_) => None,
        }
    }

    /// Human-readable form, identical to `Display`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Concrete(s) => s.fmt(f),
            Shape::Circle(c) => c.fmt(f),
        }
    }
}

impl From<ConcreteShape> for Shape {
    fn from(shape: ConcreteShape) -> Self {
        Shape::Concrete(shape)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

//! Fluent builder for plain shapes

use super::shape::{ConcreteShape, Shape};

/// Accumulates color and size before producing a [`ConcreteShape`]
///
/// Setters can be called in any order, any number of times. Unset fields
/// fall back to an empty color and a zero size. The builder is not consumed
/// by [`build`](Self::build), so it can stamp out several shapes.
///
/// ```
/// use shape_patterns::domain::ShapeBuilder;
///
/// let shape = ShapeBuilder::new("Circle").color("Red").size(5).build();
/// assert_eq!(shape.to_string(), "ConcreteShape(Name: Circle, Color: Red, Size: 5)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    name: String,
    color: String,
    size: i32,
}

impl ShapeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = color.into();
        self
    }

    pub fn size(&mut self, size: i32) -> &mut Self {
        self.size = size;
        self
    }

    /// Produces a new shape from the current state
    pub fn build(&self) -> Shape {
        ConcreteShape::new(self.name.clone(), self.color.clone(), self.size).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShapeKind;

    #[test]
    fn builds_configured_shape() {
        let shape = ShapeBuilder::new("Circle").color("Red").size(5).build();

        assert_eq!(shape.kind(), ShapeKind::Concrete);
        assert_eq!(
            shape.to_string(),
            "ConcreteShape(Name: Circle, Color: Red, Size: 5)"
        );
    }

    #[test]
    fn setter_order_does_not_matter() {
        let a = ShapeBuilder::new("A").color("Red").size(5).build();
        let b = ShapeBuilder::new("A").size(5).color("Red").build();
        assert_eq!(a, b);
    }

    #[test]
    fn unset_fields_use_defaults() {
        let shape = ShapeBuilder::new("Bare").build();
        assert_eq!(shape.color(), "");
        assert_eq!(shape.size(), 0);
        assert_eq!(
            shape.to_string(),
            "ConcreteShape(Name: Bare, Color: , Size: 0)"
        );
    }

    #[test]
    fn last_setter_call_wins() {
        let shape = ShapeBuilder::new("S").size(1).size(2).color("a").color("b").build();
        assert_eq!(shape.size(), 2);
        assert_eq!(shape.color(), "b");
    }

    #[test]
    fn builder_is_reusable() {
        let mut builder = ShapeBuilder::new("Tile");
        builder.color("Gray");

        let first = builder.build();
        let second = builder.size(3).build();

        assert_eq!(first.size(), 0);
        assert_eq!(second.size(), 3);
        assert_eq!(first.color(), second.color());
    }
}

//! Factory method interface
//!
//! Callers hold a `dyn ShapeFactory` and ask it for shapes by name; which
//! variant comes out is decided by the factory, not the caller.

use super::shape::{Circle, ConcreteShape, Shape, ShapeKind};

/// Creates shapes of one variant
pub trait ShapeFactory {
    /// Creates a new shape with the given name
    fn create_shape(&self, name: &str) -> Shape;

    /// The variant this factory produces
    fn kind(&self) -> ShapeKind;
}

/// Produces circles with a zero radius
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleFactory;

impl ShapeFactory for CircleFactory {
    fn create_shape(&self, name: &str) -> Shape {
        Circle::new(name, 0).into()
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

/// Produces plain shapes with an empty color and zero size
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteShapeFactory;

impl ShapeFactory for ConcreteShapeFactory {
    fn create_shape(&self, name: &str) -> Shape {
        ConcreteShape::new(name, "", 0).into()
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Concrete
    }
}

/// Returns the factory for a variant
pub fn factory_for(kind: ShapeKind) -> Box<dyn ShapeFactory> {
    match kind {
        ShapeKind::Concrete => Box::new(ConcreteShapeFactory),
        ShapeKind::Circle => Box::new(CircleFactory),
    }
}

//! Domain models for shape-patterns
//!
//! Shapes and the creational helpers around them, without any I/O concerns
//! beyond the registry's line printer.

mod shape;
mod builder;
mod factory;
mod manager;

pub use shape::{Circle, ConcreteShape, Shape, ShapeKind};
pub use builder::ShapeBuilder;
pub use factory::{factory_for, CircleFactory, ConcreteShapeFactory, ShapeFactory};
pub use manager::ShapeManager;

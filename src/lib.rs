//! shape-patterns - creational design patterns over a small shape model
//!
//! Shapes are built with a fluent [`ShapeBuilder`], copied from a prototype
//! with `Clone`, produced through a [`ShapeFactory`], and collected in a
//! [`ShapeManager`] registry that prints them in registration order.

pub mod domain;
pub mod config;
pub mod cli;

pub use domain::{Circle, ConcreteShape, Shape, ShapeBuilder, ShapeFactory, ShapeKind, ShapeManager};

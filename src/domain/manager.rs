//! Shape registry
//!
//! [`ShapeManager`] keeps shapes in registration order. Code that owns its
//! registry constructs one with [`ShapeManager::new`] and passes it by
//! reference; [`ShapeManager::instance`] exposes a single process-wide
//! registry, created on first access and kept until exit.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use super::shape::Shape;

static INSTANCE: OnceLock<Mutex<ShapeManager>> = OnceLock::new();

/// Ordered collection of registered shapes
#[derive(Debug, Default)]
pub struct ShapeManager {
    shapes: Vec<Arc<Shape>>,
}

impl ShapeManager {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry
    ///
    /// Every call returns the same instance.
    pub fn instance() -> &'static Mutex<ShapeManager> {
        INSTANCE.get_or_init(|| Mutex::new(ShapeManager::new()))
    }

    /// Appends a shape; duplicates are kept
    pub fn add_shape(&mut self, shape: impl Into<Arc<Shape>>) {
        self.shapes.push(shape.into());
    }

    /// Registered shapes in insertion order
    pub fn shapes(&self) -> &[Arc<Shape>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Display form of every shape, in insertion order
    pub fn descriptions(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.describe()).collect()
    }

    /// Writes one line per shape
    pub fn write_shapes<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for shape in &self.shapes {
            writeln!(out, "{}", shape)?;
        }
        Ok(())
    }

    /// Prints every shape to stdout; write failures are ignored
    pub fn list_shapes(&self) {
        let _ = self.write_shapes(&mut io::stdout().lock());
    }
}

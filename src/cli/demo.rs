//! The pattern walkthrough run by `shapes`
//!
//! Builds one shape per creational pattern and registers them in order:
//! builder, prototype clone, factory method.

use crate::domain::{Circle, CircleFactory, Shape, ShapeBuilder, ShapeFactory, ShapeManager};

use super::output::Output;

/// Creates the three demo shapes and adds them to `manager`
pub fn populate(manager: &mut ShapeManager, output: &Output) {
    let built = ShapeBuilder::new("Circle").color("Red").size(5).build();
    let prototype = Circle::new("Circle", 5);
    let cloned = prototype.clone();
    let factory: Box<dyn ShapeFactory> = Box::new(CircleFactory);
    let manufactured = factory.create_shape("New Circle");

    if output.is_verbose() {
        output.verbose_ctx("builder", &format!("Built {}", built));
        output.verbose_ctx(
            "prototype",
            &format!("Cloned {} into {}", prototype, cloned),
        );
        output.verbose_ctx(
            "factory",
            &format!("{} factory created {}", factory.kind(), manufactured),
        );
    }

    manager.add_shape(built);
    manager.add_shape(Shape::from(cloned));
    manager.add_shape(manufactured);

    if output.is_verbose() {
        output.verbose_ctx("manager", &format!("Registry holds {} shapes", manager.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn populates_in_pattern_order() {
        let mut manager = ShapeManager::new();
        populate(&mut manager, &Output::new(OutputFormat::Text, false));

        assert_eq!(
            manager.descriptions(),
            vec![
                "ConcreteShape(Name: Circle, Color: Red, Size: 5)",
                "Circle(Name: Circle, Radius: 5, Color: , Size: 0)",
                "Circle(Name: New Circle, Radius: 0, Color: , Size: 0)",
            ]
        );
    }

    #[test]
    fn repeated_runs_append() {
        let mut manager = ShapeManager::new();
        let output = Output::new(OutputFormat::Text, false);
        populate(&mut manager, &output);
        populate(&mut manager, &output);

        assert_eq!(manager.len(), 6);
    }
}

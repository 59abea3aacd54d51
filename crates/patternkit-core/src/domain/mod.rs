//! Core domain layer for patternkit.
//!
//! Every pattern lives here as plain types and traits. Nothing in this module
//! performs I/O or logs; operations return the lines a demo would print and
//! the application layer decides where they go.
//!
//! ## Layout
//!
//! - [`creational`]: HTML and person builders, point factory, drink machine
//! - [`structural`]: TV and message bridges, composite, decorator
//! - [`behavioral`]: salary observer
//! - [`principles`]: one module per SOLID principle
//! - [`neural`]: neurons and layers behind one connect operation

pub mod behavioral;
pub mod creational;
pub mod error;
pub mod neural;
pub mod principles;
pub mod structural;
pub mod value_objects;

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Color, DrinkKind, Relationship, Size, Topping};

pub use behavioral::observer::{EmployeeBonus, ManagerBonus, ObserverId, Salary, SalaryObserver};
pub use creational::{
    drinks::{DRINK_REGISTRY, HotDrink, HotDrinkFactory, HotDrinkMachine, Preparation},
    html::{HtmlBuilder, HtmlElement},
    person::{PersonBuilder, PersonInfoBuilder, PersonJobBuilder},
    point::{Point, PointFactory},
};
pub use neural::{Connectable, Network, NeuronId, NeuronLayer};
pub use structural::{
    bridge::{FavouriteRemote, LedTv, Remote, RemoteControl},
    composite::GraphicObject,
    decorator::{Pizza, PizzaExt, PlainPizza, ToppingDecorator},
    messaging::{Delivery, Message, MessageRoute},
};

#[cfg(test)]
mod tests {
    use super::*;
    use principles::open_closed::{
        BetterFilter, ColorSpecification, Filter, Product, SizeSpecification, SpecificationExt,
    };

    // ========================================================================
    // Cross-pattern checks
    // ========================================================================

    #[test]
    fn and_filter_is_ordered_intersection() {
        let products = vec![
            Product::new("Apple", Color::Green, Size::Small).unwrap(),
            Product::new("Tree", Color::Green, Size::Large).unwrap(),
            Product::new("House", Color::Blue, Size::Large).unwrap(),
            Product::new("Leaf", Color::Green, Size::Large).unwrap(),
        ];
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);

        let by_green: Vec<&Product> = BetterFilter.filter(&products, &green).collect();
        let by_large: Vec<&Product> = BetterFilter.filter(&products, &large).collect();
        let intersection: Vec<&Product> = by_green
            .iter()
            .copied()
            .filter(|p| by_large.contains(p))
            .collect();

        let both = green.and(large);
        let combined: Vec<&Product> = BetterFilter.filter(&products, &both).collect();
        assert_eq!(combined, intersection);
        assert_eq!(
            combined.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["Tree", "Leaf"]
        );
    }

    #[test]
    fn composite_depth_matches_distinct_marker_widths() {
        let drawing = GraphicObject::group("My Drawing")
            .with(GraphicObject::square(Color::Red))
            .with(
                GraphicObject::new()
                    .with(GraphicObject::circle(Color::Blue))
                    .with(GraphicObject::new().with(GraphicObject::square(Color::Yellow))),
            );

        let mut widths: Vec<usize> = drawing
            .lines()
            .iter()
            .map(|line| line.chars().take_while(|c| *c == '*').count())
            .collect();
        widths.sort_unstable();
        widths.dedup();
        assert_eq!(widths.len(), drawing.depth());
    }

    #[test]
    fn every_drink_kind_can_be_made() {
        let machine = HotDrinkMachine::new();
        for kind in DrinkKind::ALL {
            assert!(machine.make_drink(kind, 1).is_ok());
        }
        assert_eq!(DRINK_REGISTRY.len(), DrinkKind::ALL.len());
    }
}

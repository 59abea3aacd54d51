//! Decorator: pizzas wrapped in toppings.

use crate::domain::value_objects::Topping;

pub trait Pizza {
    /// Human-readable description of everything on the pizza.
    fn make(&self) -> String;
}

impl<P: Pizza + ?Sized> Pizza for Box<P> {
    fn make(&self) -> String {
        (**self).make()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPizza;

impl Pizza for PlainPizza {
    fn make(&self) -> String {
        "Plain Pizza".into()
    }
}

/// Adds one topping to whatever pizza it wraps.
#[derive(Debug, Clone)]
pub struct ToppingDecorator<P> {
    pizza: P,
    topping: Topping,
}

impl<P: Pizza> ToppingDecorator<P> {
    pub fn new(pizza: P, topping: Topping) -> Self {
        Self { pizza, topping }
    }

    pub fn topping(&self) -> Topping {
        self.topping
    }

    /// Peel the topping off again.
    pub fn into_inner(self) -> P {
        self.pizza
    }
}

impl<P: Pizza> Pizza for ToppingDecorator<P> {
    fn make(&self) -> String {
        let mut made = self.pizza.make();
        made.push_str(self.topping.suffix());
        made
    }
}

/// `pizza.with(Topping::Egg)` instead of `ToppingDecorator::new(..)`.
pub trait PizzaExt: Pizza + Sized {
    fn with(self, topping: Topping) -> ToppingDecorator<Self> {
        ToppingDecorator::new(self, topping)
    }
}

impl<P: Pizza> PizzaExt for P {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pizza() {
        assert_eq!(PlainPizza.make(), "Plain Pizza");
    }

    #[test]
    fn decorators_stack_in_order() {
        let pizza = PlainPizza.with(Topping::Chicken).with(Topping::Egg);
        assert_eq!(pizza.make(), "Plain Pizza, Chicken added, Egg added");
        assert_eq!(pizza.topping(), Topping::Egg);
        assert_eq!(
            pizza.into_inner().make(),
            "Plain Pizza, Chicken added"
        );
    }

    #[test]
    fn boxed_pizzas_decorate_too() {
        let boxed: Box<dyn Pizza> = Box::new(PlainPizza.with(Topping::Fish));
        assert_eq!(
            boxed.with(Topping::Vegetables).make(),
            "Plain Pizza, Fish added, Vegetables added"
        );
    }
}

//! Abstract factory: a hot-drink machine keyed by drink kind.
//!
//! # Registry
//!
//! The machine is populated from [`DRINK_REGISTRY`], a static table mapping
//! each [`DrinkKind`] to a constructor for its factory. No lookup by type
//! name happens anywhere.
//!
//! # Adding a New Drink
//!
//! 1. Add a variant to `DrinkKind` in `value_objects.rs`
//! 2. Implement `HotDrink` and `HotDrinkFactory` for it here
//! 3. Add one [`DrinkDef`] entry to [`DRINK_REGISTRY`]

use std::fmt;

use crate::domain::{error::DomainError, value_objects::DrinkKind};

// ── Products ──────────────────────────────────────────────────────────────────

pub trait HotDrink {
    fn kind(&self) -> DrinkKind;
    fn consume(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Tea;

impl HotDrink for Tea {
    fn kind(&self) -> DrinkKind {
        DrinkKind::Tea
    }

    fn consume(&self) -> String {
        "This tea is nice but I'd prefer it with milk.".into()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Coffee;

impl HotDrink for Coffee {
    fn kind(&self) -> DrinkKind {
        DrinkKind::Coffee
    }

    fn consume(&self) -> String {
        "This coffee is sensational!".into()
    }
}

// ── Factories ─────────────────────────────────────────────────────────────────

/// A prepared drink plus the line describing how it was made.
pub struct Preparation {
    pub steps: String,
    pub drink: Box<dyn HotDrink>,
}

impl fmt::Debug for Preparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preparation")
            .field("steps", &self.steps)
            .field("drink", &self.drink.kind())
            .finish()
    }
}

pub trait HotDrinkFactory {
    fn prepare(&self, amount_ml: u32) -> Preparation;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TeaFactory;

impl HotDrinkFactory for TeaFactory {
    fn prepare(&self, amount_ml: u32) -> Preparation {
        Preparation {
            steps: format!(
                "Put in a tea bag, boil water, pour {amount_ml} ml, add lemon, enjoy!"
            ),
            drink: Box::new(Tea),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CoffeeFactory;

impl HotDrinkFactory for CoffeeFactory {
    fn prepare(&self, amount_ml: u32) -> Preparation {
        Preparation {
            steps: format!(
                "Grind some beans, boil water, pour {amount_ml} ml, add cream and sugar, enjoy!"
            ),
            drink: Box::new(Coffee),
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// One entry of the static drink registry.
#[derive(Debug, Clone, Copy)]
pub struct DrinkDef {
    pub kind: DrinkKind,
    pub factory: fn() -> Box<dyn HotDrinkFactory>,
}

fn tea_factory() -> Box<dyn HotDrinkFactory> {
    Box::new(TeaFactory)
}

fn coffee_factory() -> Box<dyn HotDrinkFactory> {
    Box::new(CoffeeFactory)
}

/// Single source of truth for which factory makes which drink.
pub static DRINK_REGISTRY: &[DrinkDef] = &[
    DrinkDef {
        kind: DrinkKind::Tea,
        factory: tea_factory,
    },
    DrinkDef {
        kind: DrinkKind::Coffee,
        factory: coffee_factory,
    },
];

// ── Machine ───────────────────────────────────────────────────────────────────

/// Holds one factory per drink kind.
pub struct HotDrinkMachine {
    factories: Vec<(DrinkKind, Box<dyn HotDrinkFactory>)>,
}

impl HotDrinkMachine {
    /// A machine stocked with every registered drink.
    pub fn new() -> Self {
        let mut machine = Self::empty();
        for def in DRINK_REGISTRY {
            machine.register(def.kind, (def.factory)());
        }
        machine
    }

    /// A machine with no factories at all.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Install or replace the factory for `kind`.
    pub fn register(&mut self, kind: DrinkKind, factory: Box<dyn HotDrinkFactory>) {
        match self.factories.iter_mut().find(|(k, _)| *k == kind) {
            Some(slot) => slot.1 = factory,
            None => self.factories.push((kind, factory)),
        }
    }

    /// Registered kinds in registration order.
    pub fn available(&self) -> Vec<DrinkKind> {
        self.factories.iter().map(|(k, _)| *k).collect()
    }

    pub fn make_drink(&self, kind: DrinkKind, amount_ml: u32) -> Result<Preparation, DomainError> {
        self.factories
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, factory)| factory.prepare(amount_ml))
            .ok_or_else(|| DomainError::UnknownDrink {
                drink: kind.to_string(),
            })
    }
}

impl Default for HotDrinkMachine {
    fn default() -> Self {
        Self::new()
    }
}

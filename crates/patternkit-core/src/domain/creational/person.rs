//! Fluent builder split across capability levels.
//!
//! Each level is a trait whose methods take and return `Self`. A concrete
//! builder opts into every level it supports, so a chain like
//! `.works_as_a(..).called(..)` stays on the concrete type no matter which
//! level declared the method. [`PersonBuilder::build`] is the terminal step.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub position: String,
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::new()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name : {}, Position : {}", self.name, self.position)
    }
}

/// Access to the record under construction; every level builds on this.
pub trait BuildsPerson: Sized {
    fn person_mut(&mut self) -> &mut Person;
}

/// Level 1: personal information.
pub trait PersonInfoBuilder: BuildsPerson {
    fn called(mut self, name: impl Into<String>) -> Self {
        self.person_mut().name = name.into();
        self
    }
}

/// Level 2: job information, on top of level 1.
pub trait PersonJobBuilder: PersonInfoBuilder {
    fn works_as_a(mut self, position: impl Into<String>) -> Self {
        self.person_mut().position = position.into();
        self
    }
}

/// The most-derived builder.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Person {
        self.person
    }
}

impl BuildsPerson for PersonBuilder {
    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

impl PersonInfoBuilder for PersonBuilder {}
impl PersonJobBuilder for PersonBuilder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_chain() {
        let me = Person::builder().called("Amal").works_as_a("Engineer").build();
        assert_eq!(me.to_string(), "Name : Amal, Position : Engineer");
    }

    #[test]
    fn call_order_does_not_matter() {
        let a = Person::builder().called("Dinesh").works_as_a("Chef").build();
        let b = Person::builder().works_as_a("Chef").called("Dinesh").build();
        assert_eq!(a, b);
    }

    #[test]
    fn last_write_wins_per_field() {
        let p = Person::builder()
            .called("first")
            .works_as_a("intern")
            .called("second")
            .build();
        assert_eq!(p.name, "second");
        assert_eq!(p.position, "intern");
    }
}

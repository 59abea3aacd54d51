//! Dependency Inversion: research that depends on an abstraction.
//!
//! [`Relationships`] is the low-level store. [`Research`] is the high-level
//! module and only sees [`RelationshipBrowser`], so the store's layout can
//! change without touching it.

use crate::domain::{error::DomainError, value_objects::Relationship};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingName { entity: "person" });
        }
        Ok(Self { name })
    }
}

/// The abstraction both layers depend on.
pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person>;
}

/// Low-level store of `(from, relation, to)` triples.
#[derive(Debug, Default, Clone)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both directions of a parent/child link.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.relations
            .iter()
            .filter(|(from, rel, _)| from.name == name && *rel == Relationship::Parent)
            .map(|(_, _, to)| to.clone())
            .collect()
    }
}

/// High-level module.
pub struct Research<'a> {
    browser: &'a dyn RelationshipBrowser,
}

impl<'a> Research<'a> {
    pub fn new(browser: &'a dyn RelationshipBrowser) -> Self {
        Self { browser }
    }

    /// One line per child of `parent`.
    pub fn children_report(&self, parent: &str) -> Vec<String> {
        self.browser
            .find_all_children_of(parent)
            .into_iter()
            .map(|child| format!("{parent} has a child called {}", child.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> Relationships {
        let john = Person::new("John").unwrap();
        let chris = Person::new("Chris").unwrap();
        let matt = Person::new("Matt").unwrap();

        let mut rels = Relationships::new();
        rels.add_parent_and_child(&john, &chris);
        rels.add_parent_and_child(&john, &matt);
        rels
    }

    #[test]
    fn links_are_stored_both_ways() {
        assert_eq!(family().len(), 4);
    }

    #[test]
    fn research_reports_children_in_insertion_order() {
        let rels = family();
        assert_eq!(
            Research::new(&rels).children_report("John"),
            [
                "John has a child called Chris",
                "John has a child called Matt"
            ]
        );
    }

    #[test]
    fn research_works_against_any_browser() {
        struct Fixed;
        impl RelationshipBrowser for Fixed {
            fn find_all_children_of(&self, _name: &str) -> Vec<Person> {
                vec![Person::new("Ada").unwrap()]
            }
        }
        assert_eq!(
            Research::new(&Fixed).children_report("Byron"),
            ["Byron has a child called Ada"]
        );
    }

    #[test]
    fn blank_person_name_is_rejected() {
        assert!(Person::new("").is_err());
    }
}

//! Domain value objects: Color, Size, Relationship, DrinkKind, Topping.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file only defines the types, their string representations, and
//! their `FromStr` parsers. Behaviour lives with the patterns that use them.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add it to the `ALL` table if the type has one

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Color ────────────────────────────────────────────────────────────────────

/// Product and graphic colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }

    /// Capitalised form used in printed drawings ("Red Square").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "yellow" => Ok(Self::Yellow),
            other => Err(DomainError::UnknownValue {
                kind: "color",
                value: other.into(),
            }),
        }
    }
}

// ── Size ─────────────────────────────────────────────────────────────────────

/// Product size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

impl Size {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(Self::Small),
            "medium" | "m" => Ok(Self::Medium),
            "large" | "l" => Ok(Self::Large),
            "huge" | "yuge" | "xl" => Ok(Self::Huge),
            other => Err(DomainError::UnknownValue {
                kind: "size",
                value: other.into(),
            }),
        }
    }
}

// ── Relationship ─────────────────────────────────────────────────────────────

/// Family relation between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

impl Relationship {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Sibling => "sibling",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DrinkKind ────────────────────────────────────────────────────────────────

/// Drinks a hot-drink machine knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkKind {
    Tea,
    Coffee,
}

impl DrinkKind {
    /// Every drink kind, in menu order.
    pub const ALL: [DrinkKind; 2] = [Self::Tea, Self::Coffee];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tea => "tea",
            Self::Coffee => "coffee",
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tea" => Ok(Self::Tea),
            "coffee" => Ok(Self::Coffee),
            other => Err(DomainError::UnknownDrink {
                drink: other.into(),
            }),
        }
    }
}

// ── Topping ──────────────────────────────────────────────────────────────────

/// Pizza toppings available as decorators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Chicken,
    Vegetables,
    Fish,
    Egg,
}

impl Topping {
    pub const ALL: [Topping; 4] = [Self::Chicken, Self::Vegetables, Self::Fish, Self::Egg];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chicken => "chicken",
            Self::Vegetables => "vegetables",
            Self::Fish => "fish",
            Self::Egg => "egg",
        }
    }

    /// Text appended to the pizza description.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Chicken => ", Chicken added",
            Self::Vegetables => ", Vegetables added",
            Self::Fish => ", Fish added",
            Self::Egg => ", Egg added",
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topping {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chicken" => Ok(Self::Chicken),
            "vegetables" | "veg" => Ok(Self::Vegetables),
            "fish" => Ok(Self::Fish),
            "egg" => Ok(Self::Egg),
            other => Err(DomainError::UnknownValue {
                kind: "topping",
                value: other.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn size_accepts_yuge() {
        assert_eq!("yuge".parse::<Size>().unwrap(), Size::Huge);
    }

    #[test]
    fn drink_parse_error_is_unknown_drink() {
        assert!(matches!(
            "cocoa".parse::<DrinkKind>(),
            Err(DomainError::UnknownDrink { .. })
        ));
    }

    #[test]
    fn topping_display_roundtrips_through_parse() {
        for topping in Topping::ALL {
            assert_eq!(topping.to_string().parse::<Topping>().unwrap(), topping);
        }
    }
}

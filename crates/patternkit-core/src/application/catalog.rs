//! Demo catalog.
//!
//! # Registry
//!
//! Every runnable demo is described exactly once by a [`DemoDef`] in
//! [`DEMO_REGISTRY`]. Listing, name lookup and `run --all` all read from the
//! table, in table order.
//!
//! # Adding a New Demo
//!
//! 1. Add a variant to [`DemoKind`]
//! 2. Add one [`DemoDef`] entry to [`DEMO_REGISTRY`]
//! 3. Add a match arm in `DemoService::run`

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::domain::DomainError;

/// One variant per runnable demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    TvBridge,
    MessageBridge,
    Specification,
    HtmlBuilder,
    PersonBuilder,
    PointFactory,
    DrinkFactory,
    Composite,
    Observer,
    Decorator,
    SingleResponsibility,
    Liskov,
    InterfaceSegregation,
    DependencyInversion,
    NeuralNetwork,
}

impl DemoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TvBridge => "tv-bridge",
            Self::MessageBridge => "message-bridge",
            Self::Specification => "specification",
            Self::HtmlBuilder => "html-builder",
            Self::PersonBuilder => "person-builder",
            Self::PointFactory => "point-factory",
            Self::DrinkFactory => "drink-factory",
            Self::Composite => "composite",
            Self::Observer => "observer",
            Self::Decorator => "decorator",
            Self::SingleResponsibility => "single-responsibility",
            Self::Liskov => "liskov",
            Self::InterfaceSegregation => "interface-segregation",
            Self::DependencyInversion => "dependency-inversion",
            Self::NeuralNetwork => "neural-network",
        }
    }

    /// Registry entry for this demo.
    pub fn def(self) -> Option<&'static DemoDef> {
        DEMO_REGISTRY.iter().find(|d| d.kind == self)
    }

    /// All demos in registry order.
    pub fn all() -> impl Iterator<Item = DemoKind> {
        DEMO_REGISTRY.iter().map(|d| d.kind)
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemoKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        DEMO_REGISTRY
            .iter()
            .find(|d| d.kind.as_str() == wanted || d.aliases.iter().any(|a| *a == wanted))
            .map(|d| d.kind)
            .ok_or_else(|| DomainError::UnknownValue {
                kind: "demo",
                value: s.to_string(),
            })
    }
}

/// Pattern family a demo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoFamily {
    Creational,
    Structural,
    Behavioral,
    Principle,
}

impl DemoFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creational => "creational",
            Self::Structural => "structural",
            Self::Behavioral => "behavioral",
            Self::Principle => "principle",
        }
    }
}

impl fmt::Display for DemoFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct DemoDef {
    pub kind: DemoKind,
    pub family: DemoFamily,
    /// Extra names accepted on the command line.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Single source of truth for the demo catalog.
pub static DEMO_REGISTRY: &[DemoDef] = &[
    DemoDef {
        kind: DemoKind::TvBridge,
        family: DemoFamily::Structural,
        aliases: &["bridge", "tv"],
        description: "Remote controls driving Samsung, Sony and Hitachi TVs",
    },
    DemoDef {
        kind: DemoKind::MessageBridge,
        family: DemoFamily::Structural,
        aliases: &["message", "messaging"],
        description: "Long and short messages over SMS and email senders",
    },
    DemoDef {
        kind: DemoKind::Specification,
        family: DemoFamily::Principle,
        aliases: &["open-closed", "ocp", "filter"],
        description: "Product filtering through composable specifications",
    },
    DemoDef {
        kind: DemoKind::HtmlBuilder,
        family: DemoFamily::Creational,
        aliases: &["html", "builder"],
        description: "Building and rendering an HTML element tree",
    },
    DemoDef {
        kind: DemoKind::PersonBuilder,
        family: DemoFamily::Creational,
        aliases: &["person", "fluent-builder"],
        description: "Fluent builder split across two capability levels",
    },
    DemoDef {
        kind: DemoKind::PointFactory,
        family: DemoFamily::Creational,
        aliases: &["point", "factory"],
        description: "Cartesian and polar points from named factory methods",
    },
    DemoDef {
        kind: DemoKind::DrinkFactory,
        family: DemoFamily::Creational,
        aliases: &["drink", "drinks", "abstract-factory"],
        description: "Hot-drink machine backed by a static factory registry",
    },
    DemoDef {
        kind: DemoKind::Composite,
        family: DemoFamily::Structural,
        aliases: &["graphics"],
        description: "Drawing of shapes and groups printed depth first",
    },
    DemoDef {
        kind: DemoKind::Observer,
        family: DemoFamily::Behavioral,
        aliases: &["salary"],
        description: "Bonuses recomputed whenever a salary changes",
    },
    DemoDef {
        kind: DemoKind::Decorator,
        family: DemoFamily::Structural,
        aliases: &["pizza"],
        description: "Pizza toppings stacked as decorators",
    },
    DemoDef {
        kind: DemoKind::SingleResponsibility,
        family: DemoFamily::Principle,
        aliases: &["srp", "journal"],
        description: "A journal that leaves saving to someone else",
    },
    DemoDef {
        kind: DemoKind::Liskov,
        family: DemoFamily::Principle,
        aliases: &["lsp"],
        description: "Rectangles, squares and a surprising area",
    },
    DemoDef {
        kind: DemoKind::InterfaceSegregation,
        family: DemoFamily::Principle,
        aliases: &["isp", "machines"],
        description: "One fat machine interface versus small role traits",
    },
    DemoDef {
        kind: DemoKind::DependencyInversion,
        family: DemoFamily::Principle,
        aliases: &["dip", "research"],
        description: "Research that depends on a relationship abstraction",
    },
    DemoDef {
        kind: DemoKind::NeuralNetwork,
        family: DemoFamily::Structural,
        aliases: &["neural", "neurons"],
        description: "Neurons and layers joined by one connect operation",
    },
];

/// Serializable view of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoInfo {
    pub name: &'static str,
    pub family: DemoFamily,
    pub description: &'static str,
}

impl From<&DemoDef> for DemoInfo {
    fn from(def: &DemoDef) -> Self {
        Self {
            name: def.kind.as_str(),
            family: def.family,
            description: def.description,
        }
    }
}

/// The whole catalog, in registry order.
pub fn catalog() -> Vec<DemoInfo> {
    DEMO_REGISTRY.iter().map(DemoInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_kind_has_exactly_one_entry() {
        let kinds: HashSet<DemoKind> = DemoKind::all().collect();
        assert_eq!(kinds.len(), DEMO_REGISTRY.len());
        assert_eq!(DEMO_REGISTRY.len(), 15);
    }

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for def in DEMO_REGISTRY {
            assert!(seen.insert(def.kind.as_str()), "{} repeated", def.kind);
            for alias in def.aliases {
                assert!(seen.insert(*alias), "alias {alias} repeated");
            }
        }
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("observer".parse::<DemoKind>().unwrap(), DemoKind::Observer);
        assert_eq!("OCP".parse::<DemoKind>().unwrap(), DemoKind::Specification);
        assert_eq!(
            "html_builder".parse::<DemoKind>().unwrap(),
            DemoKind::HtmlBuilder
        );
        assert!(matches!(
            "visitor".parse::<DemoKind>(),
            Err(DomainError::UnknownValue { kind: "demo", .. })
        ));
    }

    #[test]
    fn round_trips_through_display() {
        for kind in DemoKind::all() {
            assert_eq!(kind.to_string().parse::<DemoKind>().unwrap(), kind);
            assert_eq!(kind.def().map(|d| d.kind), Some(kind));
        }
    }

    #[test]
    fn catalog_follows_registry_order() {
        let names: Vec<&str> = catalog().iter().map(|info| info.name).collect();
        assert_eq!(names.first(), Some(&"tv-bridge"));
        assert_eq!(names.last(), Some(&"neural-network"));
        assert_eq!(catalog()[8].family, DemoFamily::Behavioral);
    }
}

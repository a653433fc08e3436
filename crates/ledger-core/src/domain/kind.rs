//! Concrete item kinds carrying type-specific measurements.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::ItemCategory;

/// Concrete item kind.
///
/// Serialized internally tagged: `{"class":"ball","color":"red","radius":1.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum ItemKind {
    Ball {
        color: String,
        radius: f64,
    },
    Box {
        color: String,
        height: f64,
        depth: f64,
        width: f64,
    },
    Dog {
        breed: String,
    },
}

impl ItemKind {
    /// Color of a solid; animals have none.
    pub fn color(&self) -> Option<&str> {
        match self {
            ItemKind::Ball { color, .. } | ItemKind::Box { color, .. } => Some(color.as_str()),
            ItemKind::Dog { .. } => None,
        }
    }

    /// Number of flat faces of a solid.
    pub fn sides(&self) -> Option<u32> {
        match self {
            ItemKind::Ball { .. } => Some(0),
            ItemKind::Box { .. } => Some(6),
            ItemKind::Dog { .. } => None,
        }
    }

    pub fn volume(&self) -> Option<f64> {
        match self {
            ItemKind::Ball { radius, .. } => Some(4.0 / 3.0 * PI * radius.powi(3)),
            ItemKind::Box {
                height,
                depth,
                width,
                ..
            } => Some(height * depth * width),
            ItemKind::Dog { .. } => None,
        }
    }
}

impl ItemCategory for ItemKind {
    type Class = ItemClass;

    fn class(&self) -> ItemClass {
        match self {
            ItemKind::Ball { .. } => ItemClass::Ball,
            ItemKind::Box { .. } => ItemClass::Box,
            ItemKind::Dog { .. } => ItemClass::Dog,
        }
    }
}

/// Discriminant of [`ItemKind`]; the grouping key for kind-based registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    Ball,
    Box,
    Dog,
}

impl ItemClass {
    pub const ALL: [ItemClass; 3] = [ItemClass::Ball, ItemClass::Box, ItemClass::Dog];

    pub fn family(self) -> ItemFamily {
        match self {
            ItemClass::Ball | ItemClass::Box => ItemFamily::Solid,
            ItemClass::Dog => ItemFamily::Animal,
        }
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemClass::Ball => "Ball",
            ItemClass::Box => "Box",
            ItemClass::Dog => "Dog",
        };
        f.write_str(name)
    }
}

/// Parent grouping of item classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFamily {
    Solid,
    Animal,
}

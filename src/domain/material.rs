//! Materials - immutable material definitions and grid-resident cells
//!
//! MaterialTraits is loaded once per material and shared (Arc) by every cell
//! stamped out of it. Cell adds the per-instance state: position and inertia.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Material category - selects the movement rule
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Solid,
    #[default]
    Grain,
    Liquid,
    Gas,
}

impl Category {
    /// Map a config category code (`s`, `gr`, `l`, `g`).
    /// Unrecognized codes fall back to Grain.
    pub fn from_code(code: &str) -> Self {
        match code {
            "s" => Category::Solid,
            "gr" => Category::Grain,
            "l" => Category::Liquid,
            "g" => Category::Gas,
            _ => Category::Grain,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::Solid => "s",
            Category::Grain => "gr",
            Category::Liquid => "l",
            Category::Gas => "g",
        }
    }

    /// Vertical flow sign: +1 falls, -1 rises, 0 for categories that don't flow
    #[inline]
    pub fn gravity(self) -> i32 {
        match self {
            Category::Liquid => 1,
            Category::Gas => -1,
            Category::Solid | Category::Grain => 0,
        }
    }

    #[inline]
    pub fn is_fluid(self) -> bool {
        matches!(self, Category::Liquid | Category::Gas)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Solid => "solid",
            Category::Grain => "grain",
            Category::Liquid => "liquid",
            Category::Gas => "gas",
        };
        write!(f, "{}", name)
    }
}

/// RGB color, 0-255 per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b])
    }

    /// ABGR packed (little-endian bytes [R, G, B, A]) for direct canvas copy
    #[inline]
    pub fn to_abgr(self) -> u32 {
        let [r, g, b] = self.0;
        0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
    }
}

/// Immutable description of one material
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTraits {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub density: i32,
    #[serde(default)]
    pub color: Color,
}

impl MaterialTraits {
    pub fn new(name: impl Into<String>, category: Category, density: i32, color: Color) -> Self {
        Self {
            name: name.into(),
            category,
            density,
            color,
        }
    }
}

/// A single grid-resident particle.
///
/// `row`/`col` always match the slot holding the cell: the grid rewrites them
/// on placement and on both ends of every swap.
#[derive(Clone, Debug)]
pub struct Cell {
    traits: Arc<MaterialTraits>,
    row: i32,
    col: i32,
    // Lateral drift direction for liquids and gases (+1 right, -1 left)
    inertia: i32,
}

impl Cell {
    pub(crate) fn new(traits: Arc<MaterialTraits>) -> Self {
        Self {
            traits,
            row: 0,
            col: 0,
            inertia: 1,
        }
    }

    /// Fresh cell from a prototype, placed at (row, col)
    pub(crate) fn stamp(&self, row: i32, col: i32) -> Self {
        Self {
            traits: Arc::clone(&self.traits),
            row,
            col,
            inertia: self.inertia,
        }
    }

    // === Traits ===
    #[inline]
    pub fn traits(&self) -> &MaterialTraits {
        &self.traits
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.traits.name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.traits.category
    }

    #[inline]
    pub fn density(&self) -> i32 {
        self.traits.density
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.traits.color
    }

    // === Mutable state ===
    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    #[inline]
    pub fn inertia(&self) -> i32 {
        self.inertia
    }

    #[inline]
    pub(crate) fn set_position(&mut self, row: i32, col: i32) {
        self.row = row;
        self.col = col;
    }

    #[inline]
    pub(crate) fn set_inertia(&mut self, inertia: i32) {
        self.inertia = inertia;
    }
}

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::material::{Category, Cell, Color, MaterialTraits};

/// Material name -> prototype cell.
///
/// Prototypes are templates only; they are never placed on the grid.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    prototypes: IndexMap<String, Cell>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every prototype with the given definitions.
    /// A name repeated within the batch keeps its first definition.
    pub fn load_definitions(&mut self, traits: &[MaterialTraits]) {
        self.prototypes.clear();
        for t in traits {
            if self.prototypes.contains_key(&t.name) {
                continue;
            }
            self.prototypes
                .insert(t.name.clone(), Cell::new(Arc::new(t.clone())));
        }
        console_log!("material registry: {} materials loaded", self.prototypes.len());
    }

    pub fn prototype(&self, name: &str) -> Option<&Cell> {
        self.prototypes.get(name)
    }

    /// New cell of the named material positioned at (row, col)
    pub fn spawn(&self, name: &str, row: i32, col: i32) -> Option<Cell> {
        self.prototype(name).map(|proto| proto.stamp(row, col))
    }

    /// Names in definition order
    pub fn list_names(&self) -> Vec<String> {
        self.prototypes.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Palette manifest for the UI layer
    pub fn manifest_json(&self) -> String {
        let out = PaletteManifest {
            format_version: 1,
            materials: self
                .prototypes
                .values()
                .map(|proto| PaletteEntry {
                    name: proto.name(),
                    category: proto.category(),
                    density: proto.density(),
                    color: proto.color(),
                })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteManifest<'a> {
    format_version: u32,
    materials: Vec<PaletteEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteEntry<'a> {
    name: &'a str,
    category: Category,
    density: i32,
    color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(name: &str, category: Category, density: i32) -> MaterialTraits {
        MaterialTraits::new(name, category, density, Color::rgb(1, 2, 3))
    }

    #[test]
    fn load_keeps_first_definition_of_a_name() {
        let mut reg = MaterialRegistry::new();
        reg.load_definitions(&[
            traits("water", Category::Liquid, 5),
            traits("stone", Category::Solid, 100),
            traits("water", Category::Gas, 1),
        ]);

        assert_eq!(reg.len(), 2);
        let water = reg.prototype("water").expect("water registered");
        assert_eq!(water.category(), Category::Liquid);
        assert_eq!(water.density(), 5);
    }

    #[test]
    fn reload_clears_previous_prototypes() {
        let mut reg = MaterialRegistry::new();
        reg.load_definitions(&[traits("sand", Category::Grain, 3)]);
        reg.load_definitions(&[traits("steam", Category::Gas, 1)]);

        assert!(reg.prototype("sand").is_none());
        assert!(reg.contains("steam"));
        assert_eq!(reg.list_names(), vec!["steam".to_string()]);
    }

    #[test]
    fn empty_definitions_leave_an_empty_registry() {
        let mut reg = MaterialRegistry::new();
        reg.load_definitions(&[]);
        assert!(reg.is_empty());
        assert!(reg.spawn("sand", 0, 0).is_none());
    }

    #[test]
    fn manifest_lists_materials() {
        let mut reg = MaterialRegistry::new();
        reg.load_definitions(&[traits("oil", Category::Liquid, 2)]);

        let v: serde_json::Value = serde_json::from_str(&reg.manifest_json()).unwrap();
        assert_eq!(v["formatVersion"], 1);
        assert_eq!(v["materials"][0]["name"], "oil");
        assert_eq!(v["materials"][0]["category"], "liquid");
        assert_eq!(v["materials"][0]["color"], serde_json::json!([1, 2, 3]));
    }
}

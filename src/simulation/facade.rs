use wasm_bindgen::prelude::*;

use crate::domain::config::SimConfig;
use crate::domain::material::MaterialTraits;

use super::perf_stats::PerfStats;
use super::Simulation;

#[wasm_bindgen]
pub struct World {
    core: Simulation,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with given dimensions (no materials yet)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: Simulation::new(width, height),
        }
    }

    /// Build a world from the line-oriented config text
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(text: &str) -> Result<World, JsValue> {
        let config = SimConfig::parse(text).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: Simulation::from_config(&config),
        })
    }

    /// Build a world from a JSON config
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let config = SimConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: Simulation::from_config(&config),
        })
    }

    /// Replace the palette from a JSON array of material definitions
    #[wasm_bindgen(js_name = loadMaterialsJson)]
    pub fn load_materials_json(&mut self, json: &str) -> Result<(), JsValue> {
        let materials: Vec<MaterialTraits> =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.load_materials(&materials);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter, js_name = pixelSize)]
    pub fn pixel_size(&self) -> u32 { self.core.pixel_size() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    #[wasm_bindgen(js_name = placeCell)]
    pub fn place_cell(&mut self, row: i32, col: i32, name: &str) {
        self.core.place_cell(row, col, name);
    }

    /// Square brush, `size` 1..=4 (side `2 * size - 1`)
    #[wasm_bindgen(js_name = paintBrush)]
    pub fn paint_brush(&mut self, row: i32, col: i32, size: i32, name: &str) {
        self.core.paint_brush(row, col, size, name);
    }

    #[wasm_bindgen(js_name = isOccupied)]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.core.grid().is_occupied(row, col)
    }

    /// Material name at (row, col), undefined for empty/out-of-bounds
    #[wasm_bindgen(js_name = cellName)]
    pub fn cell_name(&self, row: i32, col: i32) -> Option<String> {
        self.core.get_cell(row, col).map(|c| c.name().to_string())
    }

    /// ABGR color at (row, col), undefined for empty/out-of-bounds
    #[wasm_bindgen(js_name = cellColor)]
    pub fn cell_color(&self, row: i32, col: i32) -> Option<u32> {
        self.core.get_cell(row, col).map(|c| c.color().to_abgr())
    }

    #[wasm_bindgen(js_name = materialNames)]
    pub fn material_names(&self) -> Vec<String> {
        self.core.material_names()
    }

    /// ABGR palette color for a material name
    #[wasm_bindgen(js_name = materialColor)]
    pub fn material_color(&self, name: &str) -> Option<u32> {
        self.core
            .grid()
            .prototype(name)
            .map(|proto| proto.color().to_abgr())
    }

    #[wasm_bindgen(js_name = manifestJson)]
    pub fn manifest_json(&self) -> String {
        self.core.grid().registry().manifest_json()
    }

    #[wasm_bindgen(js_name = pendingUpdates)]
    pub fn pending_updates(&self) -> usize {
        self.core.grid().pending_len()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Refresh the pixel buffer; read it through `pixelsPtr`/`pixelsLen`
    pub fn render(&mut self) {
        self.core.render_pixels();
    }

    #[wasm_bindgen(js_name = pixelsPtr)]
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    #[wasm_bindgen(js_name = pixelsLen)]
    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }
}

impl World {
    /// Borrow the pure Rust core (native hosts and tests)
    pub fn core(&self) -> &Simulation {
        &self.core
    }
}

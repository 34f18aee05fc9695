//! Simulation - drives the grid once per rendered frame
//!
//! Simulation is the pure Rust core (usable from native code and tests);
//! `World` in facade.rs is the thin wasm-bindgen wrapper around it.

use crate::domain::config::SimConfig;
use crate::domain::material::{Cell, MaterialTraits};
use crate::grid::Grid;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::MAX_BRUSH_SIZE;
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_stats::Stopwatch;

/// Background color for empty slots (ABGR, RGB(10,10,10))
pub const BG_COLOR: u32 = 0xFF0A0A0A;

pub struct Simulation {
    grid: Grid,
    pixel_size: u32,

    // State
    frame: u64,

    // Render buffer: one ABGR pixel per slot
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Empty grid with no materials loaded
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation(width, height, 1)
    }

    /// Grid sized from the config, palette loaded
    pub fn from_config(config: &SimConfig) -> Self {
        init::create_from_config(config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Render-only scale factor from the config
    pub fn pixel_size(&self) -> u32 { self.pixel_size }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Replace the material palette; resident cells keep their traits
    pub fn load_materials(&mut self, traits: &[MaterialTraits]) {
        commands::load_materials(self, traits);
    }

    /// Resize to the config's dimensions and load its palette
    pub fn apply_config(&mut self, config: &SimConfig) {
        commands::apply_config(self, config);
    }

    /// Place a cell of the named material (unknown names / bad coords are ignored)
    pub fn place_cell(&mut self, row: i32, col: i32, name: &str) {
        commands::place_cell(self, row, col, name);
    }

    /// Paint a square brush of the named material around (row, col)
    pub fn paint_brush(&mut self, row: i32, col: i32, size: i32, name: &str) {
        commands::paint_brush(self, row, col, size, name);
    }

    pub fn get_cell(&self, row: i32, col: i32) -> Option<&Cell> {
        self.grid.get_cell(row, col)
    }

    pub fn material_names(&self) -> Vec<String> {
        self.grid.material_names()
    }

    /// Remove every cell and restart the frame count; dimensions and palette stay
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Refresh and return the ABGR pixel buffer (row-major, one pixel per slot)
    pub fn render_pixels(&mut self) -> &[u32] {
        render_extract::render_pixels(self)
    }

    /// Get pointer to the pixel buffer (for JS canvas blits)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

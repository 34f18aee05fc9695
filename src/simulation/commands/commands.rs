use crate::domain::config::SimConfig;
use crate::domain::material::MaterialTraits;

use super::{Simulation, BG_COLOR};

/// Largest brush: a 7x7 square
pub const MAX_BRUSH_SIZE: i32 = 4;

pub(super) fn load_materials(sim: &mut Simulation, traits: &[MaterialTraits]) {
    if traits.is_empty() {
        console_warn!("empty material list: nothing will be placeable");
    }
    sim.grid.load_materials(traits);
}

pub(super) fn apply_config(sim: &mut Simulation, config: &SimConfig) {
    resize(sim, config.width, config.height);
    sim.pixel_size = config.pixel_size;
    load_materials(sim, &config.materials);
}

pub(super) fn place_cell(sim: &mut Simulation, row: i32, col: i32, name: &str) {
    sim.grid.place_cell(row, col, name);
}

/// Fill the square of side `2 * size - 1` centred on (row, col).
/// Size is clamped to 1..=MAX_BRUSH_SIZE; slots off the grid are skipped.
pub(super) fn paint_brush(sim: &mut Simulation, row: i32, col: i32, size: i32, name: &str) {
    let reach = size.clamp(1, MAX_BRUSH_SIZE) - 1;
    for r in row.saturating_sub(reach)..=row.saturating_add(reach) {
        for c in col.saturating_sub(reach)..=col.saturating_add(reach) {
            place_cell(sim, r, c, name);
        }
    }
}

pub(super) fn clear(sim: &mut Simulation) {
    let (width, height) = (sim.grid.width(), sim.grid.height());
    resize(sim, width, height);
}

fn resize(sim: &mut Simulation, width: u32, height: u32) {
    sim.grid.initialize(width, height);
    sim.frame = 0;
    sim.pixels.clear();
    sim.pixels.resize(sim.grid.size(), BG_COLOR);
}

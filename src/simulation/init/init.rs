use crate::domain::config::SimConfig;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::{Simulation, BG_COLOR};

pub(super) fn create_simulation(width: u32, height: u32, pixel_size: u32) -> Simulation {
    let grid = Grid::new(width, height);
    let pixels = vec![BG_COLOR; grid.size()];
    Simulation {
        grid,
        pixel_size,
        frame: 0,
        pixels,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn create_from_config(config: &SimConfig) -> Simulation {
    let mut sim = create_simulation(config.width, config.height, config.pixel_size);
    sim.grid.load_materials(&config.materials);
    console_log!(
        "simulation ready: {}x{} grid, {} materials",
        config.width,
        config.height,
        sim.grid.registry().len()
    );
    sim
}

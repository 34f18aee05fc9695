use super::{Simulation, Stopwatch};

pub(super) fn step(sim: &mut Simulation) {
    let perf_on = sim.perf_enabled;
    let timer = if perf_on { Some(Stopwatch::start()) } else { None };

    sim.grid.step();
    sim.frame += 1;

    if let Some(timer) = timer {
        let tick = sim.grid.last_tick_stats();
        let stats = &mut sim.perf_stats;
        stats.reset();
        stats.step_ms = timer.elapsed_ms();
        stats.cells_processed = tick.processed;
        stats.cells_deferred = tick.deferred;
        stats.cells_skipped = tick.skipped;
        stats.cells_moved = tick.moves;
        stats.retries = tick.retries;
        stats.pending_updates = sim.grid.pending_len() as u32;
        stats.occupied_cells = sim.grid.occupied_count() as u32;
        stats.grid_size = sim.grid.size() as u32;
    }
}

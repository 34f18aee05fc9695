use super::{Simulation, BG_COLOR};

/// Paint every slot into the ABGR pixel buffer (row-major, width x height)
pub(super) fn render_pixels(sim: &mut Simulation) -> &[u32] {
    let size = sim.grid.size();
    if sim.pixels.len() != size {
        sim.pixels.resize(size, BG_COLOR);
    }

    let width = sim.grid.width() as i32;
    for (idx, px) in sim.pixels.iter_mut().enumerate() {
        let row = idx as i32 / width;
        let col = idx as i32 % width;
        *px = match sim.grid.get_cell(row, col) {
            Some(cell) => cell.color().to_abgr(),
            None => BG_COLOR,
        };
    }

    &sim.pixels
}

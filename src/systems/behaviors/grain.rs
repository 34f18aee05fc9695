//! GrainBehavior - sand-like particles
//!
//! Falls straight down, else slides down-left, else down-right.
//! Sinks into lighter liquids and gases; never displaces solids or other grains.

use super::{Behavior, UpdateContext, FALL_OFFSETS};
use crate::domain::material::Category;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, Default)]
pub struct GrainBehavior;

impl GrainBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Diagonal moves can't squeeze past a solid sitting beside the grain
    #[inline]
    fn side_is_open(&self, grid: &Grid, row: i32, col: i32, dc: i32) -> bool {
        match grid.get_cell(row, col + dc) {
            Some(side) => side.category() != Category::Solid,
            None => true,
        }
    }

    /// Check if the grain can move into (row, col)
    #[inline]
    fn can_displace(&self, grid: &Grid, row: i32, col: i32, my_density: i32) -> bool {
        if !grid.is_valid_index(row, col) {
            return false;
        }
        match grid.get_cell(row, col) {
            None => true,
            // Heavier sinks into lighter fluid
            Some(target) => target.category().is_fluid() && target.density() < my_density,
        }
    }
}

impl Behavior for GrainBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let (row, col) = (ctx.row, ctx.col);
        let Some(me) = ctx.grid.get_cell(row, col) else { return };
        let density = me.density();

        for (dr, dc) in FALL_OFFSETS {
            let (to_row, to_col) = (row + dr, col + dc);
            if dc != 0 && !self.side_is_open(ctx.grid, row, col, dc) {
                continue;
            }
            if self.can_displace(ctx.grid, to_row, to_col, density) {
                ctx.grid.swap(row, col, to_row, to_col);
                return;
            }
        }
    }
}

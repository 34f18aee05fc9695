//! LiquidBehavior - falling fluids
//!
//! 1. Fall straight, then down-left, then down-right (along `gravity`)
//!    into empty slots or through lighter fluids.
//! 2. Otherwise drift sideways in the direction of the cell's inertia:
//!    - empty slot: move
//!    - same category: take over the neighbor's inertia and retry this tick
//!    - anything else or the grid edge: reverse inertia
//!
//! GasBehavior runs the same routine with gravity = -1.

use super::{Behavior, UpdateContext, FALL_OFFSETS};
use crate::domain::material::Category;

#[derive(Clone, Copy, Debug, Default)]
pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Try to move into (to_row, to_col); returns true when the cell moved
    #[inline]
    fn try_move(ctx: &mut UpdateContext, to_row: i32, to_col: i32, gravity: i32, my_density: i32) -> bool {
        if !ctx.grid.is_valid_index(to_row, to_col) {
            return false;
        }

        let displaces = match ctx.grid.get_cell(to_row, to_col) {
            None => true,
            Some(target) => match target.category() {
                Category::Solid | Category::Grain => false,
                // Heavier sinks (gravity +1), lighter rises (gravity -1)
                Category::Liquid | Category::Gas => gravity * target.density() < gravity * my_density,
            },
        };

        if displaces {
            ctx.grid.swap(ctx.row, ctx.col, to_row, to_col);
        }
        displaces
    }

    /// Shared fluid routine; `gravity` is +1 for liquids, -1 for gases
    pub(crate) fn flow(ctx: &mut UpdateContext, gravity: i32) {
        let (row, col) = (ctx.row, ctx.col);
        let Some(me) = ctx.grid.get_cell(row, col) else { return };
        let category = me.category();
        let density = me.density();
        let inertia = me.inertia();

        // --- 1. Vertical and diagonal ---
        for (dr, dc) in FALL_OFFSETS {
            if Self::try_move(ctx, row + dr * gravity, col + dc, gravity, density) {
                return;
            }
        }

        // --- 2. Lateral drift ---
        let side_col = col + inertia;
        if !ctx.grid.is_valid_index(row, side_col) {
            Self::set_inertia(ctx, -inertia);
            return;
        }

        let neighbor = ctx
            .grid
            .get_cell(row, side_col)
            .map(|n| (n.category(), n.inertia()));

        match neighbor {
            None => ctx.grid.swap(row, col, row, side_col),
            Some((other, other_inertia)) if other == category => {
                // Pressure: follow the neighbor's drift and try again right away
                Self::set_inertia(ctx, other_inertia);
                ctx.grid.retry_this_tick(row, col);
            }
            Some(_) => Self::set_inertia(ctx, -inertia),
        }
    }

    #[inline]
    fn set_inertia(ctx: &mut UpdateContext, inertia: i32) {
        if let Some(me) = ctx.grid.get_cell_mut(ctx.row, ctx.col) {
            me.set_inertia(inertia);
        }
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        Self::flow(ctx, Category::Liquid.gravity());
    }
}

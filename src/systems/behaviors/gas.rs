//! GasBehavior - rising fluids
//!
//! Gases are inverted liquids: the liquid routine with gravity = -1.
//! They rise, bubble up through denser fluids and drift under ceilings.

use super::{Behavior, LiquidBehavior, UpdateContext};
use crate::domain::material::Category;

#[derive(Clone, Copy, Debug, Default)]
pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        LiquidBehavior::flow(ctx, Category::Gas.gravity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{Color, MaterialTraits};
    use crate::grid::Grid;

    fn grid() -> Grid {
        let mut grid = Grid::new(3, 4);
        grid.load_materials(&[
            MaterialTraits::new("smoke", Category::Gas, 1, Color::rgb(60, 60, 60)),
            MaterialTraits::new("water", Category::Liquid, 2, Color::rgb(40, 90, 220)),
            MaterialTraits::new("stone", Category::Solid, 10, Color::rgb(90, 90, 90)),
        ]);
        grid
    }

    fn run(grid: &mut Grid, row: i32, col: i32) {
        let mut ctx = UpdateContext { grid, row, col };
        GasBehavior::new().update(&mut ctx);
    }

    #[test]
    fn rises_straight_up() {
        let mut g = grid();
        g.place_cell(3, 1, "smoke");
        run(&mut g, 3, 1);
        assert_eq!(g.get_cell(2, 1).map(|c| c.position()), Some((2, 1)));
    }

    #[test]
    fn bubbles_up_through_denser_liquid() {
        let mut g = grid();
        g.place_cell(2, 1, "water");
        g.place_cell(3, 1, "smoke");
        run(&mut g, 3, 1);
        assert_eq!(g.get_cell(2, 1).map(|c| c.name()), Some("smoke"));
        assert_eq!(g.get_cell(3, 1).map(|c| c.name()), Some("water"));
    }

    #[test]
    fn rises_diagonally_up_left_under_a_ceiling() {
        let mut g = grid();
        g.place_cell(2, 1, "stone");
        g.place_cell(3, 1, "smoke");
        run(&mut g, 3, 1);
        assert_eq!(g.get_cell(2, 0).map(|c| c.name()), Some("smoke"));
    }
}

//! Behaviors - per-category movement rules
//!
//! Each category has one behavior; BehaviorRegistry dispatches on the cell's
//! category. Solids have no behavior: they never move.
//!
//! Every behavior moves cells only through `Grid::swap`, which keeps stored
//! positions in sync and wakes neighbors.

mod grain;
mod liquid;
mod gas;

pub use grain::GrainBehavior;
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;

use crate::domain::material::Category;
use crate::grid::Grid;

/// Candidate offsets (rows along gravity, cols) in priority order:
/// straight, then down-left, then down-right
pub(crate) const FALL_OFFSETS: [(i32, i32); 3] = [(1, 0), (1, -1), (1, 1)];

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub row: i32,
    pub col: i32,
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by category
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorRegistry {
    grain: GrainBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            grain: GrainBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to appropriate behavior based on category
    pub fn update(&self, category: Category, ctx: &mut UpdateContext) {
        match category {
            Category::Grain => self.grain.update(ctx),
            Category::Liquid => self.liquid.update(ctx),
            Category::Gas => self.gas.update(ctx),
            Category::Solid => {}
        }
    }
}

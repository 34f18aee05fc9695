//! Grid - flat slot array of optional cells plus the update scheduling state
//!
//! Slots are stored row-major in a single Vec (`row * width + col`).
//! Every relocation goes through `swap`, which keeps each cell's stored
//! position in sync with its slot and wakes the neighborhood.

use std::collections::HashSet;

use crate::behaviors::{BehaviorRegistry, UpdateContext};
use crate::domain::material::{Cell, MaterialTraits};
use crate::domain::registry::MaterialRegistry;
use crate::spatial::update_queue::UpdateQueue;

/// Chebyshev radius of the wake-up block around a moved cell (5x5)
pub const DORMANCY_RADIUS: i32 = 2;

mod indexing;
mod accessors;
mod moves;
mod step;

/// Per-tick counters, reset at the start of every `step()`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Behaviors invoked
    pub processed: u32,
    /// Snapshot entries skipped because they were re-enqueued mid-pass
    pub deferred: u32,
    /// Snapshot entries pointing at empty or invalid slots
    pub skipped: u32,
    /// Swaps that relocated at least one cell
    pub moves: u32,
    /// Same-tick retries granted to laterally blocked fluids
    pub retries: u32,
}

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<Option<Cell>>,
    registry: MaterialRegistry,
    behaviors: BehaviorRegistry,

    // Live queue: everything enqueued now is processed next tick
    pending: UpdateQueue,
    // Snapshot being drained by the current step()
    draining: UpdateQueue,
    // Indices that already used their same-tick retry
    retried: HashSet<usize>,

    stats: TickStats,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let mut grid = Self {
            width: 0,
            height: 0,
            size: 0,
            cells: Vec::new(),
            registry: MaterialRegistry::new(),
            behaviors: BehaviorRegistry::new(),
            pending: UpdateQueue::new(),
            draining: UpdateQueue::new(),
            retried: HashSet::new(),
            stats: TickStats::default(),
        };
        grid.initialize(width, height);
        grid
    }

    /// Allocate an empty `height x width` slot matrix.
    /// Existing cells and queued updates are discarded; materials are kept.
    pub fn initialize(&mut self, width: u32, height: u32) {
        let size = (width as usize) * (height as usize);
        self.width = width;
        self.height = height;
        self.size = size;
        self.cells = vec![None; size];
        self.pending.clear();
        self.draining.clear();
        self.retried.clear();
        self.stats = TickStats::default();
    }

    /// Rebuild the material registry. Cells already on the grid are untouched.
    pub fn load_materials(&mut self, traits: &[MaterialTraits]) {
        self.registry.load_definitions(traits);
    }

    // === Registry passthrough ===
    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    pub fn prototype(&self, name: &str) -> Option<&Cell> {
        self.registry.prototype(name)
    }

    pub fn material_names(&self) -> Vec<String> {
        self.registry.list_names()
    }

    /// Counters from the most recent `step()`
    pub fn last_tick_stats(&self) -> TickStats {
        self.stats
    }
}

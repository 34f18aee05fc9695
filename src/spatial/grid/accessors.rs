use super::*;

impl Grid {
    // === Cell access ===
    /// None for out-of-bounds coordinates and for empty slots
    #[inline]
    pub fn get_cell(&self, row: i32, col: i32) -> Option<&Cell> {
        let idx = self.slot_index(row, col)?;
        self.cells[idx].as_ref()
    }

    #[inline]
    pub(crate) fn get_cell_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        let idx = self.slot_index(row, col)?;
        self.cells[idx].as_mut()
    }

    #[inline]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.get_cell(row, col).is_some()
    }

    /// Resident cells in slot order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    // === Placement ===
    /// Stamp a new cell of `name` into (row, col), replacing any occupant.
    /// Unknown names and out-of-bounds coordinates are ignored.
    pub fn place_cell(&mut self, row: i32, col: i32, name: &str) {
        let Some(idx) = self.slot_index(row, col) else { return };
        let Some(cell) = self.registry.spawn(name, row, col) else { return };
        self.cells[idx] = Some(cell);
        self.enqueue(row, col);
    }

    // === Update queue ===
    /// Schedule an occupied slot for the next tick
    pub fn enqueue(&mut self, row: i32, col: i32) {
        if !self.is_occupied(row, col) {
            return;
        }
        let idx = self.index(row, col);
        self.pending.push(idx);
    }

    pub fn is_pending(&self, row: i32, col: i32) -> bool {
        match self.slot_index(row, col) {
            Some(idx) => self.pending.contains(idx),
            None => false,
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Re-run this cell later in the current tick, once per tick.
    /// A second request in the same tick falls back to the next tick.
    pub(crate) fn retry_this_tick(&mut self, row: i32, col: i32) {
        if !self.is_occupied(row, col) {
            return;
        }
        let idx = self.index(row, col);
        if self.retried.insert(idx) {
            if self.draining.push(idx) {
                self.stats.retries += 1;
            }
        } else {
            self.pending.push(idx);
        }
    }
}

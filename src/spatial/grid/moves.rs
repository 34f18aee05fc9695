use super::*;

impl Grid {
    // === Swap two slots ===
    /// Exchange two slots' contents (either may be empty).
    /// Each endpoint left holding a cell gets its position updated, is
    /// enqueued, and wakes its 5x5 neighborhood.
    pub fn swap(&mut self, r1: i32, c1: i32, r2: i32, c2: i32) {
        if !self.is_valid_index(r1, c1) || !self.is_valid_index(r2, c2) {
            return;
        }
        let idx1 = self.index(r1, c1);
        let idx2 = self.index(r2, c2);

        if self.cells[idx1].is_none() && self.cells[idx2].is_none() {
            return;
        }
        self.cells.swap(idx1, idx2);
        self.stats.moves += 1;

        self.settle(r1, c1);
        self.settle(r2, c2);
    }

    fn settle(&mut self, row: i32, col: i32) {
        match self.get_cell_mut(row, col) {
            Some(cell) => cell.set_position(row, col),
            None => return,
        }
        self.enqueue(row, col);
        self.propagate_dormancy(row, col);
    }

    /// Re-enqueue every occupied slot within Chebyshev distance 2
    fn propagate_dormancy(&mut self, row: i32, col: i32) {
        for dr in -DORMANCY_RADIUS..=DORMANCY_RADIUS {
            for dc in -DORMANCY_RADIUS..=DORMANCY_RADIUS {
                if dr == 0 && dc == 0 {
                    continue;
                }
                self.enqueue(row + dr, col + dc);
            }
        }
    }
}

use super::*;

impl Grid {
    /// Advance the automaton by one tick.
    ///
    /// The live queue is snapshotted and cleared, so work scheduled while the
    /// snapshot drains lands in the next tick. An entry whose index was
    /// re-enqueued earlier in this pass is deferred to that next tick, so no
    /// cell runs twice per frame (same-tick retries excepted).
    pub fn step(&mut self) {
        self.stats = TickStats::default();
        self.retried.clear();
        self.draining = std::mem::take(&mut self.pending);

        while let Some(idx) = self.draining.pop_front() {
            self.perform_update(idx);
        }
    }

    fn perform_update(&mut self, idx: usize) {
        if self.pending.contains(idx) {
            self.stats.deferred += 1;
            return;
        }
        let Some((row, col)) = self.coords(idx) else {
            self.stats.skipped += 1;
            return;
        };
        let Some(category) = self.get_cell(row, col).map(Cell::category) else {
            self.stats.skipped += 1;
            return;
        };

        self.stats.processed += 1;
        let behaviors = self.behaviors;
        let mut ctx = UpdateContext { grid: self, row, col };
        behaviors.update(category, &mut ctx);
    }
}

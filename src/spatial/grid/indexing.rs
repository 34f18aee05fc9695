use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    /// Linear index of an in-bounds slot; callers check bounds first
    #[inline]
    pub(crate) fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(
            self.is_valid_index(row, col),
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        (row as usize) * (self.width as usize) + (col as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> Option<(i32, i32)> {
        if idx >= self.size {
            return None;
        }
        let width = self.width as usize;
        Some(((idx / width) as i32, (idx % width) as i32))
    }

    // === Bounds checking ===
    #[inline]
    pub fn is_valid_index(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.height as i32 && col < self.width as i32
    }

    /// Linear index, None when (row, col) is outside the grid
    #[inline]
    pub fn slot_index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_valid_index(row, col) {
            Some(self.index(row, col))
        } else {
            None
        }
    }
}

use wasm_bindgen::prelude::*;

/// Wall-clock timer: `Date.now()` in the browser, `Instant` natively
#[derive(Clone, Copy)]
pub(crate) struct Stopwatch {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Stopwatch { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Stopwatch { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Snapshot of the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) cells_deferred: u32,
    pub(super) cells_skipped: u32,
    pub(super) cells_moved: u32,
    pub(super) retries: u32,
    pub(super) pending_updates: u32,
    pub(super) occupied_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn cells_deferred(&self) -> u32 { self.cells_deferred }
    #[wasm_bindgen(getter)]
    pub fn cells_skipped(&self) -> u32 { self.cells_skipped }
    #[wasm_bindgen(getter)]
    pub fn cells_moved(&self) -> u32 { self.cells_moved }
    #[wasm_bindgen(getter)]
    pub fn retries(&self) -> u32 { self.retries }
    #[wasm_bindgen(getter)]
    pub fn pending_updates(&self) -> u32 { self.pending_updates }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}

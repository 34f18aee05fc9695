//! Console logging
//!
//! On wasm32 messages go to the browser console through web-sys.
//! Native builds (tests, tools) write to stderr instead.
//!
//! Usage:
//! ```rust
//! use cellgrid_engine::console_log;
//!
//! let loaded = 3;
//! console_log!("loaded {} materials", loaded);
//! ```

/// Log an informational message
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::info(&format!($($arg)*))
    };
}

/// Log a warning (recoverable problems such as unknown config keys)
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::warn(&format!($($arg)*))
    };
}

#[doc(hidden)]
pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[cellgrid] {}", msg);
    }
}

#[doc(hidden)]
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[cellgrid] warning: {}", msg);
    }
}

//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate exposes the cropframe-core crop session to JavaScript/TypeScript
//! hosts that own the canvas and pointer events.
//!
//! # Module Structure
//!
//! - `session` - the interactive crop session (`JsCropSession`)
//! - `apply` - committed crops and raster plans for export
//! - `logger` - forwards `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsCropSession();
//! session.init(0, 0, canvas.width, canvas.height, bitmap.width / bitmap.height);
//! session.rotate_by(90);
//!
//! const [left, top, right, bottom] = session.crop_rect();
//! const plan = session.commit().plan(bitmap.width, bitmap.height);
//! ```

use wasm_bindgen::prelude::*;

mod apply;
mod logger;
mod session;

// Re-export public types
pub use apply::{JsCropCommit, JsRasterPlan};
pub use session::JsCropSession;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Debug);
}

/// Change how much the core logs to the console: `"off"`, `"error"`,
/// `"warn"`, `"info"`, `"debug"` or `"trace"`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_log_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    logger::install(filter);
    Ok(())
}

fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    level.trim().parse().ok()
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}


/// WASM-specific tests that install the console logger.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_log_level() {
        assert!(set_log_level("warn").is_ok());
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        assert!(set_log_level("loud").is_err());
    }
}

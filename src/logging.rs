//! Console logging.
//!
//! In the browser this goes through `gloo::console`. Host builds (unit and
//! integration tests) cannot call into JS, so there it goes to stderr.

use std::fmt::Display;

pub fn info(msg: impl Display) {
    let line = msg.to_string();
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(line);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

/// Logs `err` prefixed with what was being attempted.
pub fn error(context: &str, err: impl Display) {
    let line = format!("{context}: {err}");
    #[cfg(target_arch = "wasm32")]
    gloo::console::error!(line);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

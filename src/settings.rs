//! Host preferences
//!
//! The only signal this page cares about is the reduced-motion media
//! preference, read once at startup. Nothing is persisted.

/// User preferences for the page session
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    /// Minimize animation: skip the celebration effects and cap the Yes
    /// button's growth
    pub reduced_motion: bool,
}

impl Settings {
    /// Read preferences from the browser (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let reduced_motion = web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        Self { reduced_motion }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::default()
    }
}

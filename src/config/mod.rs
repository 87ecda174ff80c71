//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

/// Engine-level tuning knobs.
///
/// Everything here has a sensible default; hosts construct one, tweak what
/// they need, and hand it to [`crate::engine::ListEngine::new`] or
/// [`crate::engine::GridEngine::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Extra items materialized beyond each edge of the strictly-visible
    /// window, to reduce blank flashes during fast scroll.
    pub overscan_count: usize,

    /// Distance (content units) from the end of content at which the list
    /// engine raises its edge-triggered end-reached signal.
    pub end_reached_threshold: f64,

    /// Spacing between grid cells, both axes. Unused by the list engine.
    pub gap: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overscan_count: 2,
            end_reached_threshold: 200.0,
            gap: 0.0,
        }
    }
}

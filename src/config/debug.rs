//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Callers additionally gate on `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per successful poll (source, observation count).
    pub print_poll_results: bool,
    /// Emit a line each time the correlation matrix is rebuilt.
    pub print_matrix_builds: bool,
    /// Emit model recompute timings from the engine.
    pub print_model_timings: bool,
    /// Emit UI interaction logs (symbol switching, toggles).
    pub print_ui_interactions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_poll_results: false,
    print_matrix_builds: false,
    print_model_timings: false,
    print_ui_interactions: true,
};

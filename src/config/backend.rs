//! Backend-specific configuration constants and types.

/// Defaults for reaching the evaluation backend
/// (The store falls back to these when the caller supplies nothing)
pub struct ApiDefaults {
    /// Base URL all derived endpoints hang off
    pub base_url: &'static str,
}

/// View-level constants baked into the backend's precomputed buffers
pub struct ViewDefaults {
    /// Number of quantized box-offset direction bins (8 compass sectors plus centered)
    pub direction_bins: usize,
}

/// The Master Configuration Struct
pub struct BackendConfig {
    pub api: ApiDefaults,
    pub view: ViewDefaults,
}

pub const BACKEND: BackendConfig = BackendConfig {
    api: ApiDefaults {
        // The backend serves on 5010 unless told otherwise
        base_url: "http://localhost:5010",
    },
    view: ViewDefaults { direction_bins: 9 },
};

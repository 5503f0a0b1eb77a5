//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default
//! so release builds remain quiet.

/// Emit selection logs (matrix/grid source switches).
pub const PRINT_SELECTION_CHANGES: bool = true;

/// Emit a one-line summary when label metadata is swapped in.
pub const PRINT_METADATA_SUMMARY: bool = false;

/// Emit every derived URL as it is built. Very noisy with a grid on screen.
pub const PRINT_URL_BUILDS: bool = false;

//! Configuration module for the matrix-lens front-end core.

pub mod backend;

mod debug; // Can be private now because we have a public re-export. Forces files to use crate::config::PRINT_SELECTION_CHANGES not crate::config::debug::PRINT_SELECTION_CHANGES
pub use debug::{PRINT_METADATA_SUMMARY, PRINT_SELECTION_CHANGES, PRINT_URL_BUILDS};

// Re-export commonly used items
pub use backend::BACKEND;

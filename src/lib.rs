// Core modules
pub mod api;
pub mod config;
pub mod store;

// Re-export commonly used types
pub use api::ImageQuery;
pub use store::{GridSource, HierarchyNode, MatrixSource, Metadata, SelectionStore};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend API base URL
    #[arg(long, default_value = config::BACKEND.api.base_url)]
    pub api_base: String,

    /// Dataset split for the confusion matrix view (valid or train)
    #[arg(long, default_value_t)]
    pub matrix_source: MatrixSource,

    /// Sample pool for the image grid view (single or combined)
    #[arg(long, default_value_t)]
    pub grid_source: GridSource,
}

// Selection state and label metadata
pub mod metadata;
pub mod selection;

// Re-export commonly used types
pub use metadata::{HierarchyNode, Metadata};
pub use selection::{GridSource, MatrixSource, SelectionStore};

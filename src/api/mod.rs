// Endpoint derivation and request payloads for the evaluation backend
pub mod endpoints;
pub mod requests;

// Re-export commonly used types
pub use endpoints::ImageQuery;
pub use requests::{
    CellImagesRequest, GridImagesRequest, GridZoomRequest, HoverCellRequest, ImageBoxRequest,
    SourcedQuery,
};

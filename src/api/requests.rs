//! Typed request bodies for the backend's POST endpoints.
//!
//! Key spellings follow the backend handlers verbatim (`boxID`,
//! `aspectRatio`, ...). Optional fields are omitted from the JSON entirely;
//! the backend probes for key presence rather than checking for null.

use serde::Serialize;
use serde_json::Value;

use crate::store::{GridSource, MatrixSource, SelectionStore};

/// Body for the endpoints that pick a dataset by split only: metadata,
/// confusionMatrix, zoomInDist, classStatistics, slices, showSlice.
#[derive(Debug, Clone, Serialize)]
pub struct SourcedQuery {
    pub source: MatrixSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
}

/// Body for hoverMatrixCell.
#[derive(Debug, Clone, Serialize)]
pub struct HoverCellRequest {
    pub source: MatrixSource,
    pub query: Value,
    pub targets: Value,
}

/// Body for imagesInCell: the clicked cell's label/prediction class indices.
#[derive(Debug, Clone, Serialize)]
pub struct CellImagesRequest {
    pub source: MatrixSource,
    pub labels: Vec<usize>,
    pub preds: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
}

/// Body for imagebox. Grid-interaction endpoints carry both sources, since
/// the backend routes them to one of four precomputed grids.
#[derive(Debug, Clone, Serialize)]
pub struct ImageBoxRequest {
    #[serde(rename = "matrixSource")]
    pub matrix_source: MatrixSource,
    #[serde(rename = "gridSource")]
    pub grid_source: GridSource,
    #[serde(rename = "boxID")]
    pub box_id: u64,
    pub showall: bool,
    pub iou: f64,
    pub conf: f64,
}

/// Body for images: thumbnails for a whole grid layout in one round trip.
#[derive(Debug, Clone, Serialize)]
pub struct GridImagesRequest {
    #[serde(rename = "matrixSource")]
    pub matrix_source: MatrixSource,
    #[serde(rename = "gridSource")]
    pub grid_source: GridSource,
    #[serde(rename = "boxIDs")]
    pub box_ids: Vec<u64>,
    pub show: String,
    pub iou: f64,
    pub conf: f64,
}

/// Body for grid: hierarchical zoom into a set of layout nodes.
#[derive(Debug, Clone, Serialize)]
pub struct GridZoomRequest {
    #[serde(rename = "matrixSource")]
    pub matrix_source: MatrixSource,
    #[serde(rename = "gridSource")]
    pub grid_source: GridSource,
    pub nodes: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Value>,
    pub depth: u32,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: f64,
    pub zoomin: bool,
    pub iou: f64,
    pub conf: f64,
}

// Constructors that inject the live selection state, so call sites only
// supply what the interaction itself produced.
impl SelectionStore {
    pub fn sourced_query(&self, query: Option<Value>) -> SourcedQuery {
        SourcedQuery {
            source: self.matrix_source(),
            query,
        }
    }

    pub fn hover_cell_request(&self, query: Value, targets: Value) -> HoverCellRequest {
        HoverCellRequest {
            source: self.matrix_source(),
            query,
            targets,
        }
    }

    pub fn cell_images_request(
        &self,
        labels: Vec<usize>,
        preds: Vec<usize>,
        query: Option<Value>,
    ) -> CellImagesRequest {
        CellImagesRequest {
            source: self.matrix_source(),
            labels,
            preds,
            query,
        }
    }

    pub fn image_box_request(&self, box_id: u64, showall: bool, iou: f64, conf: f64) -> ImageBoxRequest {
        ImageBoxRequest {
            matrix_source: self.matrix_source(),
            grid_source: self.grid_source(),
            box_id,
            showall,
            iou,
            conf,
        }
    }

    pub fn grid_images_request(
        &self,
        box_ids: Vec<u64>,
        show: impl Into<String>,
        iou: f64,
        conf: f64,
    ) -> GridImagesRequest {
        GridImagesRequest {
            matrix_source: self.matrix_source(),
            grid_source: self.grid_source(),
            box_ids,
            show: show.into(),
            iou,
            conf,
        }
    }

    /// Defaults mirror the backend's: no constraints, square aspect, zooming in.
    pub fn grid_zoom_request(&self, nodes: Vec<u64>, depth: u32, iou: f64, conf: f64) -> GridZoomRequest {
        GridZoomRequest {
            matrix_source: self.matrix_source(),
            grid_source: self.grid_source(),
            nodes,
            constraints: None,
            depth,
            aspect_ratio: 1.0,
            zoomin: true,
            iou,
            conf,
        }
    }
}

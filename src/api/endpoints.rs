//! Endpoint table for the evaluation backend.
//!
//! Every URL the front-end hits is derived here: a fixed path suffix joined
//! onto the configured base, plus one parametrized thumbnail endpoint.

use url::form_urlencoded;

#[cfg(debug_assertions)]
use crate::config::PRINT_URL_BUILDS;
use crate::store::{GridSource, MatrixSource};

// Fixed path suffixes, relative to the API base.
pub const METADATA: &str = "/api/metadata";
pub const CONFUSION_MATRIX: &str = "/api/confusionMatrix";
pub const HOVER_MATRIX_CELL: &str = "/api/hoverMatrixCell";
pub const ZOOM_IN_DIST: &str = "/api/zoomInDist";
pub const IMAGE: &str = "/api/image";
pub const IMAGE_BOX: &str = "/api/imagebox";
pub const IMAGES: &str = "/api/images";
pub const IMAGES_IN_CELL: &str = "/api/imagesInCell";
pub const SHOW_SLICE: &str = "/api/showSlice";
pub const GRID: &str = "/api/grid";
pub const CLASS_STATISTICS: &str = "/api/classStatistics";
pub const SLICES: &str = "/api/slices";

/// Join a normalized base (no trailing slash) with one of the path consts.
pub fn join(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Caller-supplied parameters for the thumbnail endpoint.
///
/// The two data-source values are deliberately *not* fields here: the store
/// reads them live when the URL is built, so a query can be constructed once
/// and reused across source toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageQuery {
    pub box_id: u64,
    /// Render mode token the backend's thumbnail pipeline understands.
    pub show_mode: String,
    /// Draw all boxes in the image, not just the queried one.
    pub show_all: bool,
    pub iou: f64,
    pub conf: f64,
    pub hide_box: bool,
}

impl ImageQuery {
    pub fn new(
        box_id: u64,
        show_mode: impl Into<String>,
        show_all: bool,
        iou: f64,
        conf: f64,
    ) -> Self {
        Self {
            box_id,
            show_mode: show_mode.into(),
            show_all,
            iou,
            conf,
            // Off by default; thumbnails draw their boxes unless asked not to
            hide_box: false,
        }
    }

    /// Strip drawn boxes from the rendered thumbnail.
    pub fn hide_box(mut self, hide: bool) -> Self {
        self.hide_box = hide;
        self
    }
}

/// Build the parametrized image URL. Parameter order is part of the wire
/// contract; values are form-urlencoded.
pub fn image_url(
    base: &str,
    query: &ImageQuery,
    grid_source: GridSource,
    matrix_source: MatrixSource,
) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("boxID", &query.box_id.to_string())
        .append_pair("show", &query.show_mode)
        .append_pair("showall", &query.show_all.to_string())
        .append_pair("iou", &query.iou.to_string())
        .append_pair("conf", &query.conf.to_string())
        .append_pair("hidebox", &query.hide_box.to_string())
        .append_pair("gridSource", &grid_source.to_string())
        .append_pair("matrixSource", &matrix_source.to_string())
        .finish();

    let url = format!("{base}{IMAGE}?{params}");

    #[cfg(debug_assertions)]
    if PRINT_URL_BUILDS {
        log::info!("[api] built {url}");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_is_plain_concatenation() {
        assert_eq!(join("http://x", METADATA), "http://x/api/metadata");
        assert_eq!(join("http://x", SLICES), "http://x/api/slices");
    }

    #[test]
    fn test_image_url_parameter_order_and_values() {
        let query = ImageQuery::new(1, "a", true, 0.5, 0.3);
        let url = image_url("http://x", &query, GridSource::Single, MatrixSource::Valid);
        assert_eq!(
            url,
            "http://x/api/image?boxID=1&show=a&showall=true&iou=0.5&conf=0.3\
             &hidebox=false&gridSource=single&matrixSource=valid"
        );
    }

    #[test]
    fn test_image_url_hide_box_builder() {
        let query = ImageQuery::new(7, "box", false, 0.75, 0.25).hide_box(true);
        let url = image_url("http://x", &query, GridSource::Combined, MatrixSource::Train);
        assert!(url.contains("hidebox=true"));
        assert!(url.contains("gridSource=combined"));
        assert!(url.contains("matrixSource=train"));
    }

    #[test]
    fn test_image_url_escapes_query_values() {
        // A show mode with a reserved character must not corrupt the query.
        let query = ImageQuery::new(1, "a&b", true, 0.5, 0.3);
        let url = image_url("http://x", &query, GridSource::Single, MatrixSource::Valid);
        assert!(url.contains("show=a%26b"), "got {url}");
    }
}

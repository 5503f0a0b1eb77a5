//! The selection store: one instance per running session, owned by the app
//! shell and handed by reference to whatever needs it.
//!
//! Single-threaded by design. Reads and writes are serialized by the host
//! event loop; a multi-threaded host must wrap the store itself (e.g.
//! `Arc<Mutex<SelectionStore>>`).

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::endpoints::{self, ImageQuery};
use crate::config::BACKEND;
#[cfg(debug_assertions)]
use crate::config::{PRINT_METADATA_SUMMARY, PRINT_SELECTION_CHANGES};
use crate::store::metadata::{HierarchyNode, Metadata};

/// Which dataset split the confusion matrix view queries against.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum MatrixSource {
    #[default]
    Valid,
    Train,
}

/// Which sample pool the image grid view draws from.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum GridSource {
    #[default]
    Single,
    Combined,
}

// Display writes the wire token, the same spelling serde uses. Query strings
// and JSON bodies must agree on these.
impl fmt::Display for MatrixSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixSource::Valid => write!(f, "valid"),
            MatrixSource::Train => write!(f, "train"),
        }
    }
}

impl fmt::Display for GridSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridSource::Single => write!(f, "single"),
            GridSource::Combined => write!(f, "combined"),
        }
    }
}

impl FromStr for MatrixSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "valid" => Ok(MatrixSource::Valid),
            "train" => Ok(MatrixSource::Train),
            other => bail!("unknown matrix data source {other:?} (expected \"valid\" or \"train\")"),
        }
    }
}

impl FromStr for GridSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(GridSource::Single),
            "combined" => Ok(GridSource::Combined),
            other => bail!("unknown grid data source {other:?} (expected \"single\" or \"combined\")"),
        }
    }
}

/// Current UI selection state plus the label metadata loaded from the backend.
///
/// Everything a panel derives from this (endpoint URLs included) reads the
/// fields at call time, so a source toggle is picked up by the very next
/// request the view fires.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    // Fixed at construction
    api_base: String,
    direction_len: usize,

    // Swapped in atomically by set_metadata
    label_hierarchy: Option<Vec<HierarchyNode>>,
    label_names: Vec<String>,
    data_name: String,

    matrix_source: MatrixSource,
    grid_source: GridSource,
}

impl SelectionStore {
    /// Build a store pointing at `api_base`. The base is validated up front
    /// and normalized (no trailing slash) so path joining stays dumb.
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let mut api_base = api_base.into();
        Url::parse(&api_base)
            .with_context(|| format!("invalid API base URL {api_base:?}"))?;
        while api_base.ends_with('/') {
            api_base.pop();
        }

        Ok(Self {
            api_base,
            direction_len: BACKEND.view.direction_bins,
            label_hierarchy: None,
            label_names: Vec::new(),
            data_name: String::new(),
            matrix_source: MatrixSource::default(),
            grid_source: GridSource::default(),
        })
    }

    /// Swap in freshly loaded label metadata. The three fields only ever
    /// change together, here.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        #[cfg(debug_assertions)]
        if PRINT_METADATA_SUMMARY {
            log::info!(
                "[selection] metadata loaded: {} ({} classes, {} supercategories)",
                metadata.data_name,
                metadata.names.len(),
                metadata.hierarchy.len()
            );
        }

        self.label_hierarchy = Some(metadata.hierarchy);
        self.label_names = metadata.names;
        self.data_name = metadata.data_name;
    }

    pub fn set_matrix_source(&mut self, source: MatrixSource) {
        if self.matrix_source == source {
            return;
        }
        self.matrix_source = source;

        #[cfg(debug_assertions)]
        if PRINT_SELECTION_CHANGES {
            log::info!("[selection] matrix source -> {source}");
        }
    }

    pub fn set_grid_source(&mut self, source: GridSource) {
        if self.grid_source == source {
            return;
        }
        self.grid_source = source;

        #[cfg(debug_assertions)]
        if PRINT_SELECTION_CHANGES {
            log::info!("[selection] grid source -> {source}");
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn matrix_source(&self) -> MatrixSource {
        self.matrix_source
    }

    pub fn grid_source(&self) -> GridSource {
        self.grid_source
    }

    /// `None` until the first metadata load completes.
    pub fn label_hierarchy(&self) -> Option<&[HierarchyNode]> {
        self.label_hierarchy.as_deref()
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    pub fn data_name(&self) -> &str {
        &self.data_name
    }

    /// Number of box-offset direction bins the backend precomputed. Fixed.
    pub fn direction_len(&self) -> usize {
        self.direction_len
    }

    // --- Derived endpoint URLs ---

    pub fn metadata_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::METADATA)
    }

    pub fn confusion_matrix_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::CONFUSION_MATRIX)
    }

    pub fn hover_matrix_cell_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::HOVER_MATRIX_CELL)
    }

    pub fn zoom_in_dist_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::ZOOM_IN_DIST)
    }

    /// Thumbnail URL for one box. Reads the current grid/matrix sources at
    /// call time, so toggling a source changes the URL the next call builds.
    pub fn image_url(&self, query: &ImageQuery) -> String {
        endpoints::image_url(&self.api_base, query, self.grid_source, self.matrix_source)
    }

    pub fn image_box_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::IMAGE_BOX)
    }

    pub fn images_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::IMAGES)
    }

    pub fn images_in_cell_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::IMAGES_IN_CELL)
    }

    pub fn images_in_slice_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::SHOW_SLICE)
    }

    pub fn grid_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::GRID)
    }

    pub fn class_statistics_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::CLASS_STATISTICS)
    }

    pub fn slices_url(&self) -> String {
        endpoints::join(&self.api_base, endpoints::SLICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SelectionStore {
        SelectionStore::new("http://x").unwrap()
    }

    fn sample_metadata() -> Metadata {
        Metadata {
            hierarchy: vec![HierarchyNode {
                name: "vehicle".to_string(),
                children: vec!["car".to_string(), "bus".to_string()],
            }],
            names: vec!["car".to_string(), "bus".to_string(), "background".to_string()],
            data_name: "coco2017".to_string(),
        }
    }

    #[test]
    fn test_defaults_before_any_mutation() {
        let store = store();
        assert_eq!(store.matrix_source(), MatrixSource::Valid);
        assert_eq!(store.grid_source(), GridSource::Single);
        assert!(store.label_hierarchy().is_none());
        assert!(store.label_names().is_empty());
        assert_eq!(store.data_name(), "");
        assert_eq!(store.direction_len(), 9);
    }

    #[test]
    fn test_set_metadata_replaces_all_three_fields_together() {
        let mut store = store();
        let meta = sample_metadata();
        store.set_metadata(meta.clone());

        assert_eq!(store.label_hierarchy().unwrap(), meta.hierarchy.as_slice());
        assert_eq!(store.label_names(), meta.names.as_slice());
        assert_eq!(store.data_name(), meta.data_name);
    }

    #[test]
    fn test_source_setters() {
        let mut store = store();
        store.set_matrix_source(MatrixSource::Train);
        assert_eq!(store.matrix_source(), MatrixSource::Train);
        store.set_grid_source(GridSource::Combined);
        assert_eq!(store.grid_source(), GridSource::Combined);
    }

    #[test]
    fn test_direction_len_survives_mutations() {
        let mut store = store();
        store.set_matrix_source(MatrixSource::Train);
        store.set_grid_source(GridSource::Combined);
        store.set_metadata(sample_metadata());
        assert_eq!(store.direction_len(), 9);
    }

    #[test]
    fn test_metadata_url_exact() {
        assert_eq!(store().metadata_url(), "http://x/api/metadata");
    }

    #[test]
    fn test_image_url_exact_format() {
        let store = store();
        let query = ImageQuery::new(1, "a", true, 0.5, 0.3);
        assert_eq!(
            store.image_url(&query),
            "http://x/api/image?boxID=1&show=a&showall=true&iou=0.5&conf=0.3\
             &hidebox=false&gridSource=single&matrixSource=valid"
        );
    }

    #[test]
    fn test_image_url_reads_sources_at_call_time() {
        let mut store = store();
        let query = ImageQuery::new(1, "a", true, 0.5, 0.3);

        // Toggle after building the query but before building the URL: the
        // URL must pick up the new value (live read, not capture-time read).
        store.set_grid_source(GridSource::Combined);
        let url = store.image_url(&query);
        assert!(url.contains("gridSource=combined"), "got {url}");

        store.set_matrix_source(MatrixSource::Train);
        let url = store.image_url(&query);
        assert!(url.contains("matrixSource=train"), "got {url}");
    }

    #[test]
    fn test_trailing_slash_is_normalized_away() {
        let store = SelectionStore::new("http://x/").unwrap();
        assert_eq!(store.metadata_url(), "http://x/api/metadata");
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        assert!(SelectionStore::new("not a url").is_err());
    }

    #[test]
    fn test_source_tokens_parse_and_print() {
        assert_eq!("valid".parse::<MatrixSource>().unwrap(), MatrixSource::Valid);
        assert_eq!("train".parse::<MatrixSource>().unwrap(), MatrixSource::Train);
        assert_eq!("single".parse::<GridSource>().unwrap(), GridSource::Single);
        assert_eq!("combined".parse::<GridSource>().unwrap(), GridSource::Combined);

        assert_eq!(MatrixSource::Train.to_string(), "train");
        assert_eq!(GridSource::Combined.to_string(), "combined");
    }

    #[test]
    fn test_unknown_source_tokens_are_rejected() {
        assert!("validd".parse::<MatrixSource>().is_err());
        assert!("".parse::<MatrixSource>().is_err());
        assert!("Single".parse::<GridSource>().is_err());
    }
}

//! Endpoint manifest dump: resolve the CLI/config into a selection store and
//! print every derived backend URL as JSON. Handy when wiring a backend
//! instance and checking what the front-end will actually request.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use strum::IntoEnumIterator;

use matrix_lens::{Cli, GridSource, ImageQuery, MatrixSource, SelectionStore};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the store the way the app shell would
    let mut store = SelectionStore::new(&args.api_base)
        .with_context(|| format!("bad --api-base {:?}", args.api_base))?;
    store.set_matrix_source(args.matrix_source);
    store.set_grid_source(args.grid_source);
    log::info!(
        "Deriving endpoints for {} (matrix={}, grid={})",
        store.api_base(),
        store.matrix_source(),
        store.grid_source()
    );

    // D. Sample the parametrized image endpoint across every source combination
    let sample = ImageQuery::new(0, "box", true, 0.5, 0.5);
    let image_samples: Vec<_> = MatrixSource::iter()
        .flat_map(|matrix| GridSource::iter().map(move |grid| (matrix, grid)))
        .map(|(matrix, grid)| {
            let mut probe = store.clone();
            probe.set_matrix_source(matrix);
            probe.set_grid_source(grid);
            json!({
                "matrixSource": matrix,
                "gridSource": grid,
                "url": probe.image_url(&sample),
            })
        })
        .collect();

    let manifest = json!({
        "apiBase": store.api_base(),
        "directionLen": store.direction_len(),
        "endpoints": {
            "metadata": store.metadata_url(),
            "confusionMatrix": store.confusion_matrix_url(),
            "hoverMatrixCell": store.hover_matrix_cell_url(),
            "zoomInDist": store.zoom_in_dist_url(),
            "imagebox": store.image_box_url(),
            "images": store.images_url(),
            "imagesInCell": store.images_in_cell_url(),
            "showSlice": store.images_in_slice_url(),
            "grid": store.grid_url(),
            "classStatistics": store.class_statistics_url(),
            "slices": store.slices_url(),
        },
        "image": {
            "current": store.image_url(&sample),
            "combinations": image_samples,
        },
    });

    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

//! CSV ingest into a [`Catalog`].

use std::{fs::File, io::Cursor, path::Path, time::Instant};

use polars::prelude::*;
use tracing::{debug, info};

use crate::{core::error::EdaError, data::catalog::Catalog};

/// Header row required; every row is scanned before a column type is chosen.
fn read_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
}

/// Load the catalog from `path`. No retries, no partial loads.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, EdaError> {
    let path = path.as_ref();
    let t_ingest = Instant::now();
    let file = File::open(path).map_err(|source| EdaError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let frame = CsvReader::new(file).with_options(read_options()).finish()?;
    let catalog = Catalog::from_frame(frame);

    let (rows, columns) = catalog.shape();
    info!(
        path = %path.display(),
        rows,
        columns,
        elapsed_ms = t_ingest.elapsed().as_millis(),
        "catalog loaded"
    );
    for (name, dtype) in catalog.schema() {
        debug!("  column `{name}` → {dtype}");
    }
    Ok(catalog)
}

/// Parse an in-memory CSV document.
pub fn read_catalog(bytes: impl Into<Vec<u8>>) -> Result<Catalog, EdaError> {
    let frame = CsvReader::new(Cursor::new(bytes.into()))
        .with_options(read_options())
        .finish()?;
    Ok(Catalog::from_frame(frame))
}

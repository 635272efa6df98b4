/// Data layer: loading, cleaning, and filtering.
///
/// Architecture:
/// ```text
///        .csv
///         │
///         ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable (coordinates still text)
///   └──────────┘
///         │
///         ▼
///   ┌──────────┐
///   │  cleaner  │  coerce Latitude/Longitude, drop bad rows → HospitalDataset
///   └──────────┘
///         │
///         ▼
///   ┌──────────┐
///   │  filter   │  apply selector predicates → filtered indices
///   └──────────┘
/// ```

pub mod cleaner;
pub mod filter;
pub mod loader;
pub mod model;

use std::path::Path;

use loader::LoadError;
use model::HospitalDataset;

/// Load and clean a hospital CSV.
pub fn load_dataset(path: &Path) -> Result<HospitalDataset, LoadError> {
    let table = loader::load_file(path)?;
    let dataset = cleaner::clean(table);
    log::info!(
        "Loaded {} hospitals from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

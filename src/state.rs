use std::path::PathBuf;

use crate::data::filter::{filtered_indices, FilterState, Selection};
use crate::data::model::{HospitalDataset, Selector, UserLocation};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The per-window session, independent of rendering.
pub struct AppState {
    /// Cleaned hospital records.
    pub dataset: HospitalDataset,

    /// File the dataset was read from.
    pub source: PathBuf,

    /// Current dropdown selections.
    pub filters: FilterState,

    /// Location marker and map centre.
    pub location: UserLocation,

    /// Indices of records passing the current filters, valid for one frame.
    pub visible_indices: Vec<usize>,

    /// Set when the map should jump back to `location`.
    recenter: bool,
}

impl AppState {
    pub fn new(dataset: HospitalDataset, source: PathBuf) -> Self {
        let mut state = Self {
            dataset,
            source,
            filters: FilterState::default(),
            location: UserLocation::default(),
            visible_indices: Vec::new(),
            recenter: true,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` from the cleaned dataset.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        log::trace!(
            "{} of {} hospitals match {:?}",
            self.visible_indices.len(),
            self.dataset.len(),
            self.filters
        );
    }

    pub fn select(&mut self, selector: Selector, selection: Selection) {
        self.filters.set(selector, selection);
        self.refilter();
    }

    pub fn set_location(&mut self, location: UserLocation) {
        if location != self.location {
            self.location = location;
            self.recenter = true;
        }
    }

    /// Restore every selector to "All" and the location to its default.
    pub fn reset(&mut self) {
        log::info!("Resetting filters and location");
        self.filters = FilterState::default();
        self.location = UserLocation::default();
        self.recenter = true;
        self.refilter();
    }

    /// Whether the map must re-centre this frame. Clears the request.
    pub fn take_recenter(&mut self) -> bool {
        std::mem::take(&mut self.recenter)
    }
}

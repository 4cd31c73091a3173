//! Hydro plant registry service
//!
//! Decodes the fixed-width binary plant registry (one 792-byte record per plant
//! slot) into [`HydroPlantRecord`]s and provides lookups over the decoded plants.
//! Slot order is the plant numbering used by every other input file, so it is
//! preserved exactly and blank slots are kept.

use crate::app::models::HydroPlantRecord;
use std::path::{Path, PathBuf};

pub mod decoder;
pub mod layout;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use decoder::{HydroRegistryDecoder, decode_file, decode_plant, decode_plant_with};
pub use layout::HYDRO_LAYOUT;

/// Decoded plant registry in file order
///
/// Plant numbers are 1-based slot positions.
#[derive(Debug, Clone, Default)]
pub struct HydroRegistry {
    /// Plants in slot order
    pub(crate) plants: Vec<HydroPlantRecord>,

    /// File the registry was decoded from
    pub(crate) source: Option<PathBuf>,
}

impl HydroRegistry {
    /// Wrap plants that are already in slot order
    pub fn new(plants: Vec<HydroPlantRecord>) -> Self {
        Self {
            plants,
            source: None,
        }
    }

    pub fn with_source(mut self, path: impl AsRef<Path>) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All slots, blank ones included
    pub fn plants(&self) -> &[HydroPlantRecord] {
        &self.plants
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn into_plants(self) -> Vec<HydroPlantRecord> {
        self.plants
    }
}

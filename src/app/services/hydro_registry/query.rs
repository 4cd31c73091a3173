//! Plant lookups over a decoded registry

use super::HydroRegistry;
use crate::app::models::HydroPlantRecord;

impl HydroRegistry {
    /// Plant by its 1-based number
    pub fn plant(&self, number: usize) -> Option<&HydroPlantRecord> {
        number.checked_sub(1).and_then(|i| self.plants.get(i))
    }

    /// Non-blank slots with their plant numbers
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &HydroPlantRecord)> {
        self.plants
            .iter()
            .enumerate()
            .filter(|(_, plant)| !plant.is_blank())
            .map(|(i, plant)| (i + 1, plant))
    }

    /// Plants whose name contains `pattern`, ignoring case
    pub fn find_by_name(&self, pattern: &str) -> Vec<(usize, &HydroPlantRecord)> {
        let pattern = pattern.to_lowercase();
        self.occupied()
            .filter(|(_, plant)| plant.name.to_lowercase().contains(&pattern))
            .collect()
    }

    /// Plants attached to a flow gauge
    pub fn find_by_gauge(&self, gauge_code: i32) -> Vec<(usize, &HydroPlantRecord)> {
        self.occupied()
            .filter(|(_, plant)| plant.gauge_code == gauge_code)
            .collect()
    }

    /// Plants of one subsystem, in plant number order
    pub fn plants_in_subsystem(&self, subsystem: i32) -> Vec<(usize, &HydroPlantRecord)> {
        self.occupied()
            .filter(|(_, plant)| plant.subsystem == subsystem)
            .collect()
    }

    /// Total installed capacity of the occupied slots (MW)
    pub fn installed_capacity(&self) -> f64 {
        self.occupied()
            .map(|(_, plant)| plant.installed_capacity())
            .sum()
    }
}

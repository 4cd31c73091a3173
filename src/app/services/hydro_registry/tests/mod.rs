//! Shared fixtures for hydro registry tests, including a test-only record encoder

use crate::app::models::{HydroPlantRecord, LossKind, MachineSet, Regulation};
use crate::constants::hydro::{
    GAUGE_EXTENDED_WIDTH, MAX_MACHINE_SETS, NAME_WIDTH, RECORD_SIZE, RESERVED_WIDTH,
    TAILRACE_COEFFICIENTS,
};


/// A fully populated plant; every float is exactly representable in f32
pub fn sample_plant() -> HydroPlantRecord {
    let mut tailrace_polynomial = vec![0.0; TAILRACE_COEFFICIENTS];
    tailrace_polynomial[..6].copy_from_slice(&[670.5, 0.0625, -0.0001220703125, 0.0, 0.0, 672.0]);
    tailrace_polynomial[6..12].copy_from_slice(&[671.0, 0.03125, 0.0, 0.0, 0.0, 675.0]);

    HydroPlantRecord {
        name: "FURNAS".to_string(),
        gauge_code: 6,
        gauge_extended_code: "61661000".to_string(),
        subsystem: 1,
        company: 12,
        downstream_plant: 7,
        diversion_plant: 0,
        min_volume: 5733.0,
        max_volume: 22950.0,
        spillway_volume: 22950.0,
        diversion_volume: 0.0,
        min_elevation: 750.0,
        max_elevation: 768.0,
        volume_elevation: [735.5, 0.0078125, -1.9073486328125e-6, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        elevation_area: [-4096.0, 12.5, 0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        evaporation: [41, 37, 36, 34, 26, 19, 15, 22, 40, 52, 46, 39],
        machine_sets: vec![
            MachineSet {
                units: 6,
                unit_capacity_mw: 152.0,
                nominal_head_m: 90.5,
                nominal_flow_m3s: 192,
            },
            MachineSet {
                units: 2,
                unit_capacity_mw: 180.25,
                nominal_head_m: 90.5,
                nominal_flow_m3s: 222,
            },
        ],
        tailrace_polynomial,
        tailrace_family_count: 2,
        specific_productivity: 0.0087890625,
        losses: 1.5,
        loss_kind: LossKind::Percent,
        average_tailrace_elevation: 671.5,
        spillage_affects_tailrace: true,
        forced_outage_rate: 2.25,
        scheduled_outage_rate: 5.5,
        turbine_kind: 1,
        historical_min_outflow: 200,
        regulation: Regulation::Monthly,
        minimum_outflow: 200.0,
        maximum_outflow: 4500.0,
        nominal_efficiency: 0.9375,
        pumping: false,
        pumping_consumption: 0.0,
        in_operation: true,
        revision: 3,
    }
}

/// An unused registry slot
pub fn blank_plant() -> HydroPlantRecord {
    HydroPlantRecord {
        name: String::new(),
        gauge_code: 0,
        gauge_extended_code: String::new(),
        subsystem: 0,
        company: 0,
        downstream_plant: 0,
        diversion_plant: 0,
        min_volume: 0.0,
        max_volume: 0.0,
        spillway_volume: 0.0,
        diversion_volume: 0.0,
        min_elevation: 0.0,
        max_elevation: 0.0,
        volume_elevation: [0.0; 10],
        elevation_area: [0.0; 10],
        evaporation: [0; 12],
        machine_sets: Vec::new(),
        tailrace_polynomial: vec![0.0; TAILRACE_COEFFICIENTS],
        tailrace_family_count: 0,
        specific_productivity: 0.0,
        losses: 0.0,
        loss_kind: LossKind::Unset,
        average_tailrace_elevation: 0.0,
        spillage_affects_tailrace: false,
        forced_outage_rate: 0.0,
        scheduled_outage_rate: 0.0,
        turbine_kind: 0,
        historical_min_outflow: 0,
        regulation: Regulation::Unspecified,
        minimum_outflow: 0.0,
        maximum_outflow: 0.0,
        nominal_efficiency: 0.0,
        pumping: false,
        pumping_consumption: 0.0,
        in_operation: false,
        revision: 0,
    }
}

/// Encode a plant into its 792-byte registry record
pub fn encode_plant(plant: &HydroPlantRecord) -> Vec<u8> {
    let mut out = RecordWriter::default();

    out.text(&plant.name, NAME_WIDTH);
    out.i32(plant.gauge_code);
    out.text(&plant.gauge_extended_code, GAUGE_EXTENDED_WIDTH);
    out.i32(plant.subsystem);
    out.i32(plant.company);
    out.i32(plant.downstream_plant);
    out.i32(plant.diversion_plant);
    for value in [
        plant.min_volume,
        plant.max_volume,
        plant.spillway_volume,
        plant.diversion_volume,
        plant.min_elevation,
        plant.max_elevation,
    ] {
        out.f32(value);
    }
    plant.volume_elevation.iter().for_each(|v| out.f32(*v));
    plant.elevation_area.iter().for_each(|v| out.f32(*v));
    plant.evaporation.iter().for_each(|v| out.i32(*v));

    out.i32(plant.machine_sets.len() as i32);
    let set = |i: usize| plant.machine_sets.get(i).copied();
    (0..MAX_MACHINE_SETS).for_each(|i| out.i32(set(i).map_or(0, |s| s.units)));
    (0..MAX_MACHINE_SETS).for_each(|i| out.f32(set(i).map_or(0.0, |s| s.unit_capacity_mw)));
    (0..MAX_MACHINE_SETS).for_each(|i| out.f32(set(i).map_or(0.0, |s| s.nominal_head_m)));
    (0..MAX_MACHINE_SETS).for_each(|i| out.i32(set(i).map_or(0, |s| s.nominal_flow_m3s)));

    plant.tailrace_polynomial.iter().for_each(|v| out.f32(*v));
    out.f32(plant.specific_productivity);
    out.f32(plant.losses);
    out.i32(match plant.loss_kind {
        LossKind::Unset => 0,
        LossKind::Percent => 1,
        LossKind::Metres => 2,
    });
    out.i32(plant.tailrace_family_count as i32);
    out.f32(plant.average_tailrace_elevation);
    out.i32(plant.spillage_affects_tailrace as i32);
    out.f32(plant.forced_outage_rate);
    out.f32(plant.scheduled_outage_rate);
    out.i32(plant.turbine_kind);
    out.i32(plant.historical_min_outflow);
    out.text(plant.regulation.code(), 4);
    out.f32(plant.minimum_outflow);
    out.f32(plant.maximum_outflow);
    out.f32(plant.nominal_efficiency);
    out.i32(plant.pumping as i32);
    out.f32(plant.pumping_consumption);
    out.i32(plant.in_operation as i32);
    out.i32(plant.revision);
    out.bytes.extend(std::iter::repeat_n(0u8, RESERVED_WIDTH));

    assert_eq!(out.bytes.len(), RECORD_SIZE);
    out.bytes
}

/// Overwrite the i32 at `offset` of an encoded record
pub fn patch_i32(record: &mut [u8], offset: usize, value: i32) {
    record[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[derive(Default)]
struct RecordWriter {
    bytes: Vec<u8>,
}

impl RecordWriter {
    fn i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn f32(&mut self, value: f64) {
        self.bytes.extend_from_slice(&(value as f32).to_le_bytes());
    }

    fn text(&mut self, value: &str, width: usize) {
        let mut field = value.as_bytes().to_vec();
        field.resize(width, b' ');
        self.bytes.extend_from_slice(&field);
    }
}

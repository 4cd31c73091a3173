//! Decoding of hydro plant registry records
//!
//! Field order and widths follow the registry file format exactly. The 300-byte
//! reserved tail is skipped and never read into any field.

use super::HydroRegistry;
use crate::app::adapters::filesystem::{FileSource, LocalFileSystem};
use crate::app::models::{HydroPlantRecord, LossKind, MachineSet, Regulation};
use crate::app::services::binary_reader::{RecordCursor, RecordSet, read_records_from};
use crate::app::services::field_extraction::validation;
use crate::config::DecoderConfig;
use crate::constants::hydro::{
    GAUGE_EXTENDED_WIDTH, MAX_MACHINE_SETS, MONTHS, NAME_WIDTH, POLYNOMIAL_DEGREE_SLOTS,
    RECORD_SIZE, REGULATION_WIDTH, RESERVED_WIDTH, TAILRACE_COEFFICIENTS, TAILRACE_FAMILIES,
};
use crate::error::{DecodeError, DecodeResult};
use crate::Result;
use std::path::Path;
use tracing::{debug, info};

/// Decode one 792-byte registry record with the default configuration
pub fn decode_plant(buffer: &[u8]) -> DecodeResult<HydroPlantRecord> {
    decode_plant_with(buffer, &DecoderConfig::default())
}

/// Decode one 792-byte registry record
///
/// Range and field errors are located at the byte offset of the offending field
/// within `buffer`.
pub fn decode_plant_with(buffer: &[u8], config: &DecoderConfig) -> DecodeResult<HydroPlantRecord> {
    if buffer.len() != RECORD_SIZE {
        return Err(DecodeError::structural(format!(
            "hydro record has {} bytes, expected {}",
            buffer.len(),
            RECORD_SIZE
        )));
    }

    let trim = config.trim_padding;
    let mut cursor = RecordCursor::with_encoding(buffer, config.text_encoding);

    // Identity
    let name = cursor.read_fixed_string(NAME_WIDTH, trim)?;
    let gauge_code = cursor.read_i32_le()?;
    let gauge_extended_code = cursor.read_fixed_string(GAUGE_EXTENDED_WIDTH, trim)?;
    let subsystem = cursor.read_i32_le()?;
    let company = cursor.read_i32_le()?;
    let downstream_plant = cursor.read_i32_le()?;
    let diversion_plant = cursor.read_i32_le()?;

    // Storage and elevation bounds
    let bounds_offset = cursor.position();
    let [
        min_volume,
        max_volume,
        spillway_volume,
        diversion_volume,
        min_elevation,
        max_elevation,
    ] = cursor.read_array::<f32, 6>()?.map(f64::from);
    if min_volume > max_volume {
        return Err(DecodeError::range(
            "min_volume",
            format!(
                "minimum volume {} exceeds maximum volume {}",
                min_volume, max_volume
            ),
        )
        .at_byte(bounds_offset as u64));
    }

    let volume_elevation = cursor
        .read_array::<f32, POLYNOMIAL_DEGREE_SLOTS>()?
        .map(f64::from);
    let elevation_area = cursor
        .read_array::<f32, POLYNOMIAL_DEGREE_SLOTS>()?
        .map(f64::from);
    let evaporation = cursor.read_array::<i32, MONTHS>()?;

    // Machine sets
    let count_offset = cursor.position();
    let set_count = cursor.read_i32_le()?;
    validation::range("machine_set_count", set_count, 0, MAX_MACHINE_SETS as i32)
        .map_err(|e| e.at_byte(count_offset as u64))?;

    let units = cursor.read_array::<i32, MAX_MACHINE_SETS>()?;
    let unit_capacity = cursor.read_array::<f32, MAX_MACHINE_SETS>()?;
    let nominal_head = cursor.read_array::<f32, MAX_MACHINE_SETS>()?;
    let nominal_flow = cursor.read_array::<i32, MAX_MACHINE_SETS>()?;
    let machine_sets = (0..set_count as usize)
        .map(|i| MachineSet {
            units: units[i],
            unit_capacity_mw: unit_capacity[i].into(),
            nominal_head_m: nominal_head[i].into(),
            nominal_flow_m3s: nominal_flow[i],
        })
        .collect();

    let tailrace_polynomial = cursor
        .read_vec::<f32>(TAILRACE_COEFFICIENTS)?
        .into_iter()
        .map(f64::from)
        .collect();

    // Operating parameters
    let specific_productivity = f64::from(cursor.read_f32_le()?);
    let losses = f64::from(cursor.read_f32_le()?);

    let loss_kind_offset = cursor.position();
    let loss_code = cursor.read_i32_le()?;
    let loss_kind = LossKind::from_code(loss_code).ok_or_else(|| {
        DecodeError::range("loss_kind", format!("value {} outside [0, 2]", loss_code))
            .at_byte(loss_kind_offset as u64)
    })?;

    let family_offset = cursor.position();
    let family_count = cursor.read_i32_le()?;
    validation::range("tailrace_family_count", family_count, 0, TAILRACE_FAMILIES as i32)
        .map_err(|e| e.at_byte(family_offset as u64))?;

    let average_tailrace_elevation = f64::from(cursor.read_f32_le()?);
    let spillage_affects_tailrace = read_flag(&mut cursor, "spillage_affects_tailrace")?;
    let forced_outage_rate = f64::from(cursor.read_f32_le()?);
    let scheduled_outage_rate = f64::from(cursor.read_f32_le()?);
    let turbine_kind = cursor.read_i32_le()?;
    let historical_min_outflow = cursor.read_i32_le()?;

    let regulation_offset = cursor.position();
    let regulation_code = cursor.read_fixed_string(REGULATION_WIDTH, true)?;
    let regulation = Regulation::from_code(&regulation_code).ok_or_else(|| {
        DecodeError::field(
            "regulation",
            format!("unknown regulation code '{}'", regulation_code),
        )
        .at_byte(regulation_offset as u64)
        .with_bytes(&buffer[regulation_offset..regulation_offset + REGULATION_WIDTH])
    })?;

    let minimum_outflow = f64::from(cursor.read_f32_le()?);
    let maximum_outflow = f64::from(cursor.read_f32_le()?);
    let nominal_efficiency = f64::from(cursor.read_f32_le()?);
    let pumping = read_flag(&mut cursor, "pumping")?;
    let pumping_consumption = f64::from(cursor.read_f32_le()?);
    let in_operation = read_flag(&mut cursor, "in_operation")?;
    let revision = cursor.read_i32_le()?;

    cursor.skip(RESERVED_WIDTH)?;

    Ok(HydroPlantRecord {
        name,
        gauge_code,
        gauge_extended_code,
        subsystem,
        company,
        downstream_plant,
        diversion_plant,
        min_volume,
        max_volume,
        spillway_volume,
        diversion_volume,
        min_elevation,
        max_elevation,
        volume_elevation,
        elevation_area,
        evaporation,
        machine_sets,
        tailrace_polynomial,
        tailrace_family_count: family_count as usize,
        specific_productivity,
        losses,
        loss_kind,
        average_tailrace_elevation,
        spillage_affects_tailrace,
        forced_outage_rate,
        scheduled_outage_rate,
        turbine_kind,
        historical_min_outflow,
        regulation,
        minimum_outflow,
        maximum_outflow,
        nominal_efficiency,
        pumping,
        pumping_consumption,
        in_operation,
        revision,
    })
}

/// 0/1 integer flag
fn read_flag(cursor: &mut RecordCursor<'_>, field: &str) -> DecodeResult<bool> {
    let offset = cursor.position();
    match cursor.read_i32_le()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(
            DecodeError::range(field, format!("flag value {} is neither 0 nor 1", other))
                .at_byte(offset as u64),
        ),
    }
}

/// Decoder for whole plant registry files
#[derive(Debug, Clone, Default)]
pub struct HydroRegistryDecoder {
    config: DecoderConfig,
}

impl HydroRegistryDecoder {
    /// Create a decoder, validating the configuration
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode every record of a registry file from the local filesystem
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Vec<HydroPlantRecord>> {
        self.decode_file_from(&LocalFileSystem, path)
    }

    /// Decode every record of a registry file read through `source`
    pub fn decode_file_from(
        &self,
        source: &impl FileSource,
        path: impl AsRef<Path>,
    ) -> Result<Vec<HydroPlantRecord>> {
        let records = read_records_from(source, path, RECORD_SIZE)?;
        Ok(self.decode_records(&records)?)
    }

    /// Decode an already split record set, in file order
    ///
    /// The first failing record aborts the whole file.
    pub fn decode_records(&self, records: &RecordSet) -> DecodeResult<Vec<HydroPlantRecord>> {
        let plants = records
            .iter()
            .map(|record| {
                decode_plant_with(record.bytes, &self.config).map_err(|e| {
                    e.in_record(record.index, record.offset)
                        .in_file(records.path())
                })
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        let occupied = plants.iter().filter(|plant| !plant.is_blank()).count();
        info!(
            "Decoded {} hydro plant slots ({} occupied) from {}",
            plants.len(),
            occupied,
            records.path().display()
        );

        Ok(plants)
    }

    /// Decode a registry file into a queryable [`HydroRegistry`]
    pub fn load(&self, source: &impl FileSource, path: impl AsRef<Path>) -> Result<HydroRegistry> {
        let path = path.as_ref();
        let plants = self.decode_file_from(source, path)?;
        debug!("Indexed {} plants from {}", plants.len(), path.display());
        Ok(HydroRegistry::new(plants).with_source(path))
    }
}

/// Decode a registry file from the local filesystem with the default configuration
pub fn decode_file(path: impl AsRef<Path>) -> Result<Vec<HydroPlantRecord>> {
    HydroRegistryDecoder::default().decode_file(path)
}

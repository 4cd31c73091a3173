//! The plant registry record as a generic binary layout

use crate::app::services::binary_reader::{BinaryField, layout_width};
use crate::constants::hydro::{
    GAUGE_EXTENDED_WIDTH, MAX_MACHINE_SETS, MONTHS, NAME_WIDTH, POLYNOMIAL_DEGREE_SLOTS,
    RECORD_SIZE, REGULATION_WIDTH, RESERVED_WIDTH, TAILRACE_COEFFICIENTS,
};

/// Registry record layout for [`decode_record`](crate::app::services::binary_reader::decode_record)
pub const HYDRO_LAYOUT: &[BinaryField] = &[
    BinaryField::text("name", NAME_WIDTH),
    BinaryField::i32("gauge_code"),
    BinaryField::text("gauge_extended_code", GAUGE_EXTENDED_WIDTH),
    BinaryField::i32("subsystem"),
    BinaryField::i32("company"),
    BinaryField::i32("downstream_plant"),
    BinaryField::i32("diversion_plant"),
    BinaryField::f32("min_volume"),
    BinaryField::f32("max_volume"),
    BinaryField::f32("spillway_volume"),
    BinaryField::f32("diversion_volume"),
    BinaryField::f32("min_elevation"),
    BinaryField::f32("max_elevation"),
    BinaryField::f32_array("volume_elevation", POLYNOMIAL_DEGREE_SLOTS),
    BinaryField::f32_array("elevation_area", POLYNOMIAL_DEGREE_SLOTS),
    BinaryField::i32_array("evaporation", MONTHS),
    BinaryField::i32("machine_set_count"),
    BinaryField::i32_array("units_per_set", MAX_MACHINE_SETS),
    BinaryField::f32_array("unit_capacity", MAX_MACHINE_SETS),
    BinaryField::f32_array("nominal_head", MAX_MACHINE_SETS),
    BinaryField::i32_array("nominal_flow", MAX_MACHINE_SETS),
    BinaryField::f32_array("tailrace_polynomial", TAILRACE_COEFFICIENTS),
    BinaryField::f32("specific_productivity"),
    BinaryField::f32("losses"),
    BinaryField::i32("loss_kind"),
    BinaryField::i32("tailrace_family_count"),
    BinaryField::f32("average_tailrace_elevation"),
    BinaryField::i32("spillage_affects_tailrace"),
    BinaryField::f32("forced_outage_rate"),
    BinaryField::f32("scheduled_outage_rate"),
    BinaryField::i32("turbine_kind"),
    BinaryField::i32("historical_min_outflow"),
    BinaryField::text("regulation", REGULATION_WIDTH),
    BinaryField::f32("minimum_outflow"),
    BinaryField::f32("maximum_outflow"),
    BinaryField::f32("nominal_efficiency"),
    BinaryField::i32("pumping"),
    BinaryField::f32("pumping_consumption"),
    BinaryField::i32("in_operation"),
    BinaryField::i32("revision"),
    BinaryField::reserved(RESERVED_WIDTH),
];

const _: () = assert!(layout_width(HYDRO_LAYOUT) == RECORD_SIZE);

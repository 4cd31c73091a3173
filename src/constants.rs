//! Format constants for the decoded record layouts
//!
//! Record widths, array lengths and sentinel values fixed by the external file
//! formats. Changing any of these breaks bit-exact compatibility.

// =============================================================================
// Hydro Plant Registry (HIDR.DAT)
// =============================================================================

pub mod hydro {
    /// Width of one plant record in bytes
    pub const RECORD_SIZE: usize = 792;

    /// Width of the plant name field
    pub const NAME_WIDTH: usize = 12;

    /// Width of the extended gauge code field
    pub const GAUGE_EXTENDED_WIDTH: usize = 8;

    /// Coefficients in the volume-elevation and elevation-area polynomials
    pub const POLYNOMIAL_DEGREE_SLOTS: usize = 10;

    /// Monthly evaporation coefficients
    pub const MONTHS: usize = 12;

    /// Maximum number of machine sets per plant
    pub const MAX_MACHINE_SETS: usize = 5;

    /// Coefficients in the tailrace polynomial block
    pub const TAILRACE_COEFFICIENTS: usize = 36;

    /// Tailrace polynomial families stored in the tailrace block
    pub const TAILRACE_FAMILIES: usize = 6;

    /// Values per tailrace family (5 coefficients + reference level)
    pub const TAILRACE_FAMILY_WIDTH: usize = 6;

    /// Width of the regulation code field
    pub const REGULATION_WIDTH: usize = 4;

    /// Byte offset where the reserved tail starts
    pub const RESERVED_OFFSET: usize = 492;

    /// Width of the reserved tail
    pub const RESERVED_WIDTH: usize = 300;
}

// =============================================================================
// Future Cost Function Cuts (cortes.dat)
// =============================================================================

pub mod cuts {
    /// Width of one cut record in bytes
    pub const RECORD_SIZE: usize = 1664;

    /// Width of the cut header in bytes
    pub const HEADER_SIZE: usize = 16;

    /// State coefficients per cut
    pub const COEFFICIENTS: usize = 206;

    /// Default next-index value that ends a chain
    pub const DEFAULT_TERMINATOR: i32 = 0;

    /// Active flag values
    pub const FLAG_INACTIVE: u8 = 0;
    pub const FLAG_ACTIVE: u8 = 1;
}

/// Default verbosity for the command line front end
pub const DEFAULT_LOG_LEVEL: &str = "warn";

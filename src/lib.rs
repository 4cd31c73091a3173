//! NEWAVE Decoder Library
//!
//! A Rust library for decoding the fixed-width text and binary record formats of
//! the NEWAVE hydrothermal dispatch planning model into typed structures.
//!
//! This library provides tools for:
//! - Declarative fixed-column extraction of text records with validation
//! - Cursor-based and table-driven decoding of little-endian binary records
//! - Decoding the hydro plant registry (HIDR.DAT) with its nested polynomials
//! - Rebuilding the linked chains of the future cost function cut pool
//! - Locating every decoding failure by file, record, line and byte offset

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod binary_reader;
        pub mod cut_chains;
        pub mod field_extraction;
        pub mod format_registry;
        pub mod hydro_registry;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FCFCut, FCFCutRaw, HydroPlantRecord, Record, Value};
pub use app::services::cut_chains::{ChainHeads, CutChain, FCFCutsCollection, HeadSource};
pub use app::services::hydro_registry::HydroRegistry;
pub use config::DecoderConfig;
pub use error::{DecodeError, DecodeErrorKind, DecodeResult, Error, Result};

//! Error handling for record decoding operations.
//!
//! [`DecodeError`] is the single error produced by the field extraction engine and
//! the binary decoders. It is tagged by [`DecodeErrorKind`] and accumulates its
//! location (file, line, byte offset, record index) as it propagates outwards.
//! [`Error`] wraps it together with the file access failures, which are kept apart
//! from decoding failures.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum number of raw bytes kept as context on a decode error
const BYTE_SNIPPET_LEN: usize = 16;

/// Maximum number of characters kept from a raw text line
const TEXT_SNIPPET_LEN: usize = 120;

/// Sub-kind of a [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecodeErrorKind {
    /// Missing required field or type coercion failure
    Field,
    /// Value outside its declared bounds
    Range,
    /// File/record size mismatch, truncated record, bad next-index, cyclic chain
    Structural,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::Field => write!(f, "field"),
            DecodeErrorKind::Range => write!(f, "range"),
            DecodeErrorKind::Structural => write!(f, "structural"),
        }
    }
}

/// Position of a failure inside its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Locator {
    #[default]
    Unknown,
    /// 1-based line number in a text file
    Line(usize),
    /// Byte offset in a buffer or file
    Byte(u64),
    /// 0-based record index, with the absolute byte offset when known
    Record {
        index: usize,
        byte_offset: Option<u64>,
    },
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Unknown => write!(f, "unknown position"),
            Locator::Line(line) => write!(f, "line {}", line),
            Locator::Byte(offset) => write!(f, "byte {}", offset),
            Locator::Record {
                index,
                byte_offset: Some(offset),
            } => write!(f, "record {} (byte {})", index, offset),
            Locator::Record {
                index,
                byte_offset: None,
            } => write!(f, "record {}", index),
        }
    }
}

/// Raw input captured at the failure site
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ErrorContext {
    #[default]
    None,
    Text(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorContext::None => Ok(()),
            ErrorContext::Text(text) => write!(f, "{:?}", text),
            ErrorContext::Bytes(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// The single decoding error
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "{kind} error{}: {message}{}",
    describe_location(.file, .locator, .field),
    describe_context(.context)
)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    file: Option<PathBuf>,
    locator: Locator,
    field: Option<String>,
    context: ErrorContext,
    message: String,
}

fn describe_location(file: &Option<PathBuf>, locator: &Locator, field: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(file) = file {
        out.push_str(&format!(" in '{}'", file.display()));
    }
    if *locator != Locator::Unknown {
        out.push_str(&format!(" at {}", locator));
    }
    if let Some(field) = field {
        out.push_str(&format!(" [field '{}']", field));
    }
    out
}

fn describe_context(context: &ErrorContext) -> String {
    match context {
        ErrorContext::None => String::new(),
        other => format!(" (input: {})", other),
    }
}

impl DecodeError {
    fn new(kind: DecodeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            file: None,
            locator: Locator::Unknown,
            field: None,
            context: ErrorContext::None,
            message: message.into(),
        }
    }

    /// Create a field error (missing required value or coercion failure)
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::Field, message).for_field(name)
    }

    /// Create a range error for a value outside its declared bounds
    pub fn range(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::Range, message).for_field(name)
    }

    /// Create a structural error
    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::Structural, message)
    }

    /// Attach the source file
    pub fn in_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Locate the error at a 1-based line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.locator = Locator::Line(line);
        self
    }

    /// Locate the error at a byte offset
    pub fn at_byte(mut self, offset: u64) -> Self {
        self.locator = Locator::Byte(offset);
        self
    }

    /// Locate the error inside record `index`, which starts at `record_start`.
    ///
    /// A byte offset already recorded relative to the record buffer is rebased onto
    /// the file.
    pub fn in_record(mut self, index: usize, record_start: u64) -> Self {
        let byte_offset = match self.locator {
            Locator::Byte(offset) => Some(record_start + offset),
            Locator::Record {
                byte_offset: Some(offset),
                ..
            } => Some(record_start + offset),
            _ => Some(record_start),
        };
        self.locator = Locator::Record { index, byte_offset };
        self
    }

    /// Name the field the error refers to
    pub fn for_field(mut self, name: impl Into<String>) -> Self {
        self.field = Some(name.into());
        self
    }

    /// Keep the raw text line as context
    pub fn with_text(mut self, raw: &str) -> Self {
        self.context = ErrorContext::Text(raw.chars().take(TEXT_SNIPPET_LEN).collect());
        self
    }

    /// Keep a snippet of raw bytes as context
    pub fn with_bytes(mut self, raw: &[u8]) -> Self {
        let len = raw.len().min(BYTE_SNIPPET_LEN);
        self.context = ErrorContext::Bytes(raw[..len].to_vec());
        self
    }

    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn locator(&self) -> Locator {
        self.locator
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Crate-level error, separating file access from decoding
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding failed
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invalid decoder configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Query state vector does not match the cut dimension
    #[error("State vector has {found} components, cuts carry {expected} coefficients")]
    StateDimension { expected: usize, found: usize },

    /// No decoder is registered for a file name
    #[error("No decoder registered for file '{file_name}'")]
    UnknownFormat { file_name: String },
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an I/O error for a file
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a state dimension error
    pub fn state_dimension(expected: usize, found: usize) -> Self {
        Self::StateDimension { expected, found }
    }

    /// Create an unknown format error
    pub fn unknown_format(file_name: impl Into<String>) -> Self {
        Self::UnknownFormat {
            file_name: file_name.into(),
        }
    }

    /// The decode error, if this is one
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result type for the decoding primitives, which only ever fail with [`DecodeError`]
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

//! Declarative field specifications for fixed-column text records
//!
//! A layout is a `&'static [FieldSpec]` table defined once per record type.

use crate::app::models::Value;

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Float,
    Text,
}

/// Constant default substituted for a blank optional field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl Literal {
    pub fn to_value(self) -> Value {
        match self {
            Literal::Int(v) => Value::Int(v),
            Literal::Float(v) => Value::Float(v),
            Literal::Text(s) => Value::Text(s.to_string()),
        }
    }
}

/// Validation rule applied to numeric fields after coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Inclusive bounds
    Range { min: f64, max: f64 },
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
}

/// 1-based inclusive column range, as printed in the format manuals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub start: usize,
    pub end: usize,
}

impl Columns {
    /// Number of columns covered; zero for an invalid range
    pub fn width(&self) -> usize {
        if self.is_valid() {
            self.end - self.start + 1
        } else {
            0
        }
    }

    /// Columns start at 1 and the range is not reversed
    pub const fn is_valid(&self) -> bool {
        self.start >= 1 && self.start <= self.end
    }
}

/// One field of a fixed-column text layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub columns: Columns,
    pub field_type: FieldType,
    pub required: bool,
    pub default: Option<Literal>,
    pub rule: Option<Rule>,
}

impl FieldSpec {
    /// Required field occupying columns `start..=end`
    pub const fn new(name: &'static str, start: usize, end: usize, field_type: FieldType) -> Self {
        let columns = Columns { start, end };
        assert!(columns.is_valid(), "invalid column range");
        Self {
            name,
            columns,
            field_type,
            required: true,
            default: None,
            rule: None,
        }
    }

    pub const fn integer(name: &'static str, start: usize, end: usize) -> Self {
        Self::new(name, start, end, FieldType::Integer)
    }

    pub const fn float(name: &'static str, start: usize, end: usize) -> Self {
        Self::new(name, start, end, FieldType::Float)
    }

    pub const fn text(name: &'static str, start: usize, end: usize) -> Self {
        Self::new(name, start, end, FieldType::Text)
    }

    /// Blank values are allowed and leave the field absent
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Blank values are replaced by `default`
    pub const fn with_default(mut self, default: Literal) -> Self {
        self.required = false;
        self.default = Some(default);
        self
    }

    pub const fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub const fn in_range(self, min: f64, max: f64) -> Self {
        self.with_rule(Rule::Range { min, max })
    }

    pub const fn positive(self) -> Self {
        self.with_rule(Rule::Positive)
    }

    pub const fn nonnegative(self) -> Self {
        self.with_rule(Rule::NonNegative)
    }
}

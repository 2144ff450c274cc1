//! Typed positional parameters for stored-function calls.
//!
//! Every parameter carries its PostgreSQL type so the generated call can cast
//! each placeholder explicitly (`$1::int4`). That keeps overload resolution
//! deterministic even when a value is `NULL`.

use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(Option<i32>),
    Text(Option<String>),
    /// Decimal amount in its textual form; cast server-side to `numeric`.
    Numeric(String),
    Bool(Option<bool>),
    Date(Option<NaiveDate>),
    Json(Value),
}

impl SqlParam {
    pub fn int(value: i32) -> Self {
        Self::Int(Some(value))
    }

    pub fn opt_int(value: Option<i32>) -> Self {
        Self::Int(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Some(value.into()))
    }

    pub fn numeric(value: f64) -> Self {
        Self::Numeric(value.to_string())
    }

    pub fn bool(value: bool) -> Self {
        Self::Bool(Some(value))
    }

    pub fn opt_date(value: Option<NaiveDate>) -> Self {
        Self::Date(value)
    }

    /// Serializes any value into a `jsonb` parameter.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Json)
    }

    /// PostgreSQL type the placeholder is cast to.
    pub fn pg_type(&self) -> &'static str {
        match self {
            Self::Int(_) => "int4",
            Self::Text(_) => "text",
            Self::Numeric(_) => "numeric",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::Json(_) => "jsonb",
        }
    }
}

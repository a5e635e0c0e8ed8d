//! Record-to-column/value mapping for INSERT and UPDATE statements.
//!
//! A [`Record`] is a flat set of named, typed fields. `build_insert` and
//! `build_update` turn it into a column list and an inline value list
//! without any `select`/`where` calls. Implementations are usually
//! generated with `#[derive(Record)]`, which derives each column name from
//! the field identifier (lower snake_case) unless overridden with
//! `#[sqlb(column = "...")]`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::BuildResult;
use crate::sanitise::sanitise;

/// A typed SQL value for one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Character data, rendered sanitised and single-quoted.
    Text(String),
    /// Any signed integer width, rendered as decimal text.
    Int(i64),
    /// Rendered with fixed six decimal places.
    Float(f64),
    /// Rendered as the literals `TRUE` / `FALSE`.
    Bool(bool),
    /// Rendered as `'YYYY-MM-DD HH:MM:SS'`, no timezone, no fractional
    /// seconds.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Render the value as inline SQL text.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => format!("'{}'", sanitise(s)),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format!("{f:.6}"),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Conversion from a supported field type into a [`Value`].
///
/// Implemented for the closed set of mappable kinds: strings, signed
/// integers, floats, bool, and chrono timestamps. A derived record whose
/// field type is outside this set fails to compile against this bound.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl ToValue for i8 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl ToValue for i16 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.naive_utc())
    }
}

/// A flat, named, typed set of fields mappable to columns and values.
///
/// Column names are returned bare; the builder applies dialect quoting
/// when assembling the statement. Hand-written implementations may reject
/// fields they cannot render with
/// [`BuildError::unsupported_type`](crate::BuildError::unsupported_type).
pub trait Record {
    /// Column name / value pairs, in field order.
    fn fields(&self) -> BuildResult<Vec<(String, Value)>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn text_is_sanitised_and_quoted() {
        assert_eq!(Value::Text("mystring".into()).render(), "'mystring'");
        assert_eq!(Value::Text("it's".into()).render(), "'it''s'");
    }

    #[test]
    fn ints_render_as_decimal() {
        assert_eq!(Value::Int(-42).render(), "-42");
        assert_eq!(7i8.to_value().render(), "7");
    }

    #[test]
    fn floats_render_with_six_decimals() {
        assert_eq!(Value::Float(1.1).render(), "1.100000");
        assert_eq!(1.2f32.to_value().render(), "1.200000");
    }

    #[test]
    fn bools_render_as_keywords() {
        assert_eq!(Value::Bool(true).render(), "TRUE");
        assert_eq!(Value::Bool(false).render(), "FALSE");
    }

    #[test]
    fn timestamps_render_without_timezone() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(17, 30, 0)
            .unwrap();
        assert_eq!(Value::Timestamp(ts).render(), "'2024-03-05 17:30:00'");
    }
}

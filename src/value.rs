//! Typed literal values
//!
//! [`LiteralValue`] is the output type of the whole crate: the literal
//! evaluator, the assignment parser and the call parser all produce it.
//! Equality and hashing are total — floats go through `OrderedFloat`, so
//! any value can be a set element or mapping key.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use serde::ser::{Serialize, Serializer};
use uuid::Uuid;

/// A parsed literal value
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `null` / `None`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Float literal (total ordering, NaN == NaN)
    Float(OrderedFloat<f64>),
    /// String literal, or a raw input passed through unchanged
    Str(String),
    /// `[1, 2]` — ordered
    List(Vec<LiteralValue>),
    /// `(1, 2)` — ordered, fixed arity
    Tuple(Vec<LiteralValue>),
    /// `{1, 2}` — unique elements, insertion order kept
    Set(IndexSet<LiteralValue>),
    /// `{'a': 1}` — unique keys, insertion order kept
    Mapping(IndexMap<LiteralValue, LiteralValue>),
    /// Coerced from e.g. `2020-01-01T00:00:00`; explicit offsets are
    /// normalized to UTC and dropped
    DateTime(NaiveDateTime),
    /// Coerced from `2020-01-01`
    Date(NaiveDate),
    /// Coerced from `00:30:00`
    Time(NaiveTime),
    /// Coerced from `0:00:05` or `P3DT10H`
    Duration(TimeDelta),
    /// Coerced from a UUID string
    UniqueId(Uuid),
    /// An unresolved dotted identifier, produced only by the assignment
    /// parser's lenient recovery path
    DeferredName(String),
}

impl LiteralValue {
    /// Build a float value from a plain f64
    pub fn float(value: f64) -> Self {
        LiteralValue::Float(OrderedFloat(value))
    }

    /// Build a string value
    pub fn str(value: impl Into<String>) -> Self {
        LiteralValue::Str(value.into())
    }

    /// Short noun for error messages and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralValue::Null => "null",
            LiteralValue::Bool(_) => "boolean",
            LiteralValue::Int(_) => "integer",
            LiteralValue::Float(_) => "float",
            LiteralValue::Str(_) => "string",
            LiteralValue::List(_) => "list",
            LiteralValue::Tuple(_) => "tuple",
            LiteralValue::Set(_) => "set",
            LiteralValue::Mapping(_) => "mapping",
            LiteralValue::DateTime(_) => "datetime",
            LiteralValue::Date(_) => "date",
            LiteralValue::Time(_) => "time",
            LiteralValue::Duration(_) => "duration",
            LiteralValue::UniqueId(_) => "uuid",
            LiteralValue::DeferredName(_) => "deferred name",
        }
    }

    /// Check whether this value is a deferred (unresolved) name
    pub fn is_deferred(&self) -> bool {
        matches!(self, LiteralValue::DeferredName(_))
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            LiteralValue::Null => {}
            LiteralValue::Bool(b) => b.hash(state),
            LiteralValue::Int(i) => i.hash(state),
            LiteralValue::Float(f) => f.hash(state),
            LiteralValue::Str(s) | LiteralValue::DeferredName(s) => s.hash(state),
            LiteralValue::List(items) | LiteralValue::Tuple(items) => {
                for item in items {
                    item.hash(state);
                }
            }
            // Set and map equality are order-insensitive, so only the
            // length can be hashed without breaking the Hash/Eq contract
            LiteralValue::Set(items) => items.len().hash(state),
            LiteralValue::Mapping(pairs) => pairs.len().hash(state),
            LiteralValue::DateTime(dt) => dt.hash(state),
            LiteralValue::Date(d) => d.hash(state),
            LiteralValue::Time(t) => t.hash(state),
            LiteralValue::Duration(d) => {
                d.num_seconds().hash(state);
                d.subsec_nanos().hash(state);
            }
            LiteralValue::UniqueId(id) => id.hash(state),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("'")
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[LiteralValue]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Renders the value in literal syntax, so that grammar-expressible values
/// round-trip through `evaluate`. Coerced values render in the textual
/// form their coercion accepts. The empty set renders as `{}` and is
/// indistinguishable from the empty mapping.
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Bool(true) => f.write_str("true"),
            LiteralValue::Bool(false) => f.write_str("false"),
            LiteralValue::Int(i) => write!(f, "{}", i),
            // Debug formatting keeps the decimal point ("1.0", not "1"),
            // which is what keeps whole floats re-parsing as floats
            LiteralValue::Float(x) => write!(f, "{:?}", x.into_inner()),
            LiteralValue::Str(s) => write_escaped(f, s),
            LiteralValue::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            LiteralValue::Tuple(items) => {
                f.write_str("(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            LiteralValue::Set(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("}")
            }
            LiteralValue::Mapping(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            LiteralValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            LiteralValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            LiteralValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            LiteralValue::Duration(d) => {
                let mut micros = d.num_seconds() * 1_000_000 + i64::from(d.subsec_nanos() / 1_000);
                if micros < 0 {
                    f.write_str("-")?;
                    micros = -micros;
                }
                let days = micros / 86_400_000_000;
                micros %= 86_400_000_000;
                let hours = micros / 3_600_000_000;
                micros %= 3_600_000_000;
                let minutes = micros / 60_000_000;
                micros %= 60_000_000;
                let seconds = micros / 1_000_000;
                micros %= 1_000_000;
                if days > 0 {
                    write!(f, "{} ", days)?;
                }
                write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)?;
                if micros > 0 {
                    write!(f, ".{:06}", micros)?;
                }
                Ok(())
            }
            LiteralValue::UniqueId(id) => write!(f, "{}", id),
            LiteralValue::DeferredName(name) => f.write_str(name),
        }
    }
}

/// JSON-friendly serialization for the dispatch layer: containers become
/// sequences/maps, coerced values become their textual forms.
impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::Null => serializer.serialize_unit(),
            LiteralValue::Bool(b) => serializer.serialize_bool(*b),
            LiteralValue::Int(i) => serializer.serialize_i64(*i),
            LiteralValue::Float(x) => serializer.serialize_f64(x.into_inner()),
            LiteralValue::Str(s) | LiteralValue::DeferredName(s) => serializer.serialize_str(s),
            LiteralValue::List(items) | LiteralValue::Tuple(items) => {
                serializer.collect_seq(items)
            }
            LiteralValue::Set(items) => serializer.collect_seq(items),
            LiteralValue::Mapping(pairs) => serializer.collect_map(pairs),
            other => serializer.collect_str(other),
        }
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Str(value.to_string())
    }
}

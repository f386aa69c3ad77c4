//! The `Value` evaluator contract and the metadata used to persist values.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ValueError;
use crate::registry::ValueRegistry;
use crate::serialized::SerializedValue;

/// Field carrying the variant tag in structured encodings.
pub const TYPE_FIELD: &str = "_type";

/// Encoding category of a value variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Bare integer literal, e.g. `7`.
    Int,
    /// Bare string literal, e.g. `"10%"`.
    Str,
    /// Object with a `_type` field plus the variant's own fields.
    Dict,
}

/// Result of a [`DecodeFn`]: `Ok(None)` means the literal is not in this
/// variant's form and the next candidate should be tried.
pub type DecodeResult = Result<Option<Arc<dyn Value>>, ValueError>;

/// Constructor building a variant from its encoded JSON.
///
/// Structured variants receive the whole record, `_type` included. The
/// registry is passed along so composite variants can decode nested values.
pub type DecodeFn = fn(&ValueRegistry, &JsonValue) -> DecodeResult;

/// Persistence metadata exposed by a value variant.
#[derive(Copy, Clone)]
pub struct ValueType {
    pub tag: &'static str,
    pub kind: ValueKind,
    pub decode: DecodeFn,
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueType")
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A pure, time-indexed scalar evaluator driving an animation parameter.
///
/// Implementations are immutable once built and `eval` has no side effects.
pub trait Value: fmt::Debug + Send + Sync {
    /// Evaluates the value at `time_ms` for a strip of `level_length` pixels.
    fn eval(&self, time_ms: u32, level_length: i32) -> i32;

    /// Persistence metadata. Values returning `None` can be evaluated but
    /// neither registered nor encoded.
    fn value_type(&self) -> Option<ValueType> {
        None
    }

    /// Variant payload: a number for `Int` kinds, a string for `Str` kinds
    /// and an object of fields (without `_type`) for `Dict` kinds.
    fn to_json(&self) -> Result<JsonValue, ValueError> {
        Err(ValueError::InvalidRegistration {
            reason: format!("{self:?} has no persisted form"),
        })
    }

    /// The container this value is, if any. Encoding looks through
    /// containers so a nested empty one still encodes as `0`.
    fn as_serialized(&self) -> Option<&SerializedValue> {
        None
    }
}

/// Structured variants whose fields round-trip through serde.
pub trait Record: Value + Serialize + DeserializeOwned + 'static {
    const TAG: &'static str;
}

/// Builds the [`ValueType`] of a structured variant.
pub fn record_type<T: Record>() -> ValueType {
    ValueType {
        tag: T::TAG,
        kind: ValueKind::Dict,
        decode: decode_record::<T>,
    }
}

/// Encodes the fields of a structured variant.
pub fn record_to_json<T: Record>(record: &T) -> Result<JsonValue, ValueError> {
    Ok(serde_json::to_value(record)?)
}

fn decode_record<T: Record>(_registry: &ValueRegistry, json: &JsonValue) -> DecodeResult {
    let record = T::deserialize(json).map_err(|err| ValueError::invalid_payload(T::TAG, err))?;
    let value: Arc<dyn Value> = Arc::new(record);
    Ok(Some(value))
}

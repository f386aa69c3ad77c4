//! Container owning zero or one value, the unit of persistence.

use std::sync::Arc;

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::ValueError;
use crate::registry::{encode_json, ValueRegistry};
use crate::value::{Value, ValueType};

/// Serializable slot for an arbitrary [`Value`].
///
/// An empty container evaluates like `Const(0)` and encodes as `0`.
#[derive(Clone, Debug, Default)]
pub struct SerializedValue {
    value: Option<Arc<dyn Value>>,
}

impl SerializedValue {
    pub fn new(value: impl Value + 'static) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc(value: Arc<dyn Value>) -> Self {
        Self { value: Some(value) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The held value, if any.
    pub fn get(&self) -> Option<&dyn Value> {
        self.value.as_deref()
    }

    /// Persisted JSON form; see [`encode_json`].
    pub fn encoded(&self) -> Result<JsonValue, ValueError> {
        encode_json(self.get())
    }

    pub fn encode(&self) -> Result<Vec<u8>, ValueError> {
        Ok(serde_json::to_vec(&self.encoded()?)?)
    }

    /// Replaces the held value with the one decoded from `bytes`.
    ///
    /// On failure `self` is left exactly as it was.
    pub fn decode_from(
        &mut self,
        registry: &ValueRegistry,
        bytes: &[u8],
    ) -> Result<(), ValueError> {
        *self = registry.decode(bytes)?;
        Ok(())
    }
}

impl Value for SerializedValue {
    #[inline]
    fn eval(&self, time_ms: u32, level_length: i32) -> i32 {
        self.value
            .as_ref()
            .map_or(0, |v| v.eval(time_ms, level_length))
    }

    fn value_type(&self) -> Option<ValueType> {
        self.value.as_ref().and_then(|v| v.value_type())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        match &self.value {
            Some(v) => v.to_json(),
            None => Ok(JsonValue::from(0)),
        }
    }

    fn as_serialized(&self) -> Option<&SerializedValue> {
        Some(self)
    }
}

impl Serialize for SerializedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encoded()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

//! Registry of known value variants, keyed by tag and partitioned by kind.
//!
//! The registry follows an init-then-read lifecycle: `register` needs
//! `&mut self`, so once the registry is shared (`&ValueRegistry`,
//! `Arc<ValueRegistry>`) it is frozen and decoding is safe from any thread.

use hashbrown::HashMap;
use log::{debug, trace, warn};
use serde::de::{DeserializeSeed, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::ValueError;
use crate::serialized::SerializedValue;
use crate::value::{Value, ValueKind, ValueType, TYPE_FIELD};
use crate::variants::builtin_types;

/// Longest rendering of an offending literal kept in error messages.
const PREVIEW_LEN: usize = 64;

/// Catalog mapping tags to constructors.
#[derive(Debug, Default)]
pub struct ValueRegistry {
    /// Candidates per kind, in registration order.
    table: HashMap<ValueKind, Vec<ValueType>>,
    /// Structured variants by tag.
    dict_lookup: HashMap<&'static str, ValueType>,
}

impl ValueRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in variant.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for ty in builtin_types() {
            registry.insert(ty);
        }
        debug!(
            "value registry initialised with {} built-in variants",
            registry.len()
        );
        registry
    }

    /// Registers the variant of `value`.
    ///
    /// Fails with [`ValueError::InvalidRegistration`] when the value does not
    /// expose a tag; previously registered entries are left untouched.
    pub fn register(&mut self, value: &dyn Value) -> Result<(), ValueError> {
        let ty = value
            .value_type()
            .ok_or_else(|| ValueError::InvalidRegistration {
                reason: format!("{value:?} does not expose a type tag"),
            })?;
        self.register_type(ty)
    }

    /// Registers a variant from its metadata.
    pub fn register_type(&mut self, ty: ValueType) -> Result<(), ValueError> {
        if ty.tag.is_empty() || ty.tag == TYPE_FIELD {
            return Err(ValueError::InvalidRegistration {
                reason: format!("tag {:?} cannot identify a variant", ty.tag),
            });
        }
        self.insert(ty);
        Ok(())
    }

    /// Maps `ty.tag` to `ty`, dropping any earlier entry for the tag. A tag
    /// re-registered under its own kind keeps its place in dispatch order.
    fn insert(&mut self, ty: ValueType) {
        let mut replaced = false;
        for (kind, entries) in self.table.iter_mut() {
            if *kind != ty.kind {
                let before = entries.len();
                entries.retain(|e| e.tag != ty.tag);
                replaced |= entries.len() != before;
            }
        }
        self.dict_lookup.remove(ty.tag);

        let entries = self.table.entry(ty.kind).or_default();
        if let Some(existing) = entries.iter_mut().find(|e| e.tag == ty.tag) {
            *existing = ty;
            replaced = true;
        } else {
            entries.push(ty);
        }
        if ty.kind == ValueKind::Dict {
            self.dict_lookup.insert(ty.tag, ty);
        }
        if replaced {
            warn!("value tag {:?} registered twice, replacing", ty.tag);
        }
        debug!("registered value {:?} as {:?}", ty.tag, ty.kind);
    }

    /// Whether `tag` is registered under any kind.
    pub fn contains(&self, tag: &str) -> bool {
        self.table.values().flatten().any(|ty| ty.tag == tag)
    }

    /// Registered tags of `kind`, in registration order.
    pub fn tags(&self, kind: ValueKind) -> Vec<&'static str> {
        self.candidates(kind).iter().map(|ty| ty.tag).collect()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn candidates(&self, kind: ValueKind) -> &[ValueType] {
        self.table.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Decodes a persisted value.
    ///
    /// An empty payload decodes to an empty container, which evaluates like
    /// `Const(0)`.
    pub fn decode(&self, bytes: &[u8]) -> Result<SerializedValue, ValueError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(SerializedValue::empty());
        }
        let json: JsonValue = serde_json::from_slice(bytes)
            .map_err(|_| ValueError::unknown(preview(&String::from_utf8_lossy(bytes))))?;
        self.decode_json(&json)
    }

    /// Decodes a value from parsed JSON: integer literals first, then string
    /// literals, then `_type`-tagged records.
    pub fn decode_json(&self, json: &JsonValue) -> Result<SerializedValue, ValueError> {
        match json {
            JsonValue::Number(_) => self.decode_literal(ValueKind::Int, json),
            JsonValue::String(_) => self.decode_literal(ValueKind::Str, json),
            JsonValue::Object(fields) => {
                let tag = fields
                    .get(TYPE_FIELD)
                    .and_then(JsonValue::as_str)
                    .ok_or_else(|| {
                        ValueError::invalid_payload("record", "missing string `_type` field")
                    })?;
                let ty = self
                    .dict_lookup
                    .get(tag)
                    .ok_or_else(|| ValueError::unknown(preview(tag)))?;
                trace!("decoding record {tag:?}");
                match (ty.decode)(self, json)? {
                    Some(value) => Ok(SerializedValue::from_arc(value)),
                    None => Err(ValueError::invalid_payload(tag, "record rejected")),
                }
            }
            other => Err(ValueError::unknown(preview(&other.to_string()))),
        }
    }

    fn decode_literal(
        &self,
        kind: ValueKind,
        json: &JsonValue,
    ) -> Result<SerializedValue, ValueError> {
        for ty in self.candidates(kind) {
            if let Some(value) = (ty.decode)(self, json)? {
                trace!("decoded {kind:?} literal as {:?}", ty.tag);
                return Ok(SerializedValue::from_arc(value));
            }
        }
        Err(ValueError::unknown(preview(&json.to_string())))
    }

    /// Encodes `value` into bytes. The registry is not consulted: encoding
    /// dispatches on the value's own metadata.
    pub fn encode(&self, value: &SerializedValue) -> Result<Vec<u8>, ValueError> {
        value.encode()
    }
}

/// Encodes a value into its persisted JSON form; `None` encodes as `0`.
pub fn encode_json(value: Option<&dyn Value>) -> Result<JsonValue, ValueError> {
    let Some(value) = value else {
        return Ok(JsonValue::from(0));
    };
    if let Some(container) = value.as_serialized() {
        return encode_json(container.get());
    }
    let ty = value
        .value_type()
        .ok_or_else(|| ValueError::InvalidRegistration {
            reason: format!("{value:?} does not expose a type tag"),
        })?;
    let payload = value.to_json()?;
    match (ty.kind, payload) {
        (ValueKind::Int, payload @ JsonValue::Number(_)) => Ok(payload),
        (ValueKind::Str, payload @ JsonValue::String(_)) => Ok(payload),
        (ValueKind::Dict, JsonValue::Object(mut fields)) => {
            fields.insert(TYPE_FIELD.to_string(), JsonValue::from(ty.tag));
            Ok(JsonValue::Object(fields))
        }
        (kind, payload) => Err(ValueError::Serialization {
            reason: format!(
                "{} declared {kind:?} but encoded {}",
                ty.tag,
                preview(&payload.to_string())
            ),
        }),
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_LEN {
        return text.to_string();
    }
    let mut short: String = text.chars().take(PREVIEW_LEN).collect();
    short.push('…');
    short
}

/// Lets a registry drive serde, e.g. `registry.deserialize(&mut de)` for a
/// value embedded in a larger document.
impl<'de> DeserializeSeed<'de> for &ValueRegistry {
    type Value = SerializedValue;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        self.decode_json(&json).map_err(D::Error::custom)
    }
}

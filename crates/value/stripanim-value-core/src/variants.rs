//! Built-in value variants.

use std::num::NonZeroU32;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ValueError;
use crate::registry::ValueRegistry;
use crate::value::{
    record_to_json, record_type, DecodeResult, Record, Value, ValueKind, ValueType,
};

/// Returns a constant regardless of time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Const(pub i32);

impl Const {
    pub const TAG: &'static str = "Const";

    fn value_type_of() -> ValueType {
        ValueType {
            tag: Self::TAG,
            kind: ValueKind::Int,
            decode: Self::decode,
        }
    }

    fn decode(_registry: &ValueRegistry, json: &JsonValue) -> DecodeResult {
        let Some(c) = json.as_i64().and_then(|v| i32::try_from(v).ok()) else {
            return Ok(None);
        };
        let value: Arc<dyn Value> = Arc::new(Const(c));
        Ok(Some(value))
    }
}

impl Value for Const {
    #[inline]
    fn eval(&self, _time_ms: u32, _level_length: i32) -> i32 {
        self.0
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(Self::value_type_of())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        Ok(JsonValue::from(self.0))
    }
}

/// A fraction of the strip length, in units of 1/65536.
///
/// Persisted as a percentage string such as `"10%"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Percent(pub i32);

impl Percent {
    pub const TAG: &'static str = "Percent";

    fn value_type_of() -> ValueType {
        ValueType {
            tag: Self::TAG,
            kind: ValueKind::Str,
            decode: Self::decode,
        }
    }

    /// Percentage represented by this value, exact in `f64`.
    pub fn as_percent(self) -> f64 {
        f64::from(self.0) * 100.0 / 65536.0
    }

    /// Parses `"<pct>%"`; `None` when the text is not a percentage or is out
    /// of range.
    pub fn parse(text: &str) -> Option<Self> {
        let pct: f64 = text.trim().strip_suffix('%')?.trim_end().parse().ok()?;
        if !pct.is_finite() {
            return None;
        }
        let scaled = (pct * 65536.0 / 100.0).round();
        if scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
            return None;
        }
        Some(Percent(scaled as i32))
    }

    fn decode(_registry: &ValueRegistry, json: &JsonValue) -> DecodeResult {
        let Some(p) = json.as_str().and_then(Percent::parse) else {
            return Ok(None);
        };
        let value: Arc<dyn Value> = Arc::new(p);
        Ok(Some(value))
    }
}

impl Value for Percent {
    #[inline]
    fn eval(&self, _time_ms: u32, level_length: i32) -> i32 {
        // i64 division truncates toward zero for both signs.
        (i64::from(self.0) * i64::from(level_length) / 65536) as i32
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(Self::value_type_of())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        Ok(JsonValue::String(format!("{}%", self.as_percent())))
    }
}

/// Shifts time by a signed offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpAdd {
    pub add_ms: i32,
}

impl Value for OpAdd {
    #[inline]
    fn eval(&self, time_ms: u32, _level_length: i32) -> i32 {
        (i64::from(time_ms) + i64::from(self.add_ms)) as i32
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(record_type::<Self>())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        record_to_json(self)
    }
}

impl Record for OpAdd {
    const TAG: &'static str = "OpAdd";
}

fn non_zero_tick(tag: &'static str, tick_ms: u32) -> Result<NonZeroU32, ValueError> {
    NonZeroU32::new(tick_ms).ok_or_else(|| ValueError::InvalidParameter {
        tag,
        reason: "tick_ms must be greater than zero".to_string(),
    })
}

/// Time modulo a tick, i.e. a sawtooth of period `tick_ms`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpMod {
    pub tick_ms: NonZeroU32,
}

impl OpMod {
    pub fn new(tick_ms: u32) -> Result<Self, ValueError> {
        Ok(Self {
            tick_ms: non_zero_tick(Self::TAG, tick_ms)?,
        })
    }
}

impl Value for OpMod {
    #[inline]
    fn eval(&self, time_ms: u32, _level_length: i32) -> i32 {
        (time_ms % self.tick_ms) as i32
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(record_type::<Self>())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        record_to_json(self)
    }
}

impl Record for OpMod {
    const TAG: &'static str = "OpMod";
}

/// Time rounded down to a multiple of the tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpStep {
    pub tick_ms: NonZeroU32,
}

impl OpStep {
    pub fn new(tick_ms: u32) -> Result<Self, ValueError> {
        Ok(Self {
            tick_ms: non_zero_tick(Self::TAG, tick_ms)?,
        })
    }
}

impl Value for OpStep {
    #[inline]
    fn eval(&self, time_ms: u32, _level_length: i32) -> i32 {
        let tick = self.tick_ms.get();
        (time_ms / tick * tick) as i32
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(record_type::<Self>())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        record_to_json(self)
    }
}

impl Record for OpStep {
    const TAG: &'static str = "OpStep";
}

/// Deterministic pseudo-random value.
///
/// The output only depends on `time_ms + seed`, so two instances whose seeds
/// differ by `d` agree when their times differ by `-d`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rand {
    pub seed: u32,
}

impl Value for Rand {
    #[inline]
    fn eval(&self, time_ms: u32, _level_length: i32) -> i32 {
        mix32(time_ms.wrapping_add(self.seed)) as i32
    }

    fn value_type(&self) -> Option<ValueType> {
        Some(record_type::<Self>())
    }

    fn to_json(&self) -> Result<JsonValue, ValueError> {
        record_to_json(self)
    }
}

impl Record for Rand {
    const TAG: &'static str = "Rand";
}

/// 32-bit avalanche hash (splitmix increment + murmur3 finalizer). Bijective.
#[inline]
fn mix32(x: u32) -> u32 {
    let mut x = x.wrapping_add(0x9e37_79b9);
    x = (x ^ (x >> 16)).wrapping_mul(0x85eb_ca6b);
    x = (x ^ (x >> 13)).wrapping_mul(0xc2b2_ae35);
    x ^ (x >> 16)
}

/// Types of every built-in variant, in registration order.
pub fn builtin_types() -> Vec<ValueType> {
    vec![
        Const::value_type_of(),
        Percent::value_type_of(),
        record_type::<OpAdd>(),
        record_type::<OpMod>(),
        record_type::<OpStep>(),
        record_type::<Rand>(),
    ]
}

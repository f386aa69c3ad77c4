//! Cyclic movement driven by a speed value.

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::ValueError;
use crate::registry::ValueRegistry;
use crate::serialized::SerializedValue;
use crate::value::Value;

const MS_PER_HOUR: i64 = 3_600_000;

/// Fastest supported speed, one move per millisecond. Evaluated speeds are
/// clamped to `±MAX_MOVES_PER_HOUR`.
pub const MAX_MOVES_PER_HOUR: i32 = 3_600_000;

/// Number of moves per hour, positive or negative.
///
/// Persisted transparently as its speed value.
#[derive(Clone, Debug, Default)]
pub struct MovePerHour {
    pub speed: SerializedValue,
}

impl MovePerHour {
    pub fn new(speed: impl Value + 'static) -> Self {
        Self {
            speed: SerializedValue::new(speed),
        }
    }

    /// Position after `time_ms`, wrapped into `[0, cycle_length)`.
    ///
    /// The speed is evaluated at `(time_ms, 0)`. A `cycle_length` of zero
    /// returns the raw displacement.
    pub fn eval(&self, time_ms: u32, _level_length: i32, cycle_length: i32) -> i64 {
        let speed = self
            .speed
            .eval(time_ms, 0)
            .clamp(-MAX_MOVES_PER_HOUR, MAX_MOVES_PER_HOUR);
        let offset = (i64::from(time_ms) * i64::from(speed)).div_euclid(MS_PER_HOUR);
        if cycle_length == 0 {
            return offset;
        }
        offset.rem_euclid(i64::from(cycle_length))
    }

    pub fn decode(registry: &ValueRegistry, bytes: &[u8]) -> Result<Self, ValueError> {
        Ok(Self {
            speed: registry.decode(bytes)?,
        })
    }

    pub fn decode_json(registry: &ValueRegistry, json: &JsonValue) -> Result<Self, ValueError> {
        Ok(Self {
            speed: registry.decode_json(json)?,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, ValueError> {
        self.speed.encode()
    }
}

impl Serialize for MovePerHour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.speed.serialize(serializer)
    }
}

//! stripanim-value-core: time-based values and their tagged JSON encoding.
//!
//! A [`Value`] evaluates to an `i32` for a given time and strip length.
//! Values persist through a [`ValueRegistry`] as bare integers, bare strings
//! or `_type`-tagged objects, and decode back into the matching variant.

pub mod error;
pub mod motion;
pub mod registry;
pub mod serialized;
pub mod value;
pub mod variants;

pub use error::ValueError;
pub use motion::{MovePerHour, MAX_MOVES_PER_HOUR};
pub use registry::{encode_json, ValueRegistry};
pub use serialized::SerializedValue;
pub use value::{
    record_to_json, record_type, DecodeFn, DecodeResult, Record, Value, ValueKind, ValueType,
    TYPE_FIELD,
};
pub use variants::{builtin_types, Const, OpAdd, OpMod, OpStep, Percent, Rand};

//! Serde helpers that keep NaN and infinities in JSON
//!
//! JSON has no literal for non-finite numbers, and `serde_json` writes them
//! as `null`. These helpers write `"NaN"`, `"Infinity"` and `"-Infinity"`
//! instead (the same text the answer element shows) and read them back.
//! Finite values stay plain JSON numbers.
//!
//! Use with `#[serde(with = "crate::math::serde_float")]` on an `f64`, or
//! `#[serde(with = "crate::math::serde_float::operands")]` on [`Operands`].

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Operand, Operands};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

pub fn serialize<S: Serializer>(value: &Operand, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { INFINITY } else { NEG_INFINITY })
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Operand, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            other => Err(de::Error::invalid_value(
                Unexpected::Str(other),
                &"a number, \"NaN\", \"Infinity\" or \"-Infinity\"",
            )),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

/// One operand going through the helpers above
struct Float(Operand);

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(Float)
    }
}

/// The same encoding for every element of an operand list
pub mod operands {
    use super::*;

    pub fn serialize<S: Serializer>(values: &Operands, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| Float(*value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Operands, D::Error> {
        let values = Vec::<Float>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|Float(value)| value).collect())
    }
}

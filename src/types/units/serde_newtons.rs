//! Serde adapter for forces that may be the `+∞` sentinel
//!
//! JSON has no infinity, so `serde_json` would write `null` and refuse to read
//! it back. Finite forces are plain newtons; infinite ones are the strings
//! `"inf"` and `"-inf"`, the same cells the CSV export writes.
//!
//! Use with `#[serde(with = "crate::types::serde_newtons")]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::types::units::{newton, Force};

pub fn serialize<S: Serializer>(force: &Force, serializer: S) -> Result<S::Ok, S::Error> {
    let n = force.get::<newton>();
    if n == f64::INFINITY {
        serializer.serialize_str("inf")
    } else if n == f64::NEG_INFINITY {
        serializer.serialize_str("-inf")
    } else {
        serializer.serialize_f64(n)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Newtons {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Force, D::Error> {
    let n = match Newtons::deserialize(deserializer)? {
        Newtons::Number(n) => n,
        Newtons::Text(text) => match text.trim() {
            "inf" | "+inf" | "∞" => f64::INFINITY,
            "-inf" => f64::NEG_INFINITY,
            other => return Err(D::Error::custom(format!("expected newtons or \"inf\", got \"{other}\""))),
        },
    };
    Ok(Force::new::<newton>(n))
}

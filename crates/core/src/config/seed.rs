use derive_more::Display;
use fnv::FnvHasher;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    convert::TryInto,
    fmt,
    hash::{Hash, Hasher},
};

/// RNG seed used for all randomized processes during grid generation.
///
/// When deserializing, this type supports a few options:
/// - If the value is an integer that fits into `u64`, use that value
/// - If it's a string that can be parsed into a `u64`, use the parsed value
/// - If it's any other string, just keep the string
/// - If it's anything else (out of range number, float, array, etc.), error
///
/// When it comes time to actually seed an RNG, a stored string is hashed
/// into a `u64`.
///
/// Seeds always serialize as **strings**: JSON and TOML don't reliably
/// support 64-bit unsigned integers, and serializing as a string still
/// parses back into the same number next time around.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Seed {
    /// An integer seed, which can be used directly
    Int(u64),
    /// A textual string, which will be hashed into a u64 before use
    Text(String),
}

impl Seed {
    /// Convert the seed to a `u64`, so it can actually be fed to an RNG
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Int(seed) => *seed,
            Self::Text(text) => {
                let mut hasher = FnvHasher::default();
                text.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self::Int(seed)
    }
}

// Convert a string to a seed. If possible, parse it as an int. Otherwise,
// store the raw text, to be hashed later
impl From<&str> for Seed {
    fn from(seed_str: &str) -> Self {
        match seed_str.parse::<u64>() {
            Ok(seed) => Self::Int(seed),
            Err(_) => Self::Text(seed_str.into()),
        }
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        // Always serialize a seed as a string, to avoid issues with large
        // ints
        serializer.serialize_str(&self.to_string())
    }
}

// Custom deserialization to handle both int and string variants
impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // We can deserialize from a bunch of different types so we can't
        // give a type hint here
        deserializer.deserialize_any(SeedVisitor)
    }
}

struct SeedVisitor;

impl<'de> Visitor<'de> for SeedVisitor {
    type Value = Seed;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a positive integer or string")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Seed::Int(value))
    }

    // TOML hands us signed ints, so this needs a range check
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value
            .try_into()
            .map(Seed::Int)
            .map_err(|_| E::custom(format!("u64 out of range: {}", value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        // This will try to parse as an int, then fall back to string variant
        Ok(value.into())
    }
}

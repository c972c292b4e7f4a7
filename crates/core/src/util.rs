/// A macro to unwrap an option to its `Some` value, and panic if `None`. This
/// is the same as [Option::unwrap], except that it accepts a format string
/// and format arguments, allowing for more flexibility in error messages.
#[macro_export]
macro_rules! unwrap {
    ($opt:expr, $fmt:expr, $($arg:tt)*) => {
        match $opt {
            Some(v) => v,
            None => panic!($fmt, $($arg)*),
        }
    };
}

/// A macro to measure and log the evaluation time of an expression. Wraps an
/// expression, evaluates to the expression's value.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of cells in a grid based on its radius. Radius 0
/// means 1 cell, 1 is 7 cells, 2 is 19, etc.
pub fn grid_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every ring after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

// Serialize a HexPointIndexMap as a list of (point, value) pairs instead of a
// map. Hex points shouldn't be used as serialized map keys, since JSON and
// other formats don't support complex keys.
pub mod serde_hex_point_map_to_pairs {
    use crate::hex::{HexPoint, HexPointIndexMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a hex point map as a list of pairs
    pub fn serialize<T, S>(
        map: &HexPointIndexMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for pair in map.iter() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }

    /// Deserialize a list of (point, value) pairs back into a map. Pair order
    /// in the input becomes iteration order in the map.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<HexPointIndexMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(HexPoint, T)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

//! Emission-alphabet quantization of turning angles.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::ConfigError;
use crate::constants::HALF_TURN_DEGREES;

/// One symbol of the emission alphabet, displayed as `E{index}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Emission(pub usize);

impl Emission {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Emission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl Serialize for Emission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Degree span assigned to each alphabet symbol: `180 / n_emission + 1`
/// with integer division.
#[inline]
#[must_use]
pub fn bucket_width_degrees(n_emission: usize) -> usize {
    (HALF_TURN_DEGREES as usize) / n_emission + 1
}

/// Quantize each angle into a symbol index via `floor(angle / width)`.
///
/// No upper clamp is applied: the width formula divides a 180-degree span,
/// so indices past `n_emission - 1` are possible for inputs above it and
/// are emitted as-is (matches the reference implementation).
pub fn quantize_angles(angles: &[f32], n_emission: usize) -> Result<Vec<Emission>, ConfigError> {
    if n_emission == 0 {
        return Err(ConfigError::ZeroEmissionAlphabet);
    }

    let width = bucket_width_degrees(n_emission) as f32;
    Ok(angles
        .iter()
        .map(|&angle| Emission((angle / width).floor() as usize))
        .collect())
}

//! Weight tiers and the entries classified by them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{GaugeError, GaugeResult};

/// Weight tier of a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightLevel {
    Light,
    Medium,
    Heavy,
}

/// Upper bounds (inclusive) of the light and medium tiers.
///
/// Anything above `medium_max` is heavy. Negative weights are always rejected.
/// Deserialization goes through [`WeightThresholds::new`], so an inconsistent
/// pair of bounds never reaches `classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct WeightThresholds {
    /// Largest weight that is still light.
    light_max: i32,

    /// Largest weight that is still medium.
    medium_max: i32,
}

/// Wire shape of [`WeightThresholds`] before validation.
#[derive(Debug, Deserialize)]
struct RawThresholds {
    light_max: i32,
    medium_max: i32,
}

impl TryFrom<RawThresholds> for WeightThresholds {
    type Error = GaugeError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.light_max, raw.medium_max)
    }
}

impl WeightThresholds {
    /// Build thresholds, requiring `0 <= light_max < medium_max`.
    pub fn new(light_max: i32, medium_max: i32) -> GaugeResult<Self> {
        if light_max < 0 || light_max >= medium_max {
            return Err(GaugeError::invalid_argument(format!(
                "thresholds must satisfy 0 <= light_max < medium_max, got light_max={light_max} medium_max={medium_max}"
            )));
        }
        Ok(Self {
            light_max,
            medium_max,
        })
    }

    /// Default thresholds: 0..=10 light, 11..=100 medium, 101.. heavy.
    pub const fn default_v1() -> Self {
        Self {
            light_max: 10,
            medium_max: 100,
        }
    }

    pub fn light_max(&self) -> i32 {
        self.light_max
    }

    pub fn medium_max(&self) -> i32 {
        self.medium_max
    }

    /// Classify a weight against these thresholds.
    ///
    /// Each bound is inclusive for the lower tier, so `light_max` itself is light
    /// and `light_max + 1` is medium.
    pub fn classify(&self, weight: i32) -> GaugeResult<WeightLevel> {
        if weight < 0 {
            debug!(weight, "rejecting negative weight");
            return Err(GaugeError::invalid_argument(format!(
                "weight must not be negative, got {weight}"
            )));
        }

        let level = if weight > self.medium_max {
            WeightLevel::Heavy
        } else if weight > self.light_max {
            WeightLevel::Medium
        } else {
            WeightLevel::Light
        };
        Ok(level)
    }
}

impl Default for WeightThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Classify a weight with the default thresholds.
pub fn classify_weight(weight: i32) -> GaugeResult<WeightLevel> {
    WeightThresholds::default_v1().classify(weight)
}

/// Return the numbers in reverse order, leaving the input untouched.
pub fn reverse_sequence(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().rev().copied().collect()
}

/// Return the numbers in ascending order, leaving the input untouched.
pub fn sort_sequence(numbers: &[i32]) -> Vec<i32> {
    let mut sorted = numbers.to_vec();
    // stable, so equal values keep their relative order
    sorted.sort();
    sorted
}

/// A key/value pair whose value is classified into a weight tier on read.
///
/// The key is fixed at construction; only the value can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedEntry {
    key: i32,
    value: i32,
}

impl WeightedEntry {
    pub fn new(key: i32, value: i32) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Weight tier of the current value.
    pub fn weight_level(&self) -> GaugeResult<WeightLevel> {
        self.weight_level_with(&WeightThresholds::default_v1())
    }

    /// Weight tier of the current value under custom thresholds.
    pub fn weight_level_with(&self, thresholds: &WeightThresholds) -> GaugeResult<WeightLevel> {
        thresholds.classify(self.value)
    }
}

//! Search configuration
//!
//! Validated once when a [`WildGenerator`](super::WildGenerator) is built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Gender, Lead, NATURE_COUNT};

/// Wild generation routine to reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Method {
    /// Diamond/Pearl/Platinum
    #[default]
    MethodJ,
    /// HeartGold/SoulSilver
    MethodK,
    /// Diamond/Pearl/Platinum Poké Radar with a fixed slot
    PokeRadar,
}

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Radar slot {index} is outside an area of {len} slots")]
    SlotOutOfRange { index: u8, len: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Search bounds, trainer ids and lead for one generator
///
/// # Example
/// ```
/// use wild_finder_core::generator::{GeneratorConfig, Method};
/// use wild_finder_core::models::Lead;
///
/// let config = GeneratorConfig {
///     max_advances: 1000,
///     method: Method::MethodK,
///     lead: Lead::Synchronize(10),
///     ..GeneratorConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First advance searched
    pub initial_advances: u32,

    /// Number of advances searched after the first
    pub max_advances: u32,

    /// Advances consumed between the seed and the encounter that are not
    /// reported (e.g. menu or map overhead)
    pub offset: u32,

    pub tid: u16,
    pub sid: u16,

    pub method: Method,
    pub lead: Lead,

    /// Poké Radar only: build shiny PIDs; ignored by the other methods
    pub shiny: bool,

    /// Poké Radar only: slot the chain is on
    pub radar_slot: u8,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if let Some(nature) = self.lead.synchronize_nature() {
            if nature >= NATURE_COUNT {
                return Err(GeneratorError::InvalidConfig(format!(
                    "synchronize nature {} must be below {}",
                    nature, NATURE_COUNT
                )));
            }
        }

        if self.lead.cute_charm_target() == Some(Gender::Genderless) {
            return Err(GeneratorError::InvalidConfig(
                "cute charm target must be male or female".to_string(),
            ));
        }

        Ok(())
    }

    /// Split the advance range into contiguous batches of at most `size`
    /// advances
    ///
    /// Running the batches and concatenating their results in order gives
    /// the same outcomes as running `self`.
    pub fn batches(&self, size: u32) -> Result<Vec<GeneratorConfig>, GeneratorError> {
        if size == 0 {
            return Err(GeneratorError::InvalidConfig(
                "batch size must be positive".to_string(),
            ));
        }

        let total = u64::from(self.max_advances) + 1;
        let size = u64::from(size);
        let mut batches = Vec::with_capacity(total.div_ceil(size) as usize);
        let mut start = 0u64;
        while start < total {
            let len = size.min(total - start);
            batches.push(GeneratorConfig {
                initial_advances: self.initial_advances.wrapping_add(start as u32),
                max_advances: (len - 1) as u32,
                ..self.clone()
            });
            start += len;
        }
        Ok(batches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_synchronize_nature_out_of_range() {
        let config = GeneratorConfig {
            lead: Lead::Synchronize(25),
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_genderless_cute_charm_rejected() {
        let config = GeneratorConfig {
            lead: Lead::CuteCharm(Gender::Genderless),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_batches_cover_range_exactly() {
        let config = GeneratorConfig {
            initial_advances: 100,
            max_advances: 24,
            ..GeneratorConfig::default()
        };
        let batches = config.batches(10).unwrap();
        let spans: Vec<(u32, u32)> = batches
            .iter()
            .map(|b| (b.initial_advances, b.max_advances))
            .collect();
        assert_eq!(spans, vec![(100, 9), (110, 9), (120, 4)]);
    }

    #[test]
    fn test_zero_max_advances_is_one_batch() {
        let batches = GeneratorConfig::default().batches(50).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].max_advances, 0);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(GeneratorConfig::default().batches(0).is_err());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "max_advances": 500,
            "method": "MethodK",
            "lead": {"Synchronize": 4},
            "tid": 12345
        }"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_advances, 500);
        assert_eq!(config.method, Method::MethodK);
        assert_eq!(config.lead, Lead::Synchronize(4));
        assert_eq!(config.sid, 0);
    }
}

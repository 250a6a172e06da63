use crate::ring::RingError;
use std::env;

pub const DEFAULT_CAPACITY: usize = 4096;

/// Environment variable read by [`RingConfig::from_env`].
pub const CAPACITY_ENV: &str = "BYTERING_CAPACITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    pub capacity: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RingConfig {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be nonzero",
            });
        }
        Ok(Self { capacity })
    }

    /// Reads the capacity from `BYTERING_CAPACITY`, falling back to the
    /// default when the variable is unset.
    pub fn from_env() -> Result<Self, RingError> {
        match env::var(CAPACITY_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn parse(value: &str) -> Result<Self, RingError> {
        let capacity = value
            .trim()
            .parse::<usize>()
            .map_err(|source| RingError::InvalidConfig {
                value: value.to_string(),
                source,
            })?;
        Self::new(capacity)
    }
}

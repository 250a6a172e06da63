use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Not enough space in ring buffer: required {required} bytes, available {available} bytes")]
    CapacityExceeded { required: usize, available: usize },

    #[error("Ring buffer used after destroy")]
    UseAfterDestroy,

    #[error("Ring buffer used before init")]
    NotInitialized,

    #[error("Failed to allocate {capacity} bytes of ring storage")]
    AllocationFailure { capacity: usize },

    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },

    #[error("Invalid capacity setting {value:?}")]
    InvalidConfig {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

use super::RingError;

/// Lifecycle of a [`RingBuffer`](super::RingBuffer).
///
/// `init` is the only way into `Ready` and `destroy` the only way into
/// `Destroyed`. Nothing leaves `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingState {
    #[default]
    Uninitialized,
    Ready,
    Destroyed,
}

impl RingState {
    #[inline]
    pub fn check(self) -> Result<(), RingError> {
        match self {
            Self::Ready => Ok(()),
            Self::Uninitialized => Err(RingError::NotInitialized),
            Self::Destroyed => Err(RingError::UseAfterDestroy),
        }
    }
}

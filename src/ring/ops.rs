use super::{RingError, RingState};
use crate::config::RingConfig;
use crate::ring::RingBuffer;
use tracing::{debug, warn};

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RingBuffer {
    /// An uninitialized buffer with the default capacity. Call [`init`](Self::init)
    /// before moving data.
    pub fn new() -> Self {
        Self::with_config(RingConfig::default())
    }

    pub fn with_config(config: RingConfig) -> Self {
        Self {
            storage: None,
            capacity: config.capacity,
            head: 0,
            tail: 0,
            length: 0,
            state: RingState::Uninitialized,
        }
    }

    /// Allocates zeroed storage and empties the buffer.
    ///
    /// Re-initializing a ready buffer discards its contents. A destroyed
    /// buffer cannot be brought back.
    pub fn init(&mut self) -> Result<(), RingError> {
        if self.state == RingState::Destroyed {
            warn!("init called on destroyed ring buffer");
            return Err(RingError::UseAfterDestroy);
        }
        if self.capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity: 0,
                reason: "must be nonzero",
            });
        }

        match self.storage.as_mut() {
            Some(storage) => storage.fill(0),
            None => {
                let mut storage = Vec::<u8>::new();
                storage
                    .try_reserve_exact(self.capacity)
                    .map_err(|_| RingError::AllocationFailure {
                        capacity: self.capacity,
                    })?;
                storage.resize(self.capacity, 0);
                self.storage = Some(storage.into_boxed_slice());
            }
        }

        self.head = 0;
        self.tail = 0;
        self.length = 0;
        self.state = RingState::Ready;
        debug!(capacity = self.capacity, "ring buffer initialized");
        Ok(())
    }

    /// Appends all of `data` or nothing.
    ///
    /// Fails with [`RingError::CapacityExceeded`] when `data` does not fit in
    /// the free space; the buffer is left untouched in that case.
    #[inline]
    pub fn write_into(&mut self, data: &[u8]) -> Result<(), RingError> {
        self.ready()?;

        let available = self.available();
        if data.len() > available {
            debug!(required = data.len(), available, "ring write rejected");
            return Err(RingError::CapacityExceeded {
                required: data.len(),
                available,
            });
        }

        let n = data.len();
        let start = self.tail;
        let capacity = self.capacity;
        let Some(storage) = self.storage.as_mut() else {
            return Err(RingError::NotInitialized);
        };

        let first = n.min(capacity - start);
        storage[start..start + first].copy_from_slice(&data[..first]);
        storage[..n - first].copy_from_slice(&data[first..]);

        if n > 0 {
            self.tail = (start + n) % capacity;
            self.length += n;
        }
        Ok(())
    }

    /// Moves up to `buf.len()` of the oldest bytes into `buf` and returns how
    /// many were copied. An empty buffer yields `Ok(0)`.
    #[inline]
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, RingError> {
        self.ready()?;

        let n = self.length.min(buf.len());
        if n == 0 {
            return Ok(0);
        }

        let start = self.head;
        let capacity = self.capacity;
        let Some(storage) = self.storage.as_ref() else {
            return Err(RingError::NotInitialized);
        };

        let first = n.min(capacity - start);
        buf[..first].copy_from_slice(&storage[start..start + first]);
        buf[first..n].copy_from_slice(&storage[..n - first]);

        self.head = (start + n) % capacity;
        self.length -= n;
        Ok(n)
    }

    /// Releases the storage. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        if self.state == RingState::Destroyed {
            return;
        }
        self.storage = None;
        self.head = 0;
        self.tail = 0;
        self.length = 0;
        self.state = RingState::Destroyed;
        debug!("ring buffer destroyed");
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn available(&self) -> usize {
        match self.state {
            RingState::Ready => self.capacity - self.length,
            _ => 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.state == RingState::Ready && self.length == self.capacity
    }

    #[inline]
    pub fn state(&self) -> RingState {
        self.state
    }

    fn ready(&self) -> Result<(), RingError> {
        self.state.check().inspect_err(|err| {
            if *err == RingError::UseAfterDestroy {
                warn!("ring buffer used after destroy");
            }
        })
    }
}

use super::RingState;

/// Fixed-capacity FIFO byte queue.
///
/// Live bytes start at `head` and wrap modulo `capacity`;
/// `tail == (head + length) % capacity` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer {
    pub(crate) storage: Option<Box<[u8]>>,
    pub(crate) capacity: usize,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) length: usize,
    pub(crate) state: RingState,
}

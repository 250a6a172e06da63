use super::RingError;
use std::cell::UnsafeCell;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lock-free byte ring for exactly one producer and one consumer.
///
/// `head` counts bytes ever read and `tail` counts bytes ever written. Both
/// run free and are masked on access, so the whole capacity is usable.
pub struct SpscRingBuffer {
    buf: Box<[UnsafeCell<u8>]>,
    capacity: usize,
    mask: usize,
    head: AtomicUsize,
    tail: AtomicUsize,
}

// SAFETY: the producer only touches the free region `[tail, head + capacity)`
// and the consumer only the live region `[head, tail)`. Each side publishes
// its cursor with Release after copying and loads the other with Acquire.
unsafe impl Sync for SpscRingBuffer {}

impl SpscRingBuffer {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if !capacity.is_power_of_two() {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be a power of two",
            });
        }

        Ok(Self {
            buf: (0..capacity).map(|_| UnsafeCell::new(0)).collect(),
            capacity,
            mask: capacity - 1,
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        })
    }

    /// Hands out the two halves. Borrowing `self` mutably keeps a second pair
    /// from existing while these are alive.
    pub fn split(&mut self) -> (Producer<'_>, Consumer<'_>) {
        let ring: &Self = self;
        (Producer { ring }, Consumer { ring })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        tail.wrapping_sub(head)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn slot(&self, index: usize) -> *mut u8 {
        UnsafeCell::raw_get(self.buf.as_ptr().wrapping_add(index))
    }
}

pub struct Producer<'a> {
    ring: &'a SpscRingBuffer,
}

pub struct Consumer<'a> {
    ring: &'a SpscRingBuffer,
}

impl Producer<'_> {
    /// Same all-or-nothing contract as [`RingBuffer::write_into`](super::RingBuffer::write_into).
    #[inline]
    pub fn write_into(&mut self, data: &[u8]) -> Result<(), RingError> {
        let tail = self.ring.tail.load(Ordering::Relaxed);
        let head = self.ring.head.load(Ordering::Acquire);
        let available = self.ring.capacity - tail.wrapping_sub(head);
        if data.len() > available {
            return Err(RingError::CapacityExceeded {
                required: data.len(),
                available,
            });
        }

        let n = data.len();
        let start = tail & self.ring.mask;
        let first = n.min(self.ring.capacity - start);

        // SAFETY: `[start, start + n)` modulo capacity lies in the free region,
        // which the consumer does not read until the Release store below.
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), self.ring.slot(start), first);
            ptr::copy_nonoverlapping(data.as_ptr().add(first), self.ring.slot(0), n - first);
        }

        self.ring
            .tail
            .store(tail.wrapping_add(n), Ordering::Release);
        Ok(())
    }

    #[inline]
    pub fn available(&self) -> usize {
        self.ring.capacity - self.ring.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity
    }
}

impl Consumer<'_> {
    /// Same best-effort contract as [`RingBuffer::read_into`](super::RingBuffer::read_into).
    #[inline]
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let head = self.ring.head.load(Ordering::Relaxed);
        let tail = self.ring.tail.load(Ordering::Acquire);
        let n = tail.wrapping_sub(head).min(buf.len());
        if n == 0 {
            return 0;
        }

        let start = head & self.ring.mask;
        let first = n.min(self.ring.capacity - start);

        // SAFETY: `[start, start + n)` modulo capacity lies in the live region,
        // which the producer does not overwrite until the Release store below.
        unsafe {
            ptr::copy_nonoverlapping(self.ring.slot(start), buf.as_mut_ptr(), first);
            ptr::copy_nonoverlapping(self.ring.slot(0), buf.as_mut_ptr().add(first), n - first);
        }

        self.ring
            .head
            .store(head.wrapping_add(n), Ordering::Release);
        n
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

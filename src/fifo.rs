use log::trace;

use crate::error::Error;

/// Single-clock FIFO with a power-of-two number of slots.
///
/// One call to [`step`](Self::step) models one clock edge: both enable
/// inputs are sampled at once and the state advances atomically before the
/// call returns. The queue never reallocates and never reorders; overflow
/// and underflow are absorbed, not reported.
#[derive(Debug)]
pub struct SyncFifo<T: Copy, const N: usize> {
    slots: [T; N],
    wptr: usize,
    rptr: usize,
    count: usize,
}

impl<T: Copy + Default, const N: usize> SyncFifo<T, N> {
    /// Builds an empty FIFO with default-filled backing storage.
    pub fn new() -> Result<Self, Error> {
        Self::with_slots([T::default(); N])
    }
}

impl<T: Copy, const N: usize> SyncFifo<T, N> {
    /// Builds an empty FIFO over caller-provided initial storage, for item
    /// types without a `Default`.
    pub fn with_slots(slots: [T; N]) -> Result<Self, Error> {
        if N == 0 {
            return Err(Error::ZeroCapacity);
        }
        if !N.is_power_of_two() {
            return Err(Error::NotPowerOfTwo(N));
        }
        Ok(Self {
            slots,
            wptr: 0,
            rptr: 0,
            count: 0,
        })
    }

    /// Returns to the empty state. Wins over any request pending in the same
    /// step sequence; the storage itself is not cleared, matching a hardware
    /// reset that leaves the memory array untouched.
    pub fn reset(&mut self) {
        self.wptr = 0;
        self.rptr = 0;
        self.count = 0;
    }

    /// Evaluates one clock edge given the currently-asserted enables and
    /// returns the item produced on this edge, if any.
    ///
    /// Resolution priority, in order:
    /// 1. write + read together, neither full nor empty: one item in, one
    ///    item out, occupancy unchanged;
    /// 2. write, not full: store `write_value`;
    /// 3. read alone, not empty: produce the head item;
    /// 4. anything else: no state change.
    ///
    /// An edge that requested a write never degrades to a lone read, so a
    /// simultaneous request against a full queue is dropped whole, while the
    /// same request against an empty queue degrades to a plain write.
    pub fn step(&mut self, want_write: bool, want_read: bool, write_value: T) -> Option<T> {
        if want_write && want_read && !self.is_full() && !self.is_empty() {
            let value = self.take();
            self.put(write_value);
            Some(value)
        } else if want_write && !self.is_full() {
            self.put(write_value);
            self.count += 1;
            None
        } else if want_read && !want_write && !self.is_empty() {
            let value = self.take();
            self.count -= 1;
            Some(value)
        } else {
            if want_write {
                trace!("write dropped, fifo full ({} slots)", N);
            }
            if want_read && !want_write {
                trace!("read ignored, fifo empty");
            }
            None
        }
    }

    /// Single-request write edge. Returns `false` if the queue was full and
    /// the value was dropped.
    pub fn enqueue(&mut self, value: T) -> bool {
        let accepted = !self.is_full();
        self.step(true, false, value);
        accepted
    }

    /// Single-request read edge.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.take();
        self.count -= 1;
        Some(value)
    }

    /// The item the next read would produce, without consuming it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.slots[self.rptr])
        }
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current occupancy, in `[0, capacity]`.
    pub fn len(&self) -> usize {
        self.count
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    fn put(&mut self, value: T) {
        self.slots[self.wptr] = value;
        self.wptr = Self::advance(self.wptr);
    }

    fn take(&mut self) -> T {
        let value = self.slots[self.rptr];
        self.rptr = Self::advance(self.rptr);
        value
    }

    #[inline]
    fn advance(i: usize) -> usize {
        (i + 1) & (N - 1)
    }
}

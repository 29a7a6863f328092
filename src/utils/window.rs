use alloc::boxed::Box;

/// A fixed-size circular buffer that stores the live samples of a window.
///
/// The buffer has room for exactly `period` values. Slots that have not been
/// written yet hold a caller-chosen sentinel. Once the buffer is full, each
/// new value overwrites the oldest one.
#[derive(Debug, Clone)]
pub struct Window<T> {
    /// The buffer that stores the values
    buf: Box<[T]>,
    /// Value stored in slots that were never written
    sentinel: T,
    /// Next slot to overwrite
    pos: usize,
    /// Number of valid samples, saturates at the period
    len: usize,
}

impl<T: Copy> Window<T> {
    /// Creates a new window with the specified period, every slot holding `sentinel`
    ///
    /// # Arguments
    ///
    /// * `period` - The number of samples in the window, must be non-zero
    /// * `sentinel` - The value held by slots that were never written
    pub fn new(period: usize, sentinel: T) -> Self {
        debug_assert!(period > 0, "period can not be zero");

        Self {
            buf: vec![sentinel; period].into_boxed_slice(),
            sentinel,
            pos: 0,
            len: 0,
        }
    }

    /// Clears the buffer back to the sentinel, keeping its allocation
    pub fn reset(&mut self) {
        self.buf.fill(self.sentinel);
        self.pos = 0;
        self.len = 0;
    }

    /// Returns the capacity of the window
    #[inline]
    pub fn period(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of valid samples in the window
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` once the window holds `period` samples
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.period()
    }

    /// Pushes a new value into the window and returns the value it evicted
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push into the window
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The evicted sample, or `None` while the window is warming up
    pub fn next(&mut self, value: T) -> Option<T> {
        let prev = core::mem::replace(&mut self.buf[self.pos], value);
        let evicted = if self.is_full() {
            Some(prev)
        } else {
            self.len += 1;
            None
        };

        self.pos = (self.pos + 1) % self.period();
        evicted
    }

    /// Returns the slot written by the most recent push
    #[inline]
    pub fn last_index(&self) -> usize {
        (self.pos + self.period() - 1) % self.period()
    }

    /// Returns the value stored at `index`
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.buf[index]
    }

    /// Returns the valid samples in storage order.
    ///
    /// While warming up, writes fill the buffer from slot zero onwards, so the
    /// valid samples are always a prefix of the storage.
    #[inline]
    pub fn filled(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns an iterator over the samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let start = if self.is_full() { self.pos } else { 0 };
        (0..self.len).map(move |i| &self.buf[(start + i) % self.period()])
    }
}

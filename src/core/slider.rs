// Slide index bookkeeping for the hero carousel; wrapping in both
// directions, direct jumps bounds-checked.

pub struct SliderState {
    current: usize,
    len: usize,
}

impl SliderState {
    /// `len` must be at least 1; the wiring bails out earlier on an empty
    /// slide list.
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.current = index;
        }
        self.current
    }
}

/// How many of the newest wishes get a jump-to indicator.
pub const INDICATORS: usize = 5;

/// Which wish is featured. Advances through the list and wraps around;
/// a list of one (or none) never moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Featured index for a list of `len`, falling back to the head when the
    /// list shrank underneath us.
    pub fn current(&self, len: usize) -> usize {
        if self.index < len { self.index } else { 0 }
    }

    pub fn advance(&mut self, len: usize) -> usize {
        self.index = if len <= 1 {
            0
        } else {
            (self.current(len) + 1) % len
        };
        self.index
    }

    /// Number of indicators shown for a list of `len`.
    pub fn indicators(len: usize) -> usize {
        len.min(INDICATORS)
    }

    /// Jump to `index` when it has an indicator. Anything else is ignored
    /// and returns `None`.
    pub fn select(&mut self, index: usize, len: usize) -> Option<usize> {
        if index >= Self::indicators(len) {
            return None;
        }
        self.index = index;
        Some(index)
    }

    /// Back to the newest wish.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

//! UI state machines for interactive blocks. Pure and renderer independent.

/// At most one open item at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Initial state: the first item open when `first_open` is set.
    pub fn new(first_open: bool) -> Self {
        Self {
            open: first_open.then_some(0),
        }
    }

    /// Close `index` if it is open, otherwise make it the only open item.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

/// Cyclic position over `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation controls are only useful with more than one slide.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Optional single active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: Option<usize>,
}

impl Selection {
    pub fn new(initial: Option<usize>) -> Self {
        Self { active: initial }
    }

    pub fn select(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Select `index`, or clear it when it is already active.
    pub fn toggle(&mut self, index: usize) {
        if self.active == Some(index) {
            self.clear();
        } else {
            self.select(index);
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

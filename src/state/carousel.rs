/// Circular slide index over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel { index: 0, len }
    }

    /// `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Follows a new slide count. The current slide is kept while it still
    /// exists, otherwise the carousel restarts at the first one.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    pub fn resized(mut self, len: usize) -> Self {
        self.resize(len);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut c = Carousel::new(3);
        assert_eq!(c.current(), Some(0));
        c.prev();
        assert_eq!(c.current(), Some(2));
        c.next();
        c.next();
        assert_eq!(c.current(), Some(1));
        c.next();
        c.next();
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn empty_carousel_never_has_a_slide() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(0);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(2);
        c.go_to(1);
        assert_eq!(c.current(), Some(1));
        c.go_to(5);
        assert_eq!(c.current(), Some(1));
    }

    #[test]
    fn resize_keeps_slide_that_still_exists() {
        let mut c = Carousel::new(3);
        c.go_to(1);
        c.resize(5);
        assert_eq!(c.current(), Some(1));
        c.go_to(4);
        c.next();
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn resize_restarts_when_slide_disappears() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        c.resize(2);
        assert_eq!(c.current(), Some(0));
        c.prev();
        assert_eq!(c.current(), Some(1));
    }

    #[test]
    fn empty_carousel_comes_alive_after_resize() {
        let mut c = Carousel::new(0);
        assert_eq!(c.current(), None);
        c.resize(2);
        assert_eq!(c.current(), Some(0));
        c.next();
        assert_eq!(c.current(), Some(1));
        assert_eq!(c.resized(0).current(), None);
    }
}

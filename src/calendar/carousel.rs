//! Paging through the months of the calendar

use super::MONTH_NAMES;

const FIRST: u32 = 1;
const LAST: u32 = 12;

/// Which month grid is centered in the paging view.
///
/// The index is always in `1..=12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: u32,
}

impl Carousel {
    /// Center the carousel on `month` (clamped to a valid month)
    pub fn new(month: u32) -> Self {
        Self { index: month.max(FIRST).min(LAST) }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Show the next month. Returns whether the carousel moved (it does not go past December)
    pub fn next(&mut self) -> bool {
        if self.index >= LAST {
            return false;
        }
        self.index += 1;
        true
    }

    /// Show the previous month. Returns whether the carousel moved (it does not go before January)
    pub fn previous(&mut self) -> bool {
        if self.index <= FIRST {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move one month at a time until `month` is centered. Returns the number of moves
    pub fn jump_to(&mut self, month: u32) -> u32 {
        let target = month.max(FIRST).min(LAST);
        let mut moves = 0;
        while self.index < target && self.next() {
            moves += 1;
        }
        while self.index > target && self.previous() {
            moves += 1;
        }
        moves
    }

    /// Horizontal position of the month strip, in percent of the view width
    pub fn offset_percent(&self) -> i32 {
        -100 * (self.index as i32 - FIRST as i32)
    }

    /// The paginator label, e.g. `MAYO`
    pub fn label(&self) -> String {
        MONTH_NAMES[self.index as usize - 1].to_uppercase()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_no_ops() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.previous(), false);
        assert_eq!(carousel.index(), 1);

        let mut carousel = Carousel::new(12);
        assert_eq!(carousel.next(), false);
        assert_eq!(carousel.index(), 12);
    }

    #[test]
    fn index_never_leaves_the_year() {
        let mut carousel = Carousel::new(6);
        for step in 0..40u32 {
            if step % 3 == 0 { carousel.previous(); } else { carousel.next(); }
            assert!((1..=12).contains(&carousel.index()));
        }
        assert_eq!(Carousel::new(0).index(), 1);
        assert_eq!(Carousel::new(99).index(), 12);
    }

    #[test]
    fn jumps() {
        let mut carousel = Carousel::new(10);
        assert_eq!(carousel.jump_to(3), 7);
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.jump_to(4), 1);
        assert_eq!(carousel.jump_to(4), 0);
    }

    #[test]
    fn position_and_label() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.offset_percent(), 0);
        carousel.jump_to(5);
        assert_eq!(carousel.offset_percent(), -400);
        assert_eq!(carousel.label(), "MAYO");
    }
}

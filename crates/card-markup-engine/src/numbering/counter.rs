/// Ordinal counter that refuses to wrap.
///
/// Once the counter has handed out `u64::MAX` it is exhausted and every further
/// [`advance`](Self::advance) returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeCounter {
    next: Option<u64>,
}

impl SafeCounter {
    pub const fn starting_at(start: u64) -> Self {
        Self { next: Some(start) }
    }

    /// Whether `start + additional` is representable.
    pub const fn fits(start: u64, additional: u64) -> bool {
        start.checked_add(additional).is_some()
    }

    pub const fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Returns the current value and moves to the next one.
    pub fn advance(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 0, true)]
    #[case(1, 5, true)]
    #[case(u64::MAX, 0, true)]
    #[case(u64::MAX, 1, false)]
    #[case(u64::MAX - 1, 1, true)]
    #[case(u64::MAX - 1, 2, false)]
    fn fits_checks_the_last_ordinal(
        #[case] start: u64,
        #[case] additional: u64,
        #[case] expected: bool,
    ) {
        assert_eq!(SafeCounter::fits(start, additional), expected);
    }

    #[test]
    fn advances_by_one() {
        let mut counter = SafeCounter::starting_at(5);
        assert_eq!(counter.advance(), Some(5));
        assert_eq!(counter.advance(), Some(6));
        assert_eq!(counter.peek(), Some(7));
    }

    #[test]
    fn exhausts_instead_of_wrapping() {
        let mut counter = SafeCounter::starting_at(u64::MAX);
        assert_eq!(counter.advance(), Some(u64::MAX));
        assert_eq!(counter.advance(), None);
        assert_eq!(counter.advance(), None);
    }
}

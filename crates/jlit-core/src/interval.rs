use thiserror::Error;

/// Construction of an [`Interval`] with `start > end`.
///
/// Under correct callers this is unreachable; it is surfaced as an error
/// rather than a panic so library consumers can treat it as a bug report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid interval: {start} > {end}")]
pub struct InvalidRange {
    pub start: u32,
    pub end: u32,
}

/// A closed character-offset range: both endpoints are included.
///
/// Selections and literal inner spans are expressed as closed intervals, so
/// a caret (zero-width selection) is the degenerate interval `[p, p]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Result<Self, InvalidRange> {
        if start > end {
            return Err(InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(self) -> u32 {
        self.end
    }

    /// Number of offsets covered beyond the first; a caret has length 0.
    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, offset: u32) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// True iff the two closed ranges share at least one point.
    #[inline]
    pub fn intersects(self, other: Interval) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn construction_rejects_inverted_bounds() {
        assert_eq!(
            Interval::new(5, 4),
            Err(InvalidRange { start: 5, end: 4 })
        );
        assert!(Interval::new(4, 4).is_ok());
    }

    #[test]
    fn touching_endpoints_intersect() {
        assert!(iv(0, 3).intersects(iv(3, 7)));
        assert!(iv(3, 7).intersects(iv(0, 3)));
    }

    #[test]
    fn disjoint_ranges_do_not_intersect() {
        assert!(!iv(0, 2).intersects(iv(3, 7)));
        assert!(!iv(3, 7).intersects(iv(0, 2)));
    }

    #[test]
    fn containment_counts_as_intersection() {
        assert!(iv(0, 10).intersects(iv(4, 5)));
        assert!(iv(4, 5).intersects(iv(0, 10)));
    }

    proptest! {
        #[test]
        fn intersects_is_reflexive(s in 0u32..1000, l in 0u32..1000) {
            let a = iv(s, s + l);
            prop_assert!(a.intersects(a));
        }

        #[test]
        fn intersects_is_symmetric(
            s1 in 0u32..1000, l1 in 0u32..1000,
            s2 in 0u32..1000, l2 in 0u32..1000,
        ) {
            let a = iv(s1, s1 + l1);
            let b = iv(s2, s2 + l2);
            prop_assert_eq!(a.intersects(b), b.intersects(a));
        }

        #[test]
        fn intersects_matches_containment_form(
            s1 in 0u32..1000, l1 in 0u32..1000,
            s2 in 0u32..1000, l2 in 0u32..1000,
        ) {
            let a = iv(s1, s1 + l1);
            let b = iv(s2, s2 + l2);
            // The expanded three-condition containment form must agree
            // with the single inequality.
            let reference = (a.start() <= b.start() && a.end() >= b.end())
                || (a.start() >= b.start() && a.start() <= b.end())
                || (a.end() >= b.start() && a.end() <= b.end());
            prop_assert_eq!(a.intersects(b), reference);
        }
    }
}

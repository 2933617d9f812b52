//! Buffer regions and view identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one open view (editor tab, LSP document, CLI buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// A pair of absolute character offsets in a buffer.
///
/// `a` is the start and `b` is the end (exclusive). Offsets count Unicode
/// scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Region {
    pub a: usize,
    pub b: usize,
}

impl Region {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// An empty region at `point`.
    #[inline]
    pub const fn point(point: usize) -> Self {
        Self { a: point, b: point }
    }

    #[inline]
    pub const fn begin(&self) -> usize {
        if self.a < self.b { self.a } else { self.b }
    }

    #[inline]
    pub const fn end(&self) -> usize {
        if self.a < self.b { self.b } else { self.a }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end() - self.begin()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.a == self.b
    }

    /// Returns true if `point` lies in `[begin, end)`.
    #[inline]
    pub const fn contains(&self, point: usize) -> bool {
        self.begin() <= point && point < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains_is_half_open() {
        let r = Region::new(4, 8);
        assert!(!r.contains(3));
        assert!(r.contains(4));
        assert!(r.contains(7));
        assert!(!r.contains(8));
    }

    #[test]
    fn test_empty_region_contains_nothing() {
        let r = Region::point(5);
        assert!(r.is_empty());
        assert!(!r.contains(5));
    }

    #[test]
    fn test_reversed_region_is_normalized() {
        let r = Region::new(9, 2);
        assert_eq!(r.begin(), 2);
        assert_eq!(r.end(), 9);
        assert_eq!(r.len(), 7);
        assert!(r.contains(2));
    }
}

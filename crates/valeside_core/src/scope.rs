//! Chooses which part of a buffer is sent to Vale.

use crate::region::Region;
use crate::view::View;

/// What a lint cycle analyzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDecision {
    /// The whole buffer; alert lines need no adjustment.
    FullBuffer,
    /// Only `bounds`, which starts on row `row_offset`.
    Region { row_offset: usize, bounds: Region },
}

impl ScopeDecision {
    /// Rows to add to Vale's line numbers.
    pub fn row_offset(&self) -> usize {
        match self {
            ScopeDecision::FullBuffer => 0,
            ScopeDecision::Region { row_offset, .. } => *row_offset,
        }
    }

    /// Text bounds for a buffer of `size` characters.
    pub fn bounds(&self, size: usize) -> Region {
        match self {
            ScopeDecision::FullBuffer => Region::new(0, size),
            ScopeDecision::Region { bounds, .. } => *bounds,
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, ScopeDecision::Region { .. })
    }
}

/// Returns true when a buffer of `line_count` rows should be linted one
/// paragraph at a time.
///
/// Only a positive `limit` restricts; zero and negative limits always lint
/// the full buffer.
pub fn should_restrict(line_count: usize, limit: i64) -> bool {
    limit > 0 && line_count as u64 >= limit as u64
}

/// Decides the scope of a lint cycle for `view`.
pub fn select_scope(view: &dyn View, limit: i64) -> ScopeDecision {
    let line_count = view.rowcol(view.size()).0 + 1;
    if !should_restrict(line_count, limit) {
        return ScopeDecision::FullBuffer;
    }

    let bounds = view.expand_to_paragraph(view.primary_caret());
    let (row_offset, _) = view.rowcol(bounds.begin());
    ScopeDecision::Region { row_offset, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::ViewId;
    use crate::view::BufferView;
    use rstest::rstest;

    const DOC: &str = "Intro paragraph.\n\nSecond paragraph line one.\nLine two.\n\nThird.\n";

    fn view_at_row(row: usize) -> BufferView {
        let view = BufferView::new(ViewId(1), DOC);
        let caret = view.text_point(row, 0);
        view.with_caret(caret)
    }

    #[rstest]
    #[case::below_limit(5, 10, false)]
    #[case::at_limit(10, 10, true)]
    #[case::above_limit(11, 10, true)]
    #[case::limit_one(1, 1, true)]
    #[case::zero_limit(1000, 0, false)]
    #[case::negative_limit(1000, -1, false)]
    #[case::very_negative_limit(1, -50, false)]
    fn test_should_restrict(#[case] lines: usize, #[case] limit: i64, #[case] expected: bool) {
        assert_eq!(should_restrict(lines, limit), expected);
    }

    #[test]
    fn test_short_buffer_uses_full_buffer() {
        let view = view_at_row(2);
        // DOC has 7 rows.
        let decision = select_scope(&view, 8);
        assert_eq!(decision, ScopeDecision::FullBuffer);
        assert_eq!(decision.row_offset(), 0);
        assert_eq!(decision.bounds(view.size()), Region::new(0, view.size()));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(-100)]
    fn test_non_positive_limit_uses_full_buffer(#[case] limit: i64) {
        let view = view_at_row(3);
        assert_eq!(select_scope(&view, limit), ScopeDecision::FullBuffer);
    }

    #[test]
    fn test_long_buffer_restricts_to_caret_paragraph() {
        let view = view_at_row(3);
        let decision = select_scope(&view, 7);

        assert!(decision.is_restricted());
        assert_eq!(decision.row_offset(), 2);
        assert_eq!(
            view.substr(decision.bounds(view.size())),
            "Second paragraph line one.\nLine two.\n"
        );
    }

    #[test]
    fn test_restricted_first_paragraph_has_zero_offset() {
        let view = view_at_row(0);
        let decision = select_scope(&view, 1);
        assert_eq!(decision.row_offset(), 0);
        assert_eq!(view.substr(decision.bounds(view.size())), "Intro paragraph.\n");
    }

    #[test]
    fn test_restricted_caret_on_blank_line() {
        let view = view_at_row(4);
        let decision = select_scope(&view, 1);
        assert_eq!(decision.row_offset(), 4);
        assert!(decision.bounds(view.size()).is_empty());
    }
}

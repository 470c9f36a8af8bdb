//! Row cursor logic
//!
//! Pure functions for moving the table cursor. The cursor is an index into
//! the rows of the current page; stepping past either edge flips the page
//! instead of wrapping.

/// Result of a cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// Stay on this page, move to the given row
    Row(usize),
    /// Go to the next page and land on its first row
    NextPage,
    /// Go to the previous page and land on its last row
    PrevPage,
    /// Nothing to do (empty page or already at an edge)
    Stay,
}

/// Move the cursor one row down
///
/// # Examples
/// ```
/// use dashtui::logic::navigation::{cursor_down, CursorMove};
///
/// assert_eq!(cursor_down(0, 3, false), CursorMove::Row(1));
/// assert_eq!(cursor_down(2, 3, true), CursorMove::NextPage);
/// assert_eq!(cursor_down(2, 3, false), CursorMove::Stay);
/// assert_eq!(cursor_down(0, 0, true), CursorMove::Stay);
/// ```
pub fn cursor_down(cursor: usize, page_len: usize, has_next_page: bool) -> CursorMove {
    if page_len == 0 {
        return CursorMove::Stay;
    }
    if cursor + 1 < page_len {
        CursorMove::Row(cursor + 1)
    } else if has_next_page {
        CursorMove::NextPage
    } else {
        CursorMove::Stay
    }
}

/// Move the cursor one row up
///
/// # Examples
/// ```
/// use dashtui::logic::navigation::{cursor_up, CursorMove};
///
/// assert_eq!(cursor_up(2, true), CursorMove::Row(1));
/// assert_eq!(cursor_up(0, true), CursorMove::PrevPage);
/// assert_eq!(cursor_up(0, false), CursorMove::Stay);
/// ```
pub fn cursor_up(cursor: usize, has_prev_page: bool) -> CursorMove {
    if cursor > 0 {
        CursorMove::Row(cursor - 1)
    } else if has_prev_page {
        CursorMove::PrevPage
    } else {
        CursorMove::Stay
    }
}

/// Keep the cursor on a real row after the page shrinks
pub fn clamp_cursor(cursor: usize, page_len: usize) -> usize {
    cursor.min(page_len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_down_within_page() {
        assert_eq!(cursor_down(3, 10, true), CursorMove::Row(4));
    }

    #[test]
    fn test_cursor_up_from_middle_ignores_prev_page() {
        assert_eq!(cursor_up(5, false), CursorMove::Row(4));
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(9, 4), 3);
        assert_eq!(clamp_cursor(2, 4), 2);
        assert_eq!(clamp_cursor(5, 0), 0);
    }
}

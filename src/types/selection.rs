//! Selection addressing over the scrolling message log.
//!
//! A selection endpoint is a four-level address: message row, word within the
//! row, wrap segment within the word, character within the segment. Endpoint
//! comparison is lexicographic in exactly that priority order, which is what
//! the derived `Ord` gives us from the field declaration order. Every
//! boundary decision in the highlight engine reduces to this one comparison.

/// A single character position within the whole message log.
///
/// `split_index` is 0 for words that were not wrapped. For emotes and inline
/// images `char_index` lives in a 2-unit domain (0 = before the word,
/// 1 = after the word, before its trailing space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SelectionPoint {
    pub message_index: usize,
    pub word_index: usize,
    pub split_index: usize,
    pub char_index: usize,
}

impl SelectionPoint {
    pub const fn new(
        message_index: usize,
        word_index: usize,
        split_index: usize,
        char_index: usize,
    ) -> Self {
        Self {
            message_index,
            word_index,
            split_index,
            char_index,
        }
    }
}

/// A normalised selection range: `first <= last` always holds.
///
/// Owned and mutated by the input layer; the rendering core only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub first: SelectionPoint,
    pub last: SelectionPoint,
}

impl Selection {
    /// Build a selection from two raw drag endpoints, in either order.
    pub fn new(a: SelectionPoint, b: SelectionPoint) -> Self {
        if a <= b {
            Self { first: a, last: b }
        } else {
            Self { first: b, last: a }
        }
    }

    /// An empty selection selects no characters and draws no highlight.
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Whether `line` falls inside the selected row range.
    pub fn contains_line(&self, line: usize) -> bool {
        self.first.message_index <= line && line <= self.last.message_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(m: usize, w: usize, s: usize, c: usize) -> SelectionPoint {
        SelectionPoint::new(m, w, s, c)
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // Each earlier field dominates all later fields.
        assert!(p(1, 0, 0, 0) > p(0, 9, 9, 9));
        assert!(p(0, 1, 0, 0) > p(0, 0, 9, 9));
        assert!(p(0, 0, 1, 0) > p(0, 0, 0, 9));
        assert!(p(0, 0, 0, 1) > p(0, 0, 0, 0));
        assert_eq!(p(2, 3, 4, 5), p(2, 3, 4, 5));
    }

    #[test]
    fn test_ordering_antisymmetric_transitive() {
        let points = [
            p(0, 0, 0, 0),
            p(0, 0, 0, 3),
            p(0, 2, 0, 1),
            p(1, 0, 1, 0),
            p(1, 0, 1, 0),
            p(3, 1, 0, 7),
        ];
        for a in &points {
            for b in &points {
                // Antisymmetry: a <= b and b <= a only when equal
                if a <= b && b <= a {
                    assert_eq!(a, b);
                }
                for c in &points {
                    // Transitivity
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_normalisation() {
        let a = p(2, 1, 0, 4);
        let b = p(0, 5, 1, 0);
        let sel = Selection::new(a, b);
        assert_eq!(sel.first, b);
        assert_eq!(sel.last, a);
        assert!(sel.first <= sel.last);
        // Already ordered input is left alone
        let sel = Selection::new(b, a);
        assert_eq!(sel.first, b);
        assert_eq!(sel.last, a);
    }

    #[test]
    fn test_empty_selection() {
        let a = p(1, 2, 0, 3);
        assert!(Selection::new(a, a).is_empty());
        assert!(!Selection::new(a, p(1, 2, 0, 4)).is_empty());
    }

    #[test]
    fn test_contains_line() {
        let sel = Selection::new(p(2, 0, 0, 0), p(4, 1, 0, 0));
        assert!(!sel.contains_line(1));
        assert!(sel.contains_line(2));
        assert!(sel.contains_line(3));
        assert!(sel.contains_line(4));
        assert!(!sel.contains_line(5));
    }
}

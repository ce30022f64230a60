#![forbid(unsafe_code)]

//! Text metrics: word and character counts.

/// Word and character counts for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    /// Number of maximal non-whitespace runs.
    pub words: usize,
    /// Raw character count, whitespace included.
    pub chars: usize,
}

/// Measure `text`. Pure; recomputed on every input change.
///
/// Empty text yields zero words, not one.
#[must_use]
pub fn measure(text: &str) -> TextMetrics {
    TextMetrics {
        words: text.split_whitespace().count(),
        chars: text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert_eq!(measure(""), TextMetrics { words: 0, chars: 0 });
    }

    #[test]
    fn runs_of_whitespace_do_not_inflate_words() {
        assert_eq!(measure("a  b   c"), TextMetrics { words: 3, chars: 8 });
    }

    #[test]
    fn whitespace_only_counts_chars_but_no_words() {
        assert_eq!(measure("   "), TextMetrics { words: 0, chars: 3 });
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        assert_eq!(measure("  olá mundo "), TextMetrics { words: 2, chars: 12 });
    }

    #[test]
    fn chars_count_scalar_values_not_bytes() {
        // "ação" is 4 chars but 6 UTF-8 bytes.
        assert_eq!(measure("ação"), TextMetrics { words: 1, chars: 4 });
    }
}

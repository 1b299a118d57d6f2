mod anchoring;

use super::*;

/// Collect `(category, lexeme)` pairs for compact assertions.
pub(super) fn pairs(input: &str) -> Vec<(TokenCategory, &str)> {
    tokenize(input).map(|token| token.pair()).collect()
}

//! Relevance filter: decides whether a record is game-related.

use crate::catalog::Catalog;

/// Accept iff the board name contains a known gaming board entry, or the
/// concatenated text blob contains a broad game keyword. First match wins;
/// no side effects.
pub fn is_game_related(board: Option<&str>, blob: &str, catalog: &Catalog) -> bool {
    if let Some(board) = board {
        if catalog.gaming_boards.iter().any(|g| board.contains(g)) {
            return true;
        }
    }
    catalog.relevance_keywords.iter().any(|kw| blob.contains(kw))
}

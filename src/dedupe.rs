//! First-occurrence deduplication on the identity key.
//!
//! Keeps the first record per distinct key, preserving relative order.
//! Idempotent: rerunning on its own output is a no-op. The fallback
//! composite key is deliberately lossy (see `KeyStrictness`); collisions
//! between semantically different id-less records are an accepted heuristic
//! limitation, not something to repair here.

use ahash::AHashSet;

/// Retain the first occurrence of each distinct key, in input order.
pub fn dedupe_in_order<T>(items: Vec<T>, key: impl Fn(&T) -> String) -> Vec<T> {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(items.len());
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(key(&item)) {
            unique.push(item);
        }
    }
    unique
}

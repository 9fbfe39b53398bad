//! Discussion-keyword discovery over post title+desc text.

use crate::catalog::Catalog;
use crate::model::Post;
use crate::stats::Counter;
use jieba_rs::Jieba;

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Segment the concatenated title+desc text of all posts, drop tokens of
/// length ≤1, stop-words, and tokens containing any non-CJK character, then
/// tally and return the top `k`.
pub fn top_keywords(posts: &[Post], catalog: &Catalog, k: usize) -> Vec<(String, u64)> {
    let jieba = Jieba::new();
    let mut counter = Counter::new();

    for post in posts {
        let text = post.sentiment_text();
        for word in jieba.cut(&text, false) {
            if word.chars().count() <= 1 {
                continue;
            }
            if catalog.stopwords.iter().any(|s| *s == word) {
                continue;
            }
            if !word.chars().all(is_cjk_ideograph) {
                continue;
            }
            counter.add(word);
        }
    }

    counter.most_common(k)
}

#[path = "common/mod.rs"]
mod common;

use common::*;
use serde_json::json;
use tieba_game_report::{dedupe_in_order, is_game_related, Catalog, KeyStrictness};

/// Board-name path: a known gaming board accepts the record even when the
/// title/desc carry no keyword at all.
#[test]
fn board_name_path_accepts() {
    let catalog = Catalog::builtin();
    assert!(is_game_related(Some("原神"), "", &catalog));
    assert!(is_game_related(Some("主机游戏吧"), "无关内容", &catalog));
}

/// "英雄联盟" is absent from the board list; with no other keyword in the
/// text the record is rejected.
#[test]
fn unknown_board_without_keywords_rejects() {
    let catalog = Catalog::builtin();
    assert!(!is_game_related(Some("英雄联盟"), "今天天气真好 出去散步 英雄联盟 ", &catalog));
}

/// Keyword path: no board, but a broad game keyword in the blob.
#[test]
fn keyword_path_accepts() {
    let catalog = Catalog::builtin();
    assert!(is_game_related(None, "steam夏季促销开始了 ", &catalog));
    assert!(is_game_related(None, "新手攻略来了 ", &catalog));
    assert!(!is_game_related(None, "晚饭吃什么 ", &catalog));
}

/// Missing fields contribute empty text and never fail.
#[test]
fn missing_fields_are_harmless() {
    let catalog = Catalog::builtin();
    let p = post(json!({}));
    assert!(!is_game_related(p.tieba_name.as_deref(), &p.filter_text(), &catalog));
}

#[test]
fn dedupe_keeps_first_occurrence_in_order() {
    let posts = vec![
        post(json!({ "note_id": "a", "title": "第一" })),
        post(json!({ "note_id": "b", "title": "第二" })),
        post(json!({ "note_id": "a", "title": "第三" })),
    ];
    let unique = dedupe_in_order(posts, |p| p.identity_key(KeyStrictness::Lossy));
    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].title.as_deref(), Some("第一"));
    assert_eq!(unique[1].title.as_deref(), Some("第二"));
}

/// Output length never exceeds input length, and rerunning on the output is
/// a no-op.
#[test]
fn dedupe_is_idempotent() {
    let posts: Vec<_> = (0..10)
        .map(|i| post(json!({ "note_id": format!("p{}", i % 4) })))
        .collect();
    let input_len = posts.len();
    let once = dedupe_in_order(posts, |p| p.identity_key(KeyStrictness::Lossy));
    assert!(once.len() <= input_len);
    let first_pass = once.len();
    let twice = dedupe_in_order(once, |p| p.identity_key(KeyStrictness::Lossy));
    assert_eq!(twice.len(), first_pass);
}

/// Records with no id fall back to the composite key; with everything absent
/// the key is still computable, and identical composites merge even for
/// semantically different records. That merge is the documented heuristic.
#[test]
fn lossy_fallback_key_merges_idless_records() {
    let comments = vec![
        comment(json!({ "note_id": "p1", "content": "第一条" })),
        comment(json!({ "note_id": "p2", "content": "完全不同的第二条" })),
    ];
    let unique = dedupe_in_order(comments, |c| c.identity_key(KeyStrictness::Lossy));
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].content.as_deref(), Some("第一条"));
}

/// The strictness knob folds content into the fallback key, so the same two
/// records stay distinct.
#[test]
fn strict_fallback_key_keeps_idless_records_apart() {
    let comments = vec![
        comment(json!({ "note_id": "p1", "content": "第一条" })),
        comment(json!({ "note_id": "p2", "content": "完全不同的第二条" })),
    ];
    let unique = dedupe_in_order(comments, |c| c.identity_key(KeyStrictness::Strict));
    assert_eq!(unique.len(), 2);
}

/// An explicit id always wins over the composite.
#[test]
fn explicit_id_beats_composite() {
    let p1 = post(json!({ "note_id": "x", "title": "同标题", "desc": "同描述" }));
    let p2 = post(json!({ "title": "同标题", "desc": "同描述" }));
    assert_ne!(
        p1.identity_key(KeyStrictness::Lossy),
        p2.identity_key(KeyStrictness::Lossy)
    );
}

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tieba_game_report::{Comment, Post};

/// Write a JSON array document the way the crawler produces them.
pub fn write_json_array(path: &Path, records: &[Value]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(&records.to_vec()).unwrap()).unwrap();
}

/// Build a `Post` from a JSON literal.
pub fn post(v: Value) -> Post {
    serde_json::from_value(v).unwrap()
}

/// Build a `Comment` from a JSON literal.
pub fn comment(v: Value) -> Comment {
    serde_json::from_value(v).unwrap()
}

/// Tiny but representative corpus:
/// - `contents_a.json`: p1 (原神, positive, 10 replies), p2 (ps5 complaint,
///   50 replies), p3 (王者荣耀+原神 mobile, 2 replies), p4 (off-topic, board
///   英雄联盟 — rejected by the relevance filter).
/// - `contents_b.json`: p5 (duplicate note_id of p1), p6 (switch/塞尔达
///   very-positive, 8 replies).
/// - `comments_a.json`: c1, c2 (on p1), c3 (on p2), c4 (off-topic chatter).
/// - `子目录/comments_b.json`: c5 (dangling parent), c6 (duplicate id of c1).
/// - `bad_contents.json`: not JSON at all; must be skipped, not fatal.
///
/// Raw: 6 posts / 6 comments. Relevant: 5 / 5. Unique: 4 / 4.
pub fn make_corpus_basic() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();

    write_json_array(
        &base.join("contents_a.json"),
        &[
            json!({
                "note_id": "p1", "title": "原神新版本真好玩",
                "desc": "画质优秀 值得推荐", "tieba_name": "原神",
                "publish_time": "2025-11-14 12:30:00", "total_replay_num": 10,
                "author": "用户A"
            }),
            json!({
                "note_id": "p2", "title": "ps5卡顿严重 非常失望",
                "desc": "加载太慢 后悔买了", "tieba_name": "主机游戏",
                "publish_time": "2025-11-15 20:00:00", "total_replay_num": 50
            }),
            json!({
                "note_id": "p3", "title": "王者荣耀手游测评 原神联动",
                "desc": "手机上也能玩 不错", "tieba_name": "王者荣耀",
                "publish_time": "2025-12-24 08:15:00", "total_replay_num": 2
            }),
            json!({
                "note_id": "p4", "title": "今天天气真好",
                "desc": "出去散步", "tieba_name": "英雄联盟"
            }),
        ],
    );

    write_json_array(
        &base.join("contents_b.json"),
        &[
            json!({
                "note_id": "p1", "title": "原神新版本真好玩(重复)",
                "desc": "画质优秀 推荐入坑", "tieba_name": "原神",
                "publish_time": "2025-11-14 12:30:00", "total_replay_num": 10
            }),
            json!({
                "note_id": "p6", "title": "switch游戏推荐",
                "desc": "塞尔达传说 神作", "tieba_name": "switch",
                "publish_time": "2025-12-25 10:00:00", "total_replay_num": 8
            }),
        ],
    );

    write_json_array(
        &base.join("comments_a.json"),
        &[
            json!({ "comment_id": "c1", "note_id": "p1", "content": "原神真不错 推荐" }),
            json!({ "comment_id": "c2", "note_id": "p1", "content": "游戏画质很棒" }),
            json!({ "comment_id": "c3", "note_id": "p2", "content": "同感 卡顿太严重了" }),
            json!({ "comment_id": "c4", "note_id": "p1", "content": "天气好呀" }),
        ],
    );

    write_json_array(
        &base.join("子目录").join("comments_b.json"),
        &[
            json!({ "comment_id": "c5", "note_id": "p999", "content": "这游戏好玩" }),
            json!({ "comment_id": "c1", "note_id": "p1", "content": "重复评论 游戏" }),
        ],
    );

    fs::write(base.join("bad_contents.json"), b"this is not json {{{").unwrap();

    base
}

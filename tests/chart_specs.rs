#[path = "common/mod.rs"]
mod common;

use common::*;
use serde_json::json;
use std::collections::HashSet;
use tieba_game_report::{
    analyze, classify_post, specs, AnalysisReport, ChartData, ChartKind, ReportOptions,
    HOST_PSEUDO_GAME,
};

fn small_report() -> AnalysisReport {
    let opts = ReportOptions::default();
    let mut posts = vec![
        post(json!({ "note_id": "p1", "title": "原神真好玩", "desc": "推荐", "tieba_name": "原神",
                     "publish_time": "2025-11-14 12:30:00", "total_replay_num": 10 })),
        post(json!({ "note_id": "p2", "title": "ps5发热严重", "desc": "失望", "tieba_name": "主机游戏",
                     "publish_time": "2025-11-15 20:00:00", "total_replay_num": 3 })),
        post(json!({ "note_id": "p3", "title": "原神手游版不错", "desc": "", "tieba_name": "手游",
                     "publish_time": "2025-12-01 09:00:00", "total_replay_num": 7 })),
    ];
    for p in posts.iter_mut() {
        classify_post(p, &opts.catalog);
    }
    let comments = vec![
        comment(json!({ "comment_id": "c1", "note_id": "p1", "content": "游戏不错" })),
        comment(json!({ "comment_id": "c2", "note_id": "p1", "content": "画质强" })),
    ];
    analyze(&posts, &comments, &opts)
}

/// Every present aggregate maps to exactly one chart spec with a distinct
/// file stem.
#[test]
fn spec_stems_are_unique_and_kinds_match_shapes() {
    let report = small_report();
    let all = specs(&report);
    assert!(!all.is_empty());

    let stems: HashSet<_> = all.iter().map(|s| s.stem).collect();
    assert_eq!(stems.len(), all.len());

    for spec in &all {
        match (&spec.kind, &spec.data) {
            (ChartKind::Bar | ChartKind::Histogram | ChartKind::HorizontalBar
                | ChartKind::Line | ChartKind::Pie, ChartData::Categories { labels, values }) => {
                assert_eq!(labels.len(), values.len(), "{}", spec.stem);
            }
            (ChartKind::MultiLine | ChartKind::GroupedBar, ChartData::Series { labels, series }) => {
                for (_, values) in series {
                    assert_eq!(labels.len(), values.len(), "{}", spec.stem);
                }
            }
            (ChartKind::Scatter, ChartData::Points { points }) => {
                assert!(!points.is_empty(), "{}", spec.stem);
            }
            other => panic!("kind/data mismatch in {}: {:?}", spec.stem, other.0),
        }
    }
}

/// Pseudo-game markers are dropped from the per-platform game bar charts.
#[test]
fn pseudo_markers_never_reach_game_bar_charts() {
    let report = small_report();
    // p2 matched no explicit game, so the host tally carries the marker...
    let host = report.hot_host_games.as_ref().unwrap();
    assert!(host.iter().any(|(name, _)| name == HOST_PSEUDO_GAME));

    // ...but the rendered chart series must not.
    let all = specs(&report);
    let chart = all.iter().find(|s| s.stem == "hot_host_games").unwrap();
    let ChartData::Categories { labels, .. } = &chart.data else {
        panic!("host game chart should be categorical");
    };
    assert!(labels.iter().all(|l| l != HOST_PSEUDO_GAME));
    assert!(labels.iter().any(|l| l == "原神"));
}

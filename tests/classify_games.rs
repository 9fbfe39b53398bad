#[path = "common/mod.rs"]
mod common;

use common::*;
use serde_json::json;
use tieba_game_report::{
    classify_post, cross_platform_games, game_type_of, matched_games, mention_tallies,
    Catalog, Counter, GameType, Sentiment, HOST_PSEUDO_GAME, MOBILE_PSEUDO_GAME,
};

#[test]
fn game_type_four_way_rule() {
    let catalog = Catalog::builtin();
    assert_eq!(
        game_type_of("白天玩ps5 晚上玩手游", &catalog),
        GameType::CrossPlatform
    );
    assert_eq!(game_type_of("刚入手switch真香", &catalog), GameType::Host);
    assert_eq!(game_type_of("安卓手机也能玩", &catalog), GameType::Mobile);
    assert_eq!(game_type_of("今天天气真好", &catalog), GameType::Other);
}

/// Platform keywords are compared on the lowercased text.
#[test]
fn game_type_is_case_insensitive_on_platform_tokens() {
    let catalog = Catalog::builtin();
    assert_eq!(game_type_of("我的PS5到货了", &catalog), GameType::Host);
}

#[test]
fn explicit_names_are_matched_as_raw_substrings() {
    let catalog = Catalog::builtin();
    let games = matched_games("原神和王者荣耀都玩 塞尔达传说也玩", &catalog);
    assert!(games.contains(&"原神".to_string()));
    assert!(games.contains(&"王者荣耀".to_string()));
    // "塞尔达传说" contains "塞尔达", so both catalog entries match.
    assert!(games.contains(&"塞尔达".to_string()));
    assert!(games.contains(&"塞尔达传说".to_string()));
    // Game names are case-sensitive; "GTA5" does not hit the "gta5" entry.
    assert!(matched_games("入手了GTA5", &catalog).is_empty());
}

/// A post may contribute to several game tallies at once; a name sitting in
/// both sub-catalogs feeds both.
#[test]
fn tallies_are_additive_not_exclusive() {
    let catalog = Catalog::builtin();
    let mut posts = vec![post(json!({
        "note_id": "p1", "title": "原神和王者荣耀都在玩", "desc": "", "tieba_name": "游戏"
    }))];
    for p in posts.iter_mut() {
        classify_post(p, &catalog);
    }
    let tallies = mention_tallies(&posts, &catalog);
    assert_eq!(tallies.overall.get("原神"), 1);
    assert_eq!(tallies.overall.get("王者荣耀"), 1);
    assert_eq!(tallies.host.get("原神"), 1);
    assert_eq!(tallies.mobile.get("原神"), 1);
    assert_eq!(tallies.mobile.get("王者荣耀"), 1);
    assert_eq!(tallies.host.get("王者荣耀"), 0);
    assert_eq!(tallies.platform_only_host, 0);
    assert_eq!(tallies.platform_only_mobile, 0);
}

/// Pseudo-game markers appear only when no explicit name matched, and the
/// host/mobile flags are independent.
#[test]
fn platform_only_posts_feed_pseudo_markers() {
    let catalog = Catalog::builtin();
    let mut posts = vec![
        post(json!({ "note_id": "p1", "title": "ps5好还是手机好", "desc": "", "tieba_name": "" })),
        post(json!({ "note_id": "p2", "title": "xbox series入手体验", "desc": "", "tieba_name": "" })),
        // Explicit name present: no pseudo marker even though "switch" matches.
        post(json!({ "note_id": "p3", "title": "switch上的塞尔达", "desc": "", "tieba_name": "" })),
    ];
    for p in posts.iter_mut() {
        classify_post(p, &catalog);
    }
    let tallies = mention_tallies(&posts, &catalog);
    assert_eq!(tallies.host.get(HOST_PSEUDO_GAME), 2);
    assert_eq!(tallies.mobile.get(MOBILE_PSEUDO_GAME), 1);
    assert_eq!(tallies.platform_only_host, 2);
    assert_eq!(tallies.platform_only_mobile, 1);
    assert_eq!(tallies.host.get("塞尔达"), 1);
}

/// Cross-platform games: nonzero on both sides, pseudo markers excluded,
/// each name exactly once.
#[test]
fn cross_platform_set_excludes_pseudo_markers() {
    let mut host = Counter::new();
    host.add_n("原神", 2);
    host.add_n(HOST_PSEUDO_GAME, 3);
    host.add_n("塞尔达", 1);
    let mut mobile = Counter::new();
    mobile.add_n("原神", 1);
    mobile.add_n(MOBILE_PSEUDO_GAME, 5);

    let cross = cross_platform_games(&host, &mobile);
    assert_eq!(cross.len(), 1);
    assert_eq!(cross[0].name, "原神");
    assert_eq!(cross[0].host_mentions, 2);
    assert_eq!(cross[0].mobile_mentions, 1);
    assert_eq!(cross[0].total_mentions, 3);
}

/// Classification is a pure function of the text: re-running it on the same
/// post changes nothing.
#[test]
fn classification_is_deterministic() {
    let catalog = Catalog::builtin();
    let mut p = post(json!({
        "note_id": "p1", "title": "ps5上的原神真神作", "desc": "画质震撼", "tieba_name": "主机游戏"
    }));
    classify_post(&mut p, &catalog);
    let first = p.clone();
    classify_post(&mut p, &catalog);
    assert_eq!(p.matched_games, first.matched_games);
    assert_eq!(p.game_type, first.game_type);
    assert_eq!(p.post_length, first.post_length);
    assert_eq!(p.sentiment, first.sentiment);
    assert_eq!(p.game_type, Some(GameType::Host));
    assert_eq!(p.sentiment, Some(Sentiment::VeryPositive));
}

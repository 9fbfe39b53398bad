//! Game/platform classification.
//!
//! Two separate passes over the same text:
//!  - additive mention tallies (a post may count toward several game names at
//!    once, and a name may sit in both the host and mobile sub-catalogs);
//!  - a single-label coarse `game_type` from platform keywords only, used for
//!    the time-trend buckets.

use crate::catalog::{Catalog, HOST_PSEUDO_GAME, MOBILE_PSEUDO_GAME};
use crate::model::{GameType, Post};
use crate::sentiment;
use crate::stats::Counter;
use serde::Serialize;

/// Explicit game names found in `text`. Game names are matched as raw
/// substrings (the catalogs carry CJK names plus lowercase latin tokens).
pub fn matched_games(text: &str, catalog: &Catalog) -> Vec<String> {
    catalog
        .all_games()
        .iter()
        .filter(|g| text.contains(*g))
        .map(|g| g.to_string())
        .collect()
}

fn hits_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

/// Coarse 4-way platform label from the lowercased text, ignoring explicit
/// game names entirely. Mutually exclusive by construction.
pub fn game_type_of(text: &str, catalog: &Catalog) -> GameType {
    let lower = text.to_lowercase();
    let is_host = hits_any(&lower, &catalog.host_platform_keywords);
    let is_mobile = hits_any(&lower, &catalog.mobile_platform_keywords);
    match (is_host, is_mobile) {
        (true, true) => GameType::CrossPlatform,
        (true, false) => GameType::Host,
        (false, true) => GameType::Mobile,
        (false, false) => GameType::Other,
    }
}

/// Populate a post's derived fields. Pure function of the post's text and the
/// catalog; re-running on identical input yields identical output.
pub fn classify_post(post: &mut Post, catalog: &Catalog) {
    let text = post.classify_text();
    post.matched_games = matched_games(&text, catalog);
    post.game_type = Some(game_type_of(&text, catalog));
    post.post_length = Some(post.text_length());
    post.sentiment = Some(sentiment::classify(&post.sentiment_text(), catalog));
}

/// Additive mention tallies across the classified posts.
#[derive(Debug, Default)]
pub struct MentionTallies {
    /// Every explicit game name, regardless of sub-catalog.
    pub overall: Counter,
    /// Names from the host catalog, plus the host pseudo-game marker.
    pub host: Counter,
    /// Names from the mobile catalog, plus the mobile pseudo-game marker.
    pub mobile: Counter,
    /// Posts classified host purely via platform keywords.
    pub platform_only_host: u64,
    /// Posts classified mobile purely via platform keywords.
    pub platform_only_mobile: u64,
}

/// Tally game mentions. Expects `classify_post` to have populated
/// `matched_games`. When no explicit name matched, platform keywords route
/// the post into the synthetic pseudo-game buckets; host and mobile flags
/// are tested independently, so one post can feed both.
pub fn mention_tallies(posts: &[Post], catalog: &Catalog) -> MentionTallies {
    let mut tallies = MentionTallies::default();

    for post in posts {
        if !post.matched_games.is_empty() {
            for game in &post.matched_games {
                tallies.overall.add(game);
                if catalog.host_games.iter().any(|g| *g == game.as_str()) {
                    tallies.host.add(game);
                }
                if catalog.mobile_games.iter().any(|g| *g == game.as_str()) {
                    tallies.mobile.add(game);
                }
            }
            continue;
        }

        let lower = post.classify_text().to_lowercase();
        if hits_any(&lower, &catalog.host_platform_keywords) {
            tallies.platform_only_host += 1;
            tallies.host.add(HOST_PSEUDO_GAME);
        }
        if hits_any(&lower, &catalog.mobile_platform_keywords) {
            tallies.platform_only_mobile += 1;
            tallies.mobile.add(MOBILE_PSEUDO_GAME);
        }
    }

    tallies
}

/// A game mentioned on both platforms, with its per-platform counts.
#[derive(Clone, Debug, Serialize)]
pub struct CrossPlatformGame {
    pub name: String,
    pub host_mentions: u64,
    pub mobile_mentions: u64,
    pub total_mentions: u64,
}

/// Games with a nonzero tally on both platforms. The synthetic pseudo-game
/// markers never qualify; each name appears at most once, in host-tally
/// encounter order.
pub fn cross_platform_games(host: &Counter, mobile: &Counter) -> Vec<CrossPlatformGame> {
    host.iter()
        .filter(|(name, count)| {
            *count > 0
                && *name != HOST_PSEUDO_GAME
                && *name != MOBILE_PSEUDO_GAME
                && mobile.get(name) > 0
        })
        .map(|(name, host_mentions)| {
            let mobile_mentions = mobile.get(name);
            CrossPlatformGame {
                name: name.to_string(),
                host_mentions,
                mobile_mentions,
                total_mentions: host_mentions + mobile_mentions,
            }
        })
        .collect()
}

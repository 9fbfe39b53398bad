//! Time-bucketed tables: daily/monthly counts and grouped reply-count means.
//!
//! Posts without a parseable publish time simply drop out of the time
//! buckets; posts without a reply count drop out of the means (absent is not
//! zero).

use crate::catalog::Catalog;
use crate::date::{date_key, YearMonth};
use crate::model::{GameType, Post};
use serde::Serialize;
use std::collections::BTreeMap;

/// Post count per calendar date, ascending by date.
pub fn posts_per_day(posts: &[Post]) -> BTreeMap<String, u64> {
    let mut days = BTreeMap::new();
    for post in posts {
        if let Some(dt) = post.parsed_time() {
            *days.entry(date_key(&dt)).or_insert(0) += 1;
        }
    }
    days
}

/// Month-by-game-type count table, months ascending, one aligned count row
/// per game type that occurs.
#[derive(Clone, Debug, Serialize)]
pub struct MonthlyTypeTable {
    pub months: Vec<YearMonth>,
    pub series: Vec<MonthlySeries>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MonthlySeries {
    pub game_type: String,
    pub counts: Vec<u64>,
}

pub fn monthly_by_game_type(posts: &[Post]) -> MonthlyTypeTable {
    let mut table: BTreeMap<YearMonth, BTreeMap<&'static str, u64>> = BTreeMap::new();
    for post in posts {
        let (Some(dt), Some(gt)) = (post.parsed_time(), post.game_type) else {
            continue;
        };
        *table
            .entry(YearMonth::of(&dt))
            .or_default()
            .entry(gt.label())
            .or_insert(0) += 1;
    }

    let months: Vec<YearMonth> = table.keys().copied().collect();
    let series = GameType::ALL
        .iter()
        .filter_map(|gt| {
            let counts: Vec<u64> = months
                .iter()
                .map(|m| table[m].get(gt.label()).copied().unwrap_or(0))
                .collect();
            if counts.iter().all(|c| *c == 0) {
                None
            } else {
                Some(MonthlySeries { game_type: gt.label().to_string(), counts })
            }
        })
        .collect();

    MonthlyTypeTable { months, series }
}

fn push_mean<K: Ord>(acc: &mut BTreeMap<K, (f64, u64)>, key: K, value: f64) {
    let slot = acc.entry(key).or_insert((0.0, 0));
    slot.0 += value;
    slot.1 += 1;
}

/// Mean reply count per publish hour (0-23), hours present only, ascending.
pub fn mean_replies_by_hour(posts: &[Post]) -> Vec<(u8, f64)> {
    let mut acc: BTreeMap<u8, (f64, u64)> = BTreeMap::new();
    for post in posts {
        if let (Some(dt), Some(replies)) = (post.parsed_time(), post.total_replay_num) {
            push_mean(&mut acc, dt.hour(), replies as f64);
        }
    }
    acc.into_iter().map(|(h, (sum, n))| (h, sum / n as f64)).collect()
}

/// Mean reply count per day-of-week, Monday first, localized labels, days
/// present only.
pub fn mean_replies_by_weekday(posts: &[Post], catalog: &Catalog) -> Vec<(String, f64)> {
    let mut acc: BTreeMap<u8, (f64, u64)> = BTreeMap::new();
    for post in posts {
        if let (Some(dt), Some(replies)) = (post.parsed_time(), post.total_replay_num) {
            push_mean(
                &mut acc,
                dt.date().weekday().number_days_from_monday(),
                replies as f64,
            );
        }
    }
    acc.into_iter()
        .map(|(d, (sum, n))| {
            (catalog.weekday_labels[d as usize].to_string(), sum / n as f64)
        })
        .collect()
}

/// Mean reply count per post-length bin, restricted to posts with at least
/// one reply. Bins are left-closed right-open; only bins with data appear.
pub fn mean_replies_by_length_bin(posts: &[Post], catalog: &Catalog) -> Vec<(String, f64)> {
    let mut acc: Vec<(f64, u64)> = vec![(0.0, 0); catalog.length_bins.len()];
    for post in posts {
        let Some(replies) = post.total_replay_num.filter(|r| *r > 0) else {
            continue;
        };
        let length = post.post_length.unwrap_or_else(|| post.text_length());
        for (i, (lo, hi, _)) in catalog.length_bins.iter().enumerate() {
            if length >= *lo && hi.map_or(true, |hi| length < hi) {
                acc[i].0 += replies as f64;
                acc[i].1 += 1;
                break;
            }
        }
    }
    catalog
        .length_bins
        .iter()
        .zip(acc)
        .filter(|(_, (_, n))| *n > 0)
        .map(|((_, _, label), (sum, n))| (label.to_string(), sum / n as f64))
        .collect()
}

/// Mean reply count per coarse game type, in fixed label order.
pub fn mean_replies_by_game_type(posts: &[Post]) -> Vec<(String, f64)> {
    let mut acc: BTreeMap<&'static str, (f64, u64)> = BTreeMap::new();
    for post in posts {
        if let (Some(gt), Some(replies)) = (post.game_type, post.total_replay_num) {
            push_mean(&mut acc, gt.label(), replies as f64);
        }
    }
    GameType::ALL
        .iter()
        .filter_map(|gt| {
            acc.get(gt.label())
                .map(|(sum, n)| (gt.label().to_string(), sum / *n as f64))
        })
        .collect()
}

//! Order-insensitive pure aggregations: stable frequency ranking, IQR
//! outlier-trimmed summaries, Pearson correlation.

use ahash::AHashMap;
use serde::Serialize;

/// Insertion-ordered frequency counter. `most_common` breaks count ties by
/// first-encountered order (stable sort).
#[derive(Clone, Debug, Default)]
pub struct Counter {
    index: AHashMap<String, usize>,
    items: Vec<(String, u64)>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: &str, n: u64) {
        if let Some(&i) = self.index.get(key) {
            self.items[i].1 += n;
        } else {
            self.index.insert(key.to_string(), self.items.len());
            self.items.push((key.to_string(), n));
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map(|&i| self.items[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First-seen iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Top `k` entries, descending by count, ties in first-seen order.
    pub fn most_common(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked = self.items.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// Count occurrences of each key in encounter order, then return the top `k`.
/// Returns `None` when there is nothing to rank.
pub fn top_k<I, S>(keys: I, k: usize) -> Option<Vec<(String, u64)>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = Counter::new();
    for key in keys {
        counter.add(key.as_ref());
    }
    if counter.is_empty() {
        None
    } else {
        Some(counter.most_common(k))
    }
}

/// Summary of a numeric column after IQR outlier trimming.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrimmedSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub outlier_count: usize,
    pub kept_count: usize,
}

/// Linear-interpolation quantile over a sorted slice (the pandas default).
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}

/// Mean/max/min restricted to values inside [Q1-1.5·IQR, Q3+1.5·IQR], plus
/// the out-of-bound count. For an all-equal column IQR is zero, the bounds
/// collapse onto the value, and nothing is trimmed. `None` on empty input.
pub fn iqr_trimmed_summary(values: &[f64]) -> Option<TrimmedSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;

    let kept: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v >= lower && *v <= upper)
        .collect();
    // With finite inputs the bounds always keep the quartile range itself.
    debug_assert!(!kept.is_empty());

    let mean = kept.iter().sum::<f64>() / kept.len() as f64;
    let max = kept.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = kept.iter().copied().fold(f64::INFINITY, f64::min);

    Some(TrimmedSummary {
        mean,
        max,
        min,
        outlier_count: values.len() - kept.len(),
        kept_count: kept.len(),
    })
}

/// One histogram bucket: [lower, upper) except the last, which is closed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Equal-width histogram. `None` on empty input; a degenerate column
/// (min == max) collapses into a single full bucket.
pub fn histogram(values: &[f64], bins: usize) -> Option<Vec<HistBin>> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Some(vec![HistBin { lower: min, upper: max, count: values.len() as u64 }]);
    }
    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Some(
        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistBin {
                lower: min + i as f64 * width,
                upper: min + (i + 1) as f64 * width,
                count,
            })
            .collect(),
    )
}

/// Standard Pearson correlation. `None` when fewer than two points, when the
/// columns differ in length, or when either column has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some(cov / (vx.sqrt() * vy.sqrt()))
}

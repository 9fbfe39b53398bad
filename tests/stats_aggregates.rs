use tieba_game_report::{histogram, iqr_trimmed_summary, pearson, top_k, Counter};

#[test]
fn ranking_breaks_ties_by_first_encounter() {
    let ranked = top_k(["a", "b", "a", "c", "b", "a"], 2).unwrap();
    assert_eq!(ranked, vec![("a".to_string(), 3), ("b".to_string(), 2)]);

    // "c" and "b" both have one hit; "c" was seen first.
    let ranked = top_k(["c", "b", "a", "a"], 3).unwrap();
    assert_eq!(
        ranked,
        vec![
            ("a".to_string(), 2),
            ("c".to_string(), 1),
            ("b".to_string(), 1)
        ]
    );
}

#[test]
fn ranking_of_nothing_is_absent() {
    assert!(top_k(Vec::<String>::new(), 5).is_none());
}

#[test]
fn counter_get_and_order() {
    let mut counter = Counter::new();
    counter.add("x");
    counter.add("y");
    counter.add("x");
    assert_eq!(counter.get("x"), 2);
    assert_eq!(counter.get("missing"), 0);
    let keys: Vec<_> = counter.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, vec!["x", "y"]);
}

/// Degenerate distribution: IQR is zero, the bounds collapse onto the value,
/// nothing is trimmed.
#[test]
fn all_equal_column_trims_nothing() {
    let summary = iqr_trimmed_summary(&[7.0, 7.0, 7.0, 7.0]).unwrap();
    assert_eq!(summary.outlier_count, 0);
    assert_eq!(summary.kept_count, 4);
    assert_eq!(summary.mean, 7.0);
    assert_eq!(summary.min, 7.0);
    assert_eq!(summary.max, 7.0);
}

/// [2, 8, 10, 50]: Q1 = 6.5, Q3 = 20, IQR = 13.5, bounds [-13.75, 40.25];
/// only 50 falls outside.
#[test]
fn iqr_trimming_drops_the_extreme_point() {
    let summary = iqr_trimmed_summary(&[10.0, 50.0, 2.0, 8.0]).unwrap();
    assert_eq!(summary.outlier_count, 1);
    assert_eq!(summary.kept_count, 3);
    assert_eq!(summary.min, 2.0);
    assert_eq!(summary.max, 10.0);
    assert!((summary.mean - 20.0 / 3.0).abs() < 1e-12);
}

#[test]
fn empty_column_has_no_summary() {
    assert!(iqr_trimmed_summary(&[]).is_none());
}

/// Hand-computed Pearson value: lengths [10, 20, 30], replies [5, 10, 14]
/// gives cov 90, var_x 200, var_y 40.666…, r = 90 / √8133.33… ≈ 0.99795.
#[test]
fn pearson_matches_hand_computed_value() {
    let r = pearson(&[10.0, 20.0, 30.0], &[5.0, 10.0, 14.0]).unwrap();
    assert!((r - 0.99795).abs() < 1e-4, "r = {r}");

    let exact = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert!((exact - 1.0).abs() < 1e-12);
}

#[test]
fn pearson_insufficient_or_flat_input_is_absent() {
    assert!(pearson(&[1.0], &[2.0]).is_none());
    assert!(pearson(&[1.0, 2.0], &[3.0]).is_none());
    // Zero variance on one side.
    assert!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).is_none());
}

#[test]
fn histogram_covers_the_range() {
    let bins = histogram(&[1.0, 2.0, 3.0, 4.0, 10.0], 3).unwrap();
    assert_eq!(bins.len(), 3);
    assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 5);
    // The max value lands in the last bucket.
    assert_eq!(bins.last().unwrap().count, 1);

    // Degenerate column: one full bucket.
    let flat = histogram(&[4.0, 4.0], 10).unwrap();
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].count, 2);
}

//! Score metric behavior over realistic datasets.

use formic::{DataSet, MdlScore, ScoreMetric, SearchError};

/// Balanced rows where var0 and var1 are statistically independent.
fn independent_data() -> DataSet {
    let mut rows = Vec::new();
    for i in 0..16u8 {
        rows.push(vec![i % 2, (i / 2) % 2]);
    }
    DataSet::new(vec![2, 2], &rows).unwrap()
}

#[test]
fn informative_parent_improves_score() {
    // var1 == var0: conditioning removes all uncertainty
    let rows: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i % 2, i % 2]).collect();
    let data = DataSet::new(vec![2, 2], &rows).unwrap();
    let scorer = MdlScore::new(&data);

    let alone = scorer.node_score(1, &[]).unwrap();
    let with_parent = scorer.node_score(1, &[0]).unwrap();
    assert!(with_parent > alone);
}

#[test]
fn independent_parent_hurts_score() {
    // no information gained, but the penalty doubles
    let data = independent_data();
    let scorer = MdlScore::new(&data);

    let alone = scorer.node_score(1, &[]).unwrap();
    let with_parent = scorer.node_score(1, &[0]).unwrap();
    assert!(with_parent < alone);
}

#[test]
fn scores_are_negative_for_uncertain_variables() {
    let data = independent_data();
    let scorer = MdlScore::new(&data);
    assert!(scorer.node_score(0, &[]).unwrap() < 0.0);
}

#[test]
fn score_is_deterministic_across_calls() {
    let data = independent_data();
    let scorer = MdlScore::new(&data);
    let a = scorer.node_score(1, &[0]).unwrap();
    let b = scorer.node_score(1, &[0]).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn malformed_queries_are_rejected() {
    let data = independent_data();
    let scorer = MdlScore::new(&data);
    assert!(matches!(scorer.node_score(9, &[]), Err(SearchError::Score(_))));
    assert!(matches!(scorer.node_score(0, &[9]), Err(SearchError::Score(_))));
    assert!(matches!(scorer.node_score(0, &[1, 1]), Err(SearchError::Score(_))));
}

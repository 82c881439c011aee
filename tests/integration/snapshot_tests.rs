//! Snapshot round trips through the public API.

use formic::{learn_structure, ColonyConfig, DataSet, Network, StructureSnapshot};

fn sample_data() -> DataSet {
    let rows: Vec<Vec<u8>> = (0..12u8).map(|i| vec![i % 2, i % 2, (i / 2) % 2]).collect();
    DataSet::new(vec![2, 2, 2], &rows).unwrap()
}

#[test]
fn learned_structure_snapshots_cleanly() {
    let config = ColonyConfig { iterations: 3, ants: 2, ..Default::default() };
    let (network, _) = learn_structure(&sample_data(), config).unwrap();

    let snapshot = StructureSnapshot::new(network);
    assert!(snapshot.validate_compatibility().is_ok());
}

#[test]
fn snapshot_preserves_parent_sets() {
    let mut network = Network::new(3, usize::MAX);
    network.add_parent(1, 0);
    network.add_parent(2, 0);

    let snapshot = StructureSnapshot::new(network.clone());
    for node in 0..3 {
        assert_eq!(snapshot.structure.parents(node), network.parents(node));
    }
}

#[test]
fn tampered_snapshot_fails_validation() {
    let mut network = Network::new(2, usize::MAX);
    network.add_parent(1, 0);
    let mut snapshot = StructureSnapshot::new(network);

    // simulate a corrupted restore: metadata no longer matches
    snapshot.metadata.num_nodes = 5;
    assert!(snapshot.validate_compatibility().is_err());
}

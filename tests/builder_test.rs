//! Tests for ForestBuilder

use rstest::rstest;

use domset::domain::{DomainError, ForestBuilder};

#[test]
fn given_parent_array_when_building_then_creates_forest() {
    // Arrange
    let parents = [None, Some(0), Some(0), Some(0), Some(0), Some(0), Some(1), Some(1), Some(3), Some(3)];

    // Act
    let forest = ForestBuilder::new().build(&parents).unwrap();

    // Assert
    assert_eq!(forest.len(), 10);
    assert_eq!(forest.roots(), vec![0]);
    assert_eq!(forest.get_node(0).unwrap().children, vec![1, 2, 3, 4, 5]);
    assert_eq!(forest.depth(), 3);
    assert!(forest.is_young_parent(1));
    assert!(forest.is_young_parent(3));
    assert!(!forest.is_young_parent(0));
}

#[test]
fn given_parent_array_when_building_then_relations_are_consistent() {
    let parents = [Some(3), None, Some(3), Some(1), Some(1)];

    let forest = ForestBuilder::new().build(&parents).unwrap();

    for node in forest.iter() {
        for &child in &node.children {
            assert_eq!(forest.get_node(child).unwrap().parent, Some(node.id));
        }
        if let Some(parent) = node.parent {
            assert!(forest.get_node(parent).unwrap().children.contains(&node.id));
        }
        assert!(!node.covered);
    }
}

#[test]
fn given_isolated_roots_when_building_then_every_node_is_a_stranger() {
    let forest = ForestBuilder::new().build(&[None, None, None]).unwrap();

    assert_eq!(forest.roots(), vec![0, 1, 2]);
    assert!(forest.iter().all(|node| node.is_stranger()));
}

#[test]
fn given_empty_input_when_building_then_forest_is_empty() {
    let forest = ForestBuilder::new().build(&[]).unwrap();

    assert!(forest.is_empty());
    assert_eq!(forest.depth(), 0);
}

#[test]
fn given_parent_out_of_range_when_building_then_invalid_input() {
    // Act
    let err = ForestBuilder::new().build(&[None, Some(5)]).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::ParentOutOfRange {
            node: 1,
            parent: 5,
            len: 2
        }
    );
    assert!(err.is_invalid_input());
    assert!(!err.is_structural());
}

#[rstest]
#[case::two_cycle(vec![Some(1), Some(0)])]
#[case::three_cycle(vec![Some(2), Some(0), Some(1)])]
#[case::cycle_beside_tree(vec![None, Some(0), Some(3), Some(2)])]
fn given_cycle_when_building_then_structural_error(#[case] parents: Vec<Option<usize>>) {
    let err = ForestBuilder::new().build(&parents).unwrap_err();

    assert!(matches!(err, DomainError::CycleDetected { .. }));
    assert!(err.is_structural());
}

#[test]
fn given_malformed_reference_and_cycle_when_building_then_reference_is_reported_first() {
    let err = ForestBuilder::new()
        .build(&[Some(1), Some(0), Some(9)])
        .unwrap_err();

    assert!(err.is_invalid_input());
}

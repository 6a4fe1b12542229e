use cat_and_mouse::{boards, GameError, Graph, Position};

#[test]
fn test_reference_boards() {
    let small = boards::small().unwrap();
    assert_eq!(small.len(), 11);
    assert_eq!(small.degree(5), 8);
    assert_eq!(small.neighbors(0), &[1, 2, 3]);
    assert_eq!(small.position(10), Some(Position::new(4, 1)));
    assert_eq!(small.edge_span(), 2);

    let big = boards::big().unwrap();
    assert_eq!(big.len(), 25);
    assert_eq!(big.degree(0), 3);
    assert_eq!(big.degree(12), 8);
    assert_eq!(big.position(7), Some(Position::new(2, 1)));
}

#[test]
fn test_graph_is_symmetric() {
    for graph in [boards::small().unwrap(), boards::big().unwrap()] {
        for u in graph.nodes() {
            for &v in graph.neighbors(u) {
                assert!(graph.neighbors(v).contains(&u));
            }
        }
    }
}

#[test]
fn test_from_edges_keeps_insertion_order() {
    let graph = Graph::from_edges([(0, 3), (0, 1), (0, 2), (1, 2)]).unwrap();
    assert_eq!(graph.neighbors(0), &[3, 1, 2]);
    assert_eq!(graph.nodes(), vec![0, 1, 2, 3]);
    assert!(!graph.has_positions());
    assert_eq!(graph.edge_span(), 1);
}

#[test]
fn test_unknown_neighbor_is_rejected() {
    let result = Graph::new([(0, vec![1]), (1, vec![0, 7])]);
    assert_eq!(result.err(), Some(GameError::UnknownNode(7)));
}

#[test]
fn test_asymmetric_edge_is_rejected() {
    let result = Graph::new([(0, vec![1]), (1, vec![])]);
    assert_eq!(result.err(), Some(GameError::AsymmetricEdge { from: 0, to: 1 }));
}

#[test]
fn test_positions_are_all_or_none() {
    let graph = Graph::from_edges([(0, 1), (1, 2)]).unwrap();
    let result = graph
        .clone()
        .with_positions([(0, Position::new(0, 0)), (1, Position::new(1, 0))]);
    assert_eq!(result.err(), Some(GameError::IncompletePositions { missing: 1 }));

    let result = graph.with_positions([(9, Position::new(0, 0))]);
    assert_eq!(result.err(), Some(GameError::UnknownNode(9)));
}

#[test]
fn test_unknown_node_has_no_neighbors() {
    let graph = boards::small().unwrap();
    assert!(graph.neighbors(99).is_empty());
    assert!(!graph.contains(99));
    assert_eq!(graph.position(99), None);
}

#[test]
fn test_manhattan() {
    assert_eq!(Position::new(0, 0).manhattan(&Position::new(3, -2)), 5);
    assert_eq!(Position::new(2, 2).manhattan(&Position::new(2, 2)), 0);
}

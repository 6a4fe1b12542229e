//! Static board graph
//!
//! The board is an undirected, unweighted graph. Each node may carry a 2-D
//! grid position, used only by the A* heuristic.

use std::collections::BTreeMap;

use crate::{GameError, Result};

/// Identifier of a board node
pub type Node = usize;

/// Grid position of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance to another position
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Undirected board graph with optional node positions
///
/// The graph is validated once at construction and never mutated afterwards,
/// so it can be shared read-only between any number of games.
///
/// # Example
///
/// ```
/// use cat_and_mouse::{Graph, Position};
///
/// let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)])?
///     .with_positions([
///         (0, Position::new(0, 0)),
///         (1, Position::new(1, 0)),
///         (2, Position::new(1, 1)),
///         (3, Position::new(0, 1)),
///     ])?;
///
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.neighbors(0), &[1, 3]);
/// # Ok::<(), cat_and_mouse::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: BTreeMap<Node, Vec<Node>>,
    positions: BTreeMap<Node, Position>,
    /// Longest Manhattan length of a single edge, 1 when there are no positions
    edge_span: u32,
}

impl Graph {
    /// Builds a graph from `(node, neighbors)` pairs
    ///
    /// Neighbor order is preserved; it is the expansion order used by every
    /// search in this crate. Every neighbor must be declared as a node and
    /// every edge must appear in both directions.
    pub fn new<I, N>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, N)>,
        N: IntoIterator<Item = Node>,
    {
        let mut map = BTreeMap::new();
        for (node, neighbors) in adjacency {
            let mut list: Vec<Node> = Vec::new();
            for neighbor in neighbors {
                if neighbor != node && !list.contains(&neighbor) {
                    list.push(neighbor);
                }
            }
            map.insert(node, list);
        }

        for (&node, neighbors) in &map {
            for &neighbor in neighbors {
                let back = map
                    .get(&neighbor)
                    .ok_or(GameError::UnknownNode(neighbor))?;
                if !back.contains(&node) {
                    return Err(GameError::AsymmetricEdge {
                        from: node,
                        to: neighbor,
                    });
                }
            }
        }

        Ok(Graph {
            adjacency: map,
            positions: BTreeMap::new(),
            edge_span: 1,
        })
    }

    /// Builds a graph from an undirected edge list
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut adjacency: BTreeMap<Node, Vec<Node>> = BTreeMap::new();
        for (a, b) in edges {
            adjacency.entry(a).or_default().push(b);
            adjacency.entry(b).or_default().push(a);
        }
        Self::new(adjacency)
    }

    /// Attaches node positions
    ///
    /// Positions are all-or-none: either every node gets one or the call
    /// fails with [`GameError::IncompletePositions`].
    pub fn with_positions<I>(mut self, positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Position)>,
    {
        let mut table = BTreeMap::new();
        for (node, position) in positions {
            if !self.adjacency.contains_key(&node) {
                return Err(GameError::UnknownNode(node));
            }
            table.insert(node, position);
        }

        let missing = self
            .adjacency
            .keys()
            .filter(|node| !table.contains_key(node))
            .count();
        if missing > 0 {
            return Err(GameError::IncompletePositions { missing });
        }

        let mut span = 1;
        for (node, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                span = span.max(table[node].manhattan(&table[neighbor]));
            }
        }

        self.positions = table;
        self.edge_span = span;
        Ok(self)
    }

    /// Neighbors of `node` in declaration order (empty for unknown nodes)
    pub fn neighbors(&self, node: Node) -> &[Node] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All nodes in ascending order
    pub fn nodes(&self) -> Vec<Node> {
        self.adjacency.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn degree(&self, node: Node) -> usize {
        self.neighbors(node).len()
    }

    pub fn position(&self, node: Node) -> Option<Position> {
        self.positions.get(&node).copied()
    }

    pub fn has_positions(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Longest Manhattan length of any edge
    ///
    /// Dividing a Manhattan distance by this value never overestimates the
    /// remaining hop count.
    pub fn edge_span(&self) -> u32 {
        self.edge_span
    }
}

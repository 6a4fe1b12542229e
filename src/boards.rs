//! Reference boards
//!
//! Two fixed maps used by the demos, benches and tests. Positions are in
//! grid units (one column or row per unit).

use crate::graph::{Graph, Node, Position};
use crate::Result;

/// The 11-node board
///
/// Three columns of three nodes (1-3, 4-6, 7-9) sit between the end nodes 0
/// and 10. Node 5 is the hub and touches every node except the two ends.
pub fn small() -> Result<Graph> {
    let adjacency: [(Node, &[Node]); 11] = [
        (0, &[1, 2, 3]),
        (1, &[0, 2, 4, 5]),
        (2, &[0, 1, 3, 5]),
        (3, &[0, 2, 5, 6]),
        (4, &[1, 5, 7]),
        (5, &[1, 2, 3, 4, 6, 7, 8, 9]),
        (6, &[3, 5, 9]),
        (7, &[4, 5, 8, 10]),
        (8, &[5, 7, 9, 10]),
        (9, &[5, 6, 8, 10]),
        (10, &[7, 8, 9]),
    ];

    let positions = [
        (0, Position::new(0, 1)),
        (1, Position::new(1, 0)),
        (2, Position::new(1, 1)),
        (3, Position::new(1, 2)),
        (4, Position::new(2, 0)),
        (5, Position::new(2, 1)),
        (6, Position::new(2, 2)),
        (7, Position::new(3, 0)),
        (8, Position::new(3, 1)),
        (9, Position::new(3, 2)),
        (10, Position::new(4, 1)),
    ];

    Graph::new(
        adjacency
            .iter()
            .map(|(node, neighbors)| (*node, neighbors.iter().copied())),
    )?
    .with_positions(positions)
}

/// The 25-node board: a 5x5 grid where every cell also links to its diagonals
pub fn big() -> Result<Graph> {
    grid_with_diagonals(5, 5)
}

/// A `rows` x `cols` grid with orthogonal and diagonal links, numbered row-major
pub fn grid_with_diagonals(rows: usize, cols: usize) -> Result<Graph> {
    let mut adjacency = Vec::with_capacity(rows * cols);
    let mut positions = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let id = row * cols + col;
            let mut neighbors = Vec::with_capacity(8);
            let up = row > 0;
            let down = row + 1 < rows;
            let left = col > 0;
            let right = col + 1 < cols;

            if up {
                neighbors.push(id - cols);
            }
            if down {
                neighbors.push(id + cols);
            }
            if left {
                neighbors.push(id - 1);
            }
            if right {
                neighbors.push(id + 1);
            }
            if up && left {
                neighbors.push(id - cols - 1);
            }
            if up && right {
                neighbors.push(id - cols + 1);
            }
            if down && left {
                neighbors.push(id + cols - 1);
            }
            if down && right {
                neighbors.push(id + cols + 1);
            }

            adjacency.push((id, neighbors));
            positions.push((id, Position::new(col as i32, row as i32)));
        }
    }

    Graph::new(adjacency)?.with_positions(positions)
}

//! Shortest-path primitives
//!
//! All edges cost 1. [`bfs_dist`] gives exact hop distances; [`a_star`]
//! reconstructs a full path and supports a blocked set, which BFS does not
//! need.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::graph::{Graph, Node};

/// Hop distance from `s` to `t`, or `None` when `t` is unreachable
pub fn bfs_dist(graph: &Graph, s: Node, t: Node) -> Option<usize> {
    if s == t {
        return Some(0);
    }

    let mut visited = HashSet::from([s]);
    let mut queue = VecDeque::from([(s, 0usize)]);

    while let Some((u, d)) = queue.pop_front() {
        for &v in graph.neighbors(u) {
            if !visited.insert(v) {
                continue;
            }
            if v == t {
                return Some(d + 1);
            }
            queue.push_back((v, d + 1));
        }
    }

    None
}

/// Manhattan distance to the goal, compared against hops scaled by `graph.edge_span()`
///
/// Without positions it is zero and the search degrades to uniform cost.
fn heuristic(graph: &Graph, node: Node, goal: Node) -> u32 {
    match (graph.position(node), graph.position(goal)) {
        (Some(a), Some(b)) => a.manhattan(&b),
        _ => 0,
    }
}

/// A* search from `start` to `goal` avoiding `blocked`
///
/// Returns the node sequence from `start` to `goal` inclusive, `[start]`
/// when they coincide, or an empty vector when no path exists. The goal is
/// never treated as blocked, so an agent can always end its path on its
/// objective even if that node is in `blocked`.
///
/// Open-set entries are ordered by `f = g + h` where `h` is the Manhattan
/// distance in units of the longest edge, then by node id. Paths are
/// therefore shortest in hops and deterministic.
///
/// ```
/// use cat_and_mouse::{boards, path::{a_star, bfs_dist}};
/// use std::collections::HashSet;
///
/// let graph = boards::small()?;
/// let path = a_star(&graph, 0, 10, &HashSet::new());
/// assert_eq!(path.first(), Some(&0));
/// assert_eq!(path.last(), Some(&10));
/// assert_eq!(Some(path.len() - 1), bfs_dist(&graph, 0, 10));
/// # Ok::<(), cat_and_mouse::GameError>(())
/// ```
pub fn a_star(graph: &Graph, start: Node, goal: Node, blocked: &HashSet<Node>) -> Vec<Node> {
    if start == goal {
        return vec![start];
    }
    if !graph.contains(start) || !graph.contains(goal) {
        return Vec::new();
    }

    let span = u64::from(graph.edge_span());
    let key = |g: u64, node: Node| g * span + u64::from(heuristic(graph, node, goal));

    let mut open = BinaryHeap::new();
    open.push(Reverse((key(0, start), start)));

    let mut g_score: HashMap<Node, u64> = HashMap::from([(start, 0)]);
    let mut parent: HashMap<Node, Node> = HashMap::new();
    let mut closed: HashSet<Node> = HashSet::new();

    while let Some(Reverse((_, current))) = open.pop() {
        if current == goal {
            return reconstruct_path(&parent, start, goal);
        }
        if !closed.insert(current) {
            continue;
        }

        let next_g = g_score[&current] + 1;
        for &neighbor in graph.neighbors(current) {
            if neighbor != goal && blocked.contains(&neighbor) {
                continue;
            }
            if g_score.get(&neighbor).map_or(true, |&g| next_g < g) {
                g_score.insert(neighbor, next_g);
                parent.insert(neighbor, current);
                open.push(Reverse((key(next_g, neighbor), neighbor)));
            }
        }
    }

    Vec::new()
}

fn reconstruct_path(parent: &HashMap<Node, Node>, start: Node, goal: Node) -> Vec<Node> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parent.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Next node on a shortest unblocked path towards `target`
///
/// Stays on `from` when already there or when no path exists.
pub fn next_step_towards(
    graph: &Graph,
    from: Node,
    target: Node,
    blocked: &HashSet<Node>,
) -> Node {
    let path = a_star(graph, from, target, blocked);
    path.get(1).copied().unwrap_or(from)
}

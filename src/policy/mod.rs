//! Move-selection policies for the two agents
//!
//! Every policy answers the same question: given the board and the current
//! state, where does the agent to move go next? Policies never mutate the
//! state; the simulation applies the node they return.
//!
//! - [`RandomPolicy`]: uniform choice among legal moves
//! - [`AStarPolicy`]: next step of a shortest path to the agent's objective
//! - [`MinimaxPolicy`]: alpha-beta search on cat-mouse distance
//! - [`GreedyPolicy`]: one-step weighted distance scoring with exploration
//!
//! [`Strategy`] is the tagged value bound to an agent for one game.

pub mod adversarial;
pub mod greedy;
pub mod pathfinding;
pub mod random;

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

pub use adversarial::MinimaxPolicy;
pub use greedy::{GreedyParams, GreedyPolicy};
pub use pathfinding::AStarPolicy;
pub use random::RandomPolicy;

use crate::{
    config::DEFAULT_MINIMAX_DEPTH,
    game_state::{Agent, GameState},
    graph::{Graph, Node},
    stats::SearchStatistics,
    GameError,
};

/// A policy's answer for one half-turn
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Node the agent moves to (its current node when it stays)
    pub next: Node,

    /// Counters of the search behind the decision, for searching policies
    pub statistics: Option<SearchStatistics>,
}

impl Decision {
    pub fn to(next: Node) -> Self {
        Decision {
            next,
            statistics: None,
        }
    }
}

/// Trait for policies that pick an agent's next node
pub trait MovePolicy: Send + Sync {
    /// Chooses the next node for `agent`, which is the agent to move in `state`
    fn choose(
        &self,
        agent: Agent,
        graph: &Graph,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Decision;
}

/// Decision procedure bound to one agent for one game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Random,
    AStar,
    Minimax { depth: u32 },
    Greedy(GreedyParams),
}

impl Strategy {
    /// Minimax with the default look-ahead of three plies
    pub fn minimax() -> Self {
        Strategy::Minimax {
            depth: DEFAULT_MINIMAX_DEPTH,
        }
    }

    /// Picks the next node for `agent` in `state`
    pub fn decide(
        &self,
        agent: Agent,
        graph: &Graph,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Decision {
        match *self {
            Strategy::Random => RandomPolicy::new().choose(agent, graph, state, rng),
            Strategy::AStar => AStarPolicy::new().choose(agent, graph, state, rng),
            Strategy::Minimax { depth } => {
                MinimaxPolicy::new(depth).choose(agent, graph, state, rng)
            }
            Strategy::Greedy(params) => GreedyPolicy::new(params).choose(agent, graph, state, rng),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::AStar => write!(f, "astar"),
            Strategy::Minimax { depth } => write!(f, "minimax:{}", depth),
            Strategy::Greedy(_) => write!(f, "greedy"),
        }
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    /// Parses `random`, `astar`, `minimax`, `minimax:<depth>` or `greedy`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "random" => Ok(Strategy::Random),
            "astar" | "a*" => Ok(Strategy::AStar),
            "minimax" => Ok(Strategy::minimax()),
            "greedy" => Ok(Strategy::Greedy(GreedyParams::default())),
            other => match other.strip_prefix("minimax:") {
                Some(depth) => depth
                    .parse()
                    .map(|depth| Strategy::Minimax { depth })
                    .map_err(|_| GameError::UnknownStrategy(s.to_string())),
                None => Err(GameError::UnknownStrategy(s.to_string())),
            },
        }
    }
}

//! Minimax-driven moves
//!
//! The moving agent is both the side to move and the maximizing side at the
//! root. Cheese and goal play no part in the evaluation, so a minimax mouse
//! only runs away from the cat.

use rand::RngCore;

use super::{Decision, MovePolicy};
use crate::{
    game_state::{Agent, GameState},
    graph::Graph,
    minimax::Minimax,
};

/// Minimax policy with a fixed look-ahead
#[derive(Debug, Clone)]
pub struct MinimaxPolicy {
    /// Plies searched below the current position
    pub depth: u32,
}

impl MinimaxPolicy {
    pub fn new(depth: u32) -> Self {
        MinimaxPolicy { depth }
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose(
        &self,
        agent: Agent,
        graph: &Graph,
        state: &GameState,
        _rng: &mut dyn RngCore,
    ) -> Decision {
        let mut search = Minimax::new(graph, self.depth);
        let result = search.search(state.cat, state.mouse, agent, agent);
        Decision {
            next: result.best_move,
            statistics: Some(search.get_statistics().clone()),
        }
    }
}

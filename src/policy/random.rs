//! Uniform random moves

use rand::{seq::SliceRandom, RngCore};

use super::{Decision, MovePolicy};
use crate::{
    game_state::{Agent, GameState},
    graph::Graph,
    utils::legal_moves,
};

/// Random policy
///
/// Picks uniformly among the agent's legal moves, staying put when boxed in.
#[derive(Debug, Clone, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomPolicy
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(
        &self,
        agent: Agent,
        graph: &Graph,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Decision {
        let own = state.position_of(agent);
        let moves = legal_moves(graph, agent, own, state.position_of(agent.opponent()));
        Decision::to(moves.choose(rng).copied().unwrap_or(own))
    }
}

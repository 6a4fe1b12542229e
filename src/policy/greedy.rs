//! One-step heuristic moves
//!
//! The greedy policy scores each legal neighbor by hop distances and takes
//! the best one, with an optional chance of a random step to break cycles.

use rand::{seq::SliceRandom, Rng, RngCore};

use super::{Decision, MovePolicy};
use crate::{
    game_state::{Agent, GameState},
    graph::Graph,
    utils::{distance_or_far, legal_moves},
};

/// Weights of the greedy scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyParams {
    /// Mouse: weight of the distance kept from the cat
    pub w_far: f64,

    /// Mouse: weight of the distance still to cover to the objective
    pub w_goal: f64,

    /// Probability of a uniformly random legal step instead of the best one
    pub eps: f64,
}

impl Default for GreedyParams {
    fn default() -> Self {
        GreedyParams {
            w_far: 1.0,
            w_goal: 1.0,
            eps: 0.0,
        }
    }
}

impl GreedyParams {
    pub fn with_weights(mut self, w_far: f64, w_goal: f64) -> Self {
        self.w_far = w_far;
        self.w_goal = w_goal;
        self
    }

    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps.clamp(0.0, 1.0);
        self
    }
}

/// Greedy policy
///
/// The mouse maximizes `w_far * d(v, cat) - w_goal * d(v, objective)`; the
/// cat minimizes `d(v, mouse)`. Ties go to the earliest neighbor.
#[derive(Debug, Clone)]
pub struct GreedyPolicy {
    pub params: GreedyParams,
}

impl GreedyPolicy {
    pub fn new(params: GreedyParams) -> Self {
        GreedyPolicy { params }
    }

    fn score(&self, agent: Agent, graph: &Graph, state: &GameState, candidate: usize) -> f64 {
        match agent {
            Agent::Cat => -(distance_or_far(graph, candidate, state.mouse) as f64),
            Agent::Mouse => {
                let far = distance_or_far(graph, candidate, state.cat) as f64;
                let left = distance_or_far(graph, candidate, state.mouse_objective()) as f64;
                self.params.w_far * far - self.params.w_goal * left
            }
        }
    }
}

impl MovePolicy for GreedyPolicy {
    fn choose(
        &self,
        agent: Agent,
        graph: &Graph,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Decision {
        let own = state.position_of(agent);
        let moves = legal_moves(graph, agent, own, state.position_of(agent.opponent()));

        if self.params.eps > 0.0 && rng.gen::<f64>() < self.params.eps {
            return Decision::to(moves.choose(rng).copied().unwrap_or(own));
        }

        let mut best = own;
        let mut best_score = f64::NEG_INFINITY;
        for &candidate in &moves {
            let score = self.score(agent, graph, state, candidate);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
        }

        Decision::to(best)
    }
}

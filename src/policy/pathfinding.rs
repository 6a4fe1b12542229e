//! A*-driven moves
//!
//! The cat chases the mouse's current node with nothing blocked. The mouse
//! heads for the cheese, then the goal, and routes around the cat.

use std::collections::HashSet;

use rand::RngCore;

use super::{Decision, MovePolicy};
use crate::{
    game_state::{Agent, GameState},
    graph::{Graph, Node},
    path::next_step_towards,
};

/// A* policy
#[derive(Debug, Clone, Default)]
pub struct AStarPolicy;

impl AStarPolicy {
    pub fn new() -> Self {
        AStarPolicy
    }

    /// Objective and blocked set for `agent` in `state`
    pub fn objective(agent: Agent, state: &GameState) -> (Node, HashSet<Node>) {
        match agent {
            Agent::Cat => (state.mouse, HashSet::new()),
            Agent::Mouse => (state.mouse_objective(), HashSet::from([state.cat])),
        }
    }
}

impl MovePolicy for AStarPolicy {
    fn choose(
        &self,
        agent: Agent,
        graph: &Graph,
        state: &GameState,
        _rng: &mut dyn RngCore,
    ) -> Decision {
        let (target, blocked) = Self::objective(agent, state);
        Decision::to(next_step_towards(
            graph,
            state.position_of(agent),
            target,
            &blocked,
        ))
    }
}

//! Game state representation
//!
//! A [`GameState`] is a plain value: the simulation takes one in and hands a
//! new one back for every half-turn, and strategies only ever read it.

use std::fmt;

use crate::graph::Node;

/// The two agents on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Cat,
    Mouse,
}

impl Agent {
    /// Returns the other agent
    pub fn opponent(self) -> Agent {
        match self {
            Agent::Cat => Agent::Mouse,
            Agent::Mouse => Agent::Cat,
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Cat => write!(f, "cat"),
            Agent::Mouse => write!(f, "mouse"),
        }
    }
}

/// Starting nodes for one game
///
/// All four nodes must be distinct; this is checked when a game is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub cat: Node,
    pub mouse: Node,
    pub cheese: Node,
    pub goal: Node,
}

impl Placement {
    pub fn new(cat: Node, mouse: Node, cheese: Node, goal: Node) -> Self {
        Placement {
            cat,
            mouse,
            cheese,
            goal,
        }
    }

    /// Returns true if no two of the four nodes coincide
    pub fn is_distinct(&self) -> bool {
        let nodes = [self.cat, self.mouse, self.cheese, self.goal];
        nodes
            .iter()
            .enumerate()
            .all(|(i, a)| nodes[i + 1..].iter().all(|b| a != b))
    }
}

/// Full state of a running game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub cat: Node,
    pub mouse: Node,
    pub cheese: Node,
    pub goal: Node,

    /// Set once the mouse has stepped on the cheese; never cleared
    pub has_cheese: bool,

    /// Agent that moves next
    pub mover: Agent,

    /// Half-turns played so far
    pub step_count: usize,
}

impl GameState {
    /// Creates the initial state for a placement; the mouse moves first
    pub fn new(placement: Placement) -> Self {
        GameState {
            cat: placement.cat,
            mouse: placement.mouse,
            cheese: placement.cheese,
            goal: placement.goal,
            has_cheese: false,
            mover: Agent::Mouse,
            step_count: 0,
        }
    }

    /// Current node of `agent`
    pub fn position_of(&self, agent: Agent) -> Node {
        match agent {
            Agent::Cat => self.cat,
            Agent::Mouse => self.mouse,
        }
    }

    /// Node the mouse is currently heading for: the cheese, then the goal
    pub fn mouse_objective(&self) -> Node {
        if self.has_cheese {
            self.goal
        } else {
            self.cheese
        }
    }

    pub fn is_capture(&self) -> bool {
        self.cat == self.mouse
    }

    pub fn is_escape(&self) -> bool {
        self.has_cheese && self.mouse == self.goal
    }
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The cat stands on the mouse
    CatWins,
    /// The mouse reached the goal after collecting the cheese
    MouseWins,
    /// The step limit ran out
    Draw,
}

impl Outcome {
    /// The winning agent, if any
    pub fn winner(&self) -> Option<Agent> {
        match self {
            Outcome::CatWins => Some(Agent::Cat),
            Outcome::MouseWins => Some(Agent::Mouse),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::CatWins => write!(f, "cat"),
            Outcome::MouseWins => write!(f, "mouse"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

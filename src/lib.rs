//! # cat-and-mouse
//!
//! A pursuit-evasion game on a small undirected graph. A cat tries to land on
//! the same node as a mouse; the mouse has to pick up the cheese and then
//! reach the goal before it is caught.
//!
//! Each agent is driven by one of several interchangeable strategies:
//!
//! - Uniform random choice among legal moves
//! - A* pathfinding towards the agent's current objective
//! - Minimax with alpha-beta pruning, scoring positions by cat-mouse distance
//! - A greedy one-step scorer with optional random exploration
//!
//! ## Basic Usage
//!
//! ```
//! use cat_and_mouse::{boards, run_game, Outcome, Strategy};
//!
//! fn main() -> Result<(), cat_and_mouse::GameError> {
//!     // The 11-node reference board
//!     let graph = boards::small()?;
//!
//!     // Minimax cat against an A* mouse, 200 half-turns at most, seeded
//!     let summary = run_game(&graph, Strategy::minimax(), Strategy::AStar, 200, Some(1))?;
//!
//!     match summary.outcome {
//!         Outcome::CatWins => println!("caught after {} steps", summary.steps),
//!         Outcome::MouseWins => println!("escaped after {} steps", summary.steps),
//!         Outcome::Draw => println!("draw"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Step-by-step control
//!
//! Front ends that animate the board or take keyboard input drive a
//! [`Simulation`] one half-turn at a time with [`Simulation::step`] (bound
//! strategy) or [`Simulation::play_move`] (externally chosen node). The
//! pure functions [`simulation::advance`] and [`simulation::apply_move`]
//! expose the same transition rules on plain [`GameState`] values.
//!
//! ## How a half-turn works
//!
//! 1. The agent to move (the mouse moves first) asks its strategy for a node.
//!    A mouse that steps on the cheese picks it up for the rest of the game.
//! 2. The step counter grows by one.
//! 3. The game ends when the cat is on the mouse (cat wins), when the mouse
//!    holds the cheese and stands on the goal (mouse wins), or when the step
//!    limit is reached (draw), checked in that order.

pub mod boards;
pub mod config;
pub mod game_state;
pub mod graph;
pub mod minimax;
pub mod path;
pub mod policy;
pub mod simulation;
pub mod stats;
pub mod utils;

pub use config::GameConfig;
pub use game_state::{Agent, GameState, Outcome, Placement};
pub use graph::{Graph, Node, Position};
pub use minimax::{Minimax, SearchResult};
pub use policy::{Decision, GreedyParams, MovePolicy, Strategy};
pub use simulation::{run_game, GameSummary, Simulation, Transition};
pub use stats::SearchStatistics;

/// Error types for game setup and play
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A node id that is not part of the graph
    #[error("Unknown node {0}")]
    UnknownNode(Node),

    /// An edge declared in one direction only
    #[error("Edge {from} -> {to} has no matching edge {to} -> {from}")]
    AsymmetricEdge { from: Node, to: Node },

    /// Positions were given for some nodes but not all of them
    #[error("Node positions are incomplete: {missing} node(s) without a position")]
    IncompletePositions { missing: usize },

    /// The board cannot hold the cat, the mouse, the cheese and the goal
    #[error("A game needs at least 4 nodes, the graph has {found}")]
    TooFewNodes { found: usize },

    /// Invalid starting placement
    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),

    /// A manual move to a node that is neither the current one nor adjacent
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Node, to: Node },

    /// A move was requested after the game ended
    #[error("The game is already over")]
    GameOver,

    /// A strategy name that does not parse
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;

//! Configuration options for a game
//!
//! This module defines the parameters that control one game: the strategy
//! bound to each agent, the step limit, the random seed and, optionally, a
//! fixed starting placement.

use crate::{
    game_state::{Agent, Placement},
    policy::Strategy,
    GameError, Result,
};

/// Step limit for single games
pub const DEFAULT_MAX_STEPS: usize = 200;

/// Step limit used when games are played in bulk to tune parameters
pub const TRAINING_MAX_STEPS: usize = 120;

/// Default minimax look-ahead in plies
pub const DEFAULT_MINIMAX_DEPTH: u32 = 3;

/// Configuration for one game
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use cat_and_mouse::{GameConfig, Placement, Strategy};
///
/// let config = GameConfig::default()
///     .with_cat_strategy(Strategy::Minimax { depth: 4 })
///     .with_mouse_strategy(Strategy::Random)
///     .with_max_steps(150)
///     .with_seed(7)
///     .with_placement(Placement::new(1, 0, 5, 10));
///
/// assert_eq!(config.max_steps, 150);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Strategy the cat plays with
    pub cat_strategy: Strategy,

    /// Strategy the mouse plays with
    pub mouse_strategy: Strategy,

    /// Half-turns after which the game is a draw
    ///
    /// This bound is what guarantees every game terminates.
    pub max_steps: usize,

    /// Seed for the game's random source
    ///
    /// With a seed the whole trajectory is reproducible; without one the
    /// generator is seeded from process entropy.
    pub seed: Option<u64>,

    /// Fixed starting nodes; drawn at random when unset
    pub placement: Option<Placement>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cat_strategy: Strategy::minimax(),
            mouse_strategy: Strategy::AStar,
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
            placement: None,
        }
    }
}

impl GameConfig {
    /// Preset with the shorter step limit used for parameter sweeps
    pub fn training() -> Self {
        GameConfig {
            max_steps: TRAINING_MAX_STEPS,
            ..Self::default()
        }
    }

    /// Sets the cat's strategy
    pub fn with_cat_strategy(mut self, strategy: Strategy) -> Self {
        self.cat_strategy = strategy;
        self
    }

    /// Sets the mouse's strategy
    pub fn with_mouse_strategy(mut self, strategy: Strategy) -> Self {
        self.mouse_strategy = strategy;
        self
    }

    /// Sets the step limit
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fixes the starting nodes
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Strategy bound to `agent`
    pub fn strategy_for(&self, agent: Agent) -> &Strategy {
        match agent {
            Agent::Cat => &self.cat_strategy,
            Agent::Mouse => &self.mouse_strategy,
        }
    }

    /// Checks the values that do not depend on the board
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(GameError::InvalidConfiguration(
                "max_steps must be at least 1".to_string(),
            ));
        }
        if let Some(placement) = &self.placement {
            if !placement.is_distinct() {
                return Err(GameError::InvalidPlacement(format!(
                    "cat, mouse, cheese and goal must be four distinct nodes, got {:?}",
                    placement
                )));
            }
        }
        Ok(())
    }
}

//! Turn-based game engine
//!
//! The transition rules live in two pure functions, [`apply_move`] and
//! [`advance`], which take a [`GameState`] and return the next one.
//! [`Simulation`] wraps them with a random source, a clock and the bound
//! strategies so a caller can drive a game half-turn by half-turn or run
//! it to the end in one call.

use std::time::{Duration, Instant};

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

use crate::{
    config::GameConfig,
    game_state::{Agent, GameState, Outcome, Placement},
    graph::{Graph, Node},
    policy::Strategy,
    stats::SearchStatistics,
    GameError, Result,
};

/// Smallest board that fits the cat, the mouse, the cheese and the goal
pub const MIN_NODES: usize = 4;

/// Result of one half-turn
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State after the move
    pub state: GameState,

    /// Set when the move ended the game
    pub outcome: Option<Outcome>,

    /// Search counters of the strategy that produced the move, if it searched
    pub statistics: Option<SearchStatistics>,
}

/// Per-game summary handed to whoever runs batches of games
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub outcome: Outcome,

    /// Half-turns played
    pub steps: usize,

    /// Wall-clock time from setup to the terminal half-turn
    pub elapsed: Duration,

    pub final_state: GameState,

    /// Counters of every minimax search run during the game
    pub search: SearchStatistics,
}

/// Terminal check, in priority order: capture, escape, step limit
pub fn terminal_outcome(state: &GameState, max_steps: usize) -> Option<Outcome> {
    if state.is_capture() {
        Some(Outcome::CatWins)
    } else if state.is_escape() {
        Some(Outcome::MouseWins)
    } else if state.step_count >= max_steps {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Draws or checks the starting placement and builds the initial state
///
/// Fails before anything is simulated when the board has fewer than four
/// nodes, when a fixed placement names an unknown node, or when its four
/// nodes are not distinct.
pub fn initial_state(
    graph: &Graph,
    placement: Option<Placement>,
    rng: &mut dyn RngCore,
) -> Result<GameState> {
    if graph.len() < MIN_NODES {
        return Err(GameError::TooFewNodes { found: graph.len() });
    }

    let placement = match placement {
        Some(placement) => {
            for node in [placement.cat, placement.mouse, placement.cheese, placement.goal] {
                if !graph.contains(node) {
                    return Err(GameError::UnknownNode(node));
                }
            }
            if !placement.is_distinct() {
                return Err(GameError::InvalidPlacement(format!(
                    "cat, mouse, cheese and goal must be four distinct nodes, got {:?}",
                    placement
                )));
            }
            placement
        }
        None => {
            let nodes = graph.nodes();
            let drawn: Vec<Node> = nodes.choose_multiple(rng, MIN_NODES).copied().collect();
            match drawn[..] {
                [mouse, cat, cheese, goal] => Placement::new(cat, mouse, cheese, goal),
                _ => return Err(GameError::TooFewNodes { found: drawn.len() }),
            }
        }
    };

    Ok(GameState::new(placement))
}

/// Applies a move for the agent to move and evaluates the terminal rules
///
/// `next` must be the mover's current node or one of its neighbors. The
/// mouse picks up the cheese by stepping on it; the step counter grows by
/// one for every call.
pub fn apply_move(
    graph: &Graph,
    state: &GameState,
    next: Node,
    max_steps: usize,
) -> Result<Transition> {
    if terminal_outcome(state, max_steps).is_some() {
        return Err(GameError::GameOver);
    }

    let mover = state.mover;
    let from = state.position_of(mover);
    if next != from && !graph.neighbors(from).contains(&next) {
        return Err(GameError::IllegalMove { from, to: next });
    }

    let mut state = state.clone();
    match mover {
        Agent::Mouse => {
            state.mouse = next;
            if !state.has_cheese && state.mouse == state.cheese {
                state.has_cheese = true;
                debug!("mouse picked up the cheese on node {}", next);
            }
        }
        Agent::Cat => state.cat = next,
    }
    state.mover = mover.opponent();
    state.step_count += 1;

    let outcome = terminal_outcome(&state, max_steps);
    Ok(Transition {
        state,
        outcome,
        statistics: None,
    })
}

/// Plays one half-turn: asks the mover's strategy for a node, then applies it
pub fn advance(
    graph: &Graph,
    state: &GameState,
    cat_strategy: &Strategy,
    mouse_strategy: &Strategy,
    max_steps: usize,
    rng: &mut dyn RngCore,
) -> Result<Transition> {
    if terminal_outcome(state, max_steps).is_some() {
        return Err(GameError::GameOver);
    }

    let strategy = match state.mover {
        Agent::Cat => cat_strategy,
        Agent::Mouse => mouse_strategy,
    };
    let decision = strategy.decide(state.mover, graph, state, rng);

    let mut transition = apply_move(graph, state, decision.next, max_steps)?;
    transition.statistics = decision.statistics;
    Ok(transition)
}

/// A single game in progress
///
/// # Example
///
/// ```
/// use cat_and_mouse::{boards, GameConfig, Simulation, Strategy};
///
/// let graph = boards::small()?;
/// let config = GameConfig::default()
///     .with_cat_strategy(Strategy::AStar)
///     .with_mouse_strategy(Strategy::Random)
///     .with_seed(42);
///
/// let mut game = Simulation::new(&graph, config)?;
/// while !game.is_finished() {
///     let transition = game.step()?;
///     println!("cat {} mouse {}", transition.state.cat, transition.state.mouse);
/// }
/// let summary = game.summary().expect("finished game has a summary");
/// assert!(summary.steps <= 200);
/// # Ok::<(), cat_and_mouse::GameError>(())
/// ```
pub struct Simulation<'g> {
    graph: &'g Graph,
    config: GameConfig,
    state: GameState,
    rng: StdRng,
    outcome: Option<Outcome>,
    statistics: SearchStatistics,
    started: Instant,
    elapsed: Duration,
}

impl<'g> Simulation<'g> {
    /// Validates the configuration and sets up the starting placement
    pub fn new(graph: &'g Graph, config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = initial_state(graph, config.placement, &mut rng)?;

        debug!(
            "new game: cat={} ({}) mouse={} ({}) cheese={} goal={} max_steps={}",
            state.cat,
            config.cat_strategy,
            state.mouse,
            config.mouse_strategy,
            state.cheese,
            state.goal,
            config.max_steps
        );

        Ok(Simulation {
            graph,
            config,
            state,
            rng,
            outcome: None,
            statistics: SearchStatistics::new(),
            started: Instant::now(),
            elapsed: Duration::from_secs(0),
        })
    }

    /// Plays the next half-turn with the mover's bound strategy
    pub fn step(&mut self) -> Result<Transition> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let transition = advance(
            self.graph,
            &self.state,
            &self.config.cat_strategy,
            &self.config.mouse_strategy,
            self.config.max_steps,
            &mut self.rng,
        )?;
        self.record(&transition);
        Ok(transition)
    }

    /// Plays the next half-turn with a move chosen outside the engine
    pub fn play_move(&mut self, next: Node) -> Result<Transition> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let transition = apply_move(self.graph, &self.state, next, self.config.max_steps)?;
        self.record(&transition);
        Ok(transition)
    }

    fn record(&mut self, transition: &Transition) {
        let moved = self.state.mover;
        self.state = transition.state.clone();
        if let Some(statistics) = &transition.statistics {
            self.statistics.merge(statistics);
        }

        debug!(
            "step {}: {} -> {} (cat={} mouse={} cheese={})",
            self.state.step_count,
            moved,
            self.state.position_of(moved),
            self.state.cat,
            self.state.mouse,
            self.state.has_cheese
        );

        if let Some(outcome) = transition.outcome {
            self.elapsed = self.started.elapsed();
            self.outcome = Some(outcome);
            debug!(
                "game over: {} after {} steps in {:.3} ms",
                outcome,
                self.state.step_count,
                self.elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    /// Runs the game to its end
    pub fn run(mut self) -> Result<GameSummary> {
        while self.outcome.is_none() {
            self.step()?;
        }
        self.summary().ok_or(GameError::GameOver)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /// Accumulated minimax statistics of this game so far
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Summary of a finished game, `None` while it is still running
    pub fn summary(&self) -> Option<GameSummary> {
        self.outcome.map(|outcome| GameSummary {
            outcome,
            steps: self.state.step_count,
            elapsed: self.elapsed,
            final_state: self.state.clone(),
            search: self.statistics.clone(),
        })
    }
}

/// Plays one full game
///
/// Starting nodes are drawn at random from the board. With `seed` set the
/// outcome and step count are reproducible.
pub fn run_game(
    graph: &Graph,
    cat_strategy: Strategy,
    mouse_strategy: Strategy,
    max_steps: usize,
    seed: Option<u64>,
) -> Result<GameSummary> {
    let mut config = GameConfig::default()
        .with_cat_strategy(cat_strategy)
        .with_mouse_strategy(mouse_strategy)
        .with_max_steps(max_steps);
    config.seed = seed;

    Simulation::new(graph, config)?.run()
}

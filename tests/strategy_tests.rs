use cat_and_mouse::{
    boards,
    policy::{AStarPolicy, GreedyPolicy, MovePolicy, RandomPolicy},
    Agent, GameError, GameState, Graph, GreedyParams, Placement, Strategy,
};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

fn state(cat: usize, mouse: usize, cheese: usize, goal: usize, mover: Agent) -> GameState {
    let mut state = GameState::new(Placement::new(cat, mouse, cheese, goal));
    state.mover = mover;
    state
}

#[test]
fn test_random_mouse_only_picks_legal_moves() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let s = state(2, 0, 5, 10, Agent::Mouse);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let decision = RandomPolicy::new().choose(Agent::Mouse, &graph, &s, &mut rng);
        assert!(decision.next == 1 || decision.next == 3, "mouse went to {}", decision.next);
        seen.insert(decision.next);
    }
    // Both free neighbors show up eventually
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_random_cat_may_step_onto_the_mouse() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let s = state(0, 1, 5, 10, Agent::Cat);

    let picks: HashSet<usize> = (0..200)
        .map(|_| Strategy::Random.decide(Agent::Cat, &graph, &s, &mut rng).next)
        .collect();
    assert!(picks.contains(&1));
    assert!(picks.iter().all(|n| graph.neighbors(0).contains(n)));
}

#[test]
fn test_boxed_in_agent_stays_put() {
    let graph = Graph::from_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let s = state(1, 0, 2, 3, Agent::Mouse);

    for strategy in [
        Strategy::Random,
        Strategy::minimax(),
        Strategy::Greedy(GreedyParams::default().with_eps(0.5)),
    ] {
        assert_eq!(strategy.decide(Agent::Mouse, &graph, &s, &mut rng).next, 0);
    }
}

#[test]
fn test_astar_mouse_heads_for_cheese_then_goal() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let mut s = state(10, 0, 4, 6, Agent::Mouse);
    let towards_cheese = Strategy::AStar.decide(Agent::Mouse, &graph, &s, &mut rng).next;
    assert_eq!(towards_cheese, 1);

    s.has_cheese = true;
    let towards_goal = Strategy::AStar.decide(Agent::Mouse, &graph, &s, &mut rng).next;
    assert_eq!(towards_goal, 3);
}

#[test]
fn test_astar_mouse_routes_around_the_cat() {
    let graph = boards::small().unwrap();
    let s = state(5, 2, 8, 10, Agent::Mouse);
    let (target, blocked) = AStarPolicy::objective(Agent::Mouse, &s);
    assert_eq!(target, 8);
    assert_eq!(blocked, HashSet::from([5]));

    let mut rng = StdRng::seed_from_u64(0);
    let next = Strategy::AStar.decide(Agent::Mouse, &graph, &s, &mut rng).next;
    assert!(next == 1 || next == 3, "mouse should skirt the hub, went to {}", next);
}

#[test]
fn test_astar_cat_chases_the_mouse() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let far = state(0, 10, 4, 6, Agent::Cat);
    let next = Strategy::AStar.decide(Agent::Cat, &graph, &far, &mut rng).next;
    assert_eq!(cat_and_mouse::path::bfs_dist(&graph, next, 10), Some(3));

    let adjacent = state(7, 10, 4, 6, Agent::Cat);
    assert_eq!(Strategy::AStar.decide(Agent::Cat, &graph, &adjacent, &mut rng).next, 10);
}

#[test]
fn test_minimax_strategy_reports_statistics() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let s = state(0, 10, 4, 6, Agent::Cat);

    let decision = Strategy::Minimax { depth: 2 }.decide(Agent::Cat, &graph, &s, &mut rng);
    let stats = decision.statistics.expect("minimax decisions carry statistics");
    assert_eq!(stats.depth, 2);
    assert!(stats.nodes_visited > 1);

    let plain = Strategy::AStar.decide(Agent::Cat, &graph, &s, &mut rng);
    assert!(plain.statistics.is_none());
}

#[test]
fn test_greedy_cat_closes_in() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let s = state(1, 10, 4, 6, Agent::Cat);

    // 4 and 5 are both two hops from the mouse; 4 is listed first
    let next = GreedyPolicy::new(GreedyParams::default())
        .choose(Agent::Cat, &graph, &s, &mut rng)
        .next;
    assert_eq!(next, 4);
}

#[test]
fn test_greedy_mouse_balances_distance_and_objective() {
    let graph = boards::small().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    // Cat on 1, mouse on 2, cheese on 6
    let s = state(1, 2, 6, 10, Agent::Mouse);

    // Only the objective matters: go to 3 or 5 (both one hop from 6), 3 comes first
    let objective_only = GreedyParams::default().with_weights(0.0, 1.0);
    let next = GreedyPolicy::new(objective_only).choose(Agent::Mouse, &graph, &s, &mut rng).next;
    assert_eq!(next, 3);

    // Only distance matters: 3 is the one neighbor two hops from the cat
    let distance_only = GreedyParams::default().with_weights(1.0, 0.0);
    let next = GreedyPolicy::new(distance_only).choose(Agent::Mouse, &graph, &s, &mut rng).next;
    assert_eq!(next, 3);
}

#[test]
fn test_strategy_names_round_trip() {
    for (name, strategy) in [
        ("random", Strategy::Random),
        ("astar", Strategy::AStar),
        ("minimax:3", Strategy::Minimax { depth: 3 }),
        ("minimax:5", Strategy::Minimax { depth: 5 }),
    ] {
        assert_eq!(name.parse::<Strategy>().unwrap(), strategy);
        assert_eq!(strategy.to_string(), name);
    }

    assert_eq!("Minimax".parse::<Strategy>().unwrap(), Strategy::minimax());
    assert_eq!(
        "greedy".parse::<Strategy>().unwrap(),
        Strategy::Greedy(GreedyParams::default())
    );
}

#[test]
fn test_unknown_strategy_names_are_rejected() {
    for name in ["dijkstra", "minimax:deep", ""] {
        match name.parse::<Strategy>() {
            Err(GameError::UnknownStrategy(got)) => assert_eq!(got, name),
            other => panic!("expected UnknownStrategy for {:?}, got {:?}", name, other),
        }
    }
}

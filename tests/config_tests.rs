use cat_and_mouse::{
    config::{DEFAULT_MAX_STEPS, DEFAULT_MINIMAX_DEPTH, TRAINING_MAX_STEPS},
    Agent, GameConfig, GameError, Placement, Strategy,
};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = GameConfig::default()
        .with_cat_strategy(Strategy::Random)
        .with_mouse_strategy(Strategy::Minimax { depth: 5 })
        .with_max_steps(50)
        .with_seed(99)
        .with_placement(Placement::new(1, 0, 5, 10));

    // Verify each setting was applied correctly
    assert_eq!(config.cat_strategy, Strategy::Random);
    assert_eq!(config.mouse_strategy, Strategy::Minimax { depth: 5 });
    assert_eq!(config.max_steps, 50);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.placement, Some(Placement::new(1, 0, 5, 10)));
    assert_eq!(config.strategy_for(Agent::Cat), &Strategy::Random);
    assert_eq!(config.strategy_for(Agent::Mouse), &Strategy::Minimax { depth: 5 });
}

#[test]
fn test_config_default_values() {
    let config = GameConfig::default();

    assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
    assert_eq!(config.max_steps, 200);
    assert_eq!(config.cat_strategy, Strategy::Minimax { depth: DEFAULT_MINIMAX_DEPTH });
    assert_eq!(config.mouse_strategy, Strategy::AStar);
    assert_eq!(config.seed, None);
    assert_eq!(config.placement, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_training_preset() {
    let config = GameConfig::training();
    assert_eq!(config.max_steps, TRAINING_MAX_STEPS);
    assert_eq!(config.max_steps, 120);
    assert_eq!(config.cat_strategy, GameConfig::default().cat_strategy);
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero_steps = GameConfig::default().with_max_steps(0);
    assert!(matches!(
        zero_steps.validate(),
        Err(GameError::InvalidConfiguration(_))
    ));

    let overlapping = GameConfig::default().with_placement(Placement::new(3, 4, 3, 5));
    assert!(matches!(
        overlapping.validate(),
        Err(GameError::InvalidPlacement(_))
    ));
}

#[test]
fn test_placement_distinctness() {
    assert!(Placement::new(0, 1, 2, 3).is_distinct());
    assert!(!Placement::new(0, 1, 2, 0).is_distinct());
    assert!(!Placement::new(0, 1, 1, 3).is_distinct());
}

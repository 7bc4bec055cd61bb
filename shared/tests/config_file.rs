use polyglot_jump_shared::GameConfig;

#[test]
fn example_config_matches_defaults() {
    let config = GameConfig::from_json_str(include_str!("../../game_config.example.json")).unwrap();
    assert_eq!(config, GameConfig::default());
}

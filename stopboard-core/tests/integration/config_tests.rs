//! Settings persistence and settings-driven boards

use stopboard_core::{
    Board, BoardSettings, ConfigError, ConfigManager, EntityRef, GroupId, IdentityStrategy,
    PlacementPolicy, SeedData,
};

#[test]
fn test_settings_file_configures_board() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    std::fs::write(
        manager.settings_path(),
        "placement = \"move\"\nidentity = \"sequential\"\nuid_prefix = \"demo\"\n",
    )
    .unwrap();

    let settings = manager.load_settings().unwrap();
    let mut board = Board::from_settings(&settings);
    board.load_seed(SeedData::demo()).unwrap();

    let info = board.group(GroupId(1)).unwrap();
    assert_eq!(info.stops[0].uid.as_str(), "demo-1");
    assert_eq!(info.stops[1].uid.as_str(), "demo-2");

    let outcome = board.drag_end(
        &EntityRef::instance("demo-1"),
        Some(&EntityRef::Group(GroupId(2))),
    );
    assert!(outcome.is_committed());
    assert_eq!(board.group(GroupId(1)).unwrap().stops.len(), 1);
    assert_eq!(board.group(GroupId(2)).unwrap().stops[0].uid.as_str(), "demo-3");
}

#[test]
fn test_saved_settings_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().join("stopboard"));
    let settings = BoardSettings::default()
        .with_placement(PlacementPolicy::Move)
        .with_identity(IdentityStrategy::Sequential)
        .with_show_private(true);

    manager.save_settings(&settings).unwrap();
    assert!(manager.settings_path().exists());

    let reloaded = ConfigManager::with_config_dir(manager.config_dir().to_path_buf())
        .load_settings()
        .unwrap();
    assert_eq!(reloaded, settings);
}

#[test]
fn test_invalid_settings_are_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    let settings = BoardSettings {
        uid_prefix: String::new(),
        ..BoardSettings::default()
    };

    let err = manager.save_settings(&settings).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
    assert!(!manager.settings_path().exists());
}

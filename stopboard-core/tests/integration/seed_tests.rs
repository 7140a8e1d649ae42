//! Seeding boards from files and the demo source

use std::time::Duration;

use stopboard_core::{
    Board, BoardError, DemoSeedSource, FileSeedSource, GroupId, SeedError, SeedSource,
    StopboardError, StopId, Visibility, seed_board,
};

const JSON_SEED: &str = r#"{
    "stops": [
        {"id": 1, "name": "Welcome", "roomNr": "A1", "divisionIds": [1]},
        {"id": 2, "name": "Library", "roomNr": "B1", "divisionIds": [1, 2]},
        {"id": 3, "name": "Workshop", "roomNr": "C1", "divisionIds": [2]}
    ],
    "groups": [
        {"id": 10, "name": "Morning", "stopIds": [1, 3]},
        {"id": 11, "name": "Staff", "isPublic": false}
    ]
}"#;

#[tokio::test]
async fn test_json_file_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    std::fs::write(&path, JSON_SEED).unwrap();

    let mut board = Board::new();
    seed_board(&mut board, &FileSeedSource::new(&path)).await.unwrap();

    assert_eq!(board.pool().len(), 3);
    let morning = board.group(GroupId(10)).unwrap();
    assert_eq!(morning.stop_ids(), vec![StopId(1), StopId(3)]);
    assert_eq!(board.group(GroupId(11)).unwrap().visibility, Visibility::Private);

    let snapshot = board.snapshot();
    let division_two: Vec<_> = snapshot
        .pool_in_division(2)
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(division_two, vec!["Library", "Workshop"]);
}

#[tokio::test]
async fn test_toml_file_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.toml");
    std::fs::write(
        &path,
        r#"
[[stops]]
id = 1
name = "Welcome"

[[stops]]
id = 2
name = "Library"

[[groups]]
id = 1
name = "Information"
stop_ids = [2, 1]
"#,
    )
    .unwrap();

    let source = FileSeedSource::new(&path);
    assert!(source.describe().ends_with("seed.toml"));
    let mut board = Board::new();
    seed_board(&mut board, &source).await.unwrap();
    assert_eq!(
        board.group(GroupId(1)).unwrap().stop_ids(),
        vec![StopId(2), StopId(1)]
    );
}

#[tokio::test]
async fn test_seed_with_unknown_stop_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{"stops": [{"id": 1, "name": "Welcome"}], "groups": [{"id": 1, "name": "G", "stop_ids": [4]}]}"#,
    )
    .unwrap();

    let mut board = Board::new();
    let err = seed_board(&mut board, &FileSeedSource::new(&path))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StopboardError::Board(BoardError::UnknownStop { stop: StopId(4), .. })
    ));
    assert!(board.groups().is_empty());
}

#[tokio::test]
async fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.csv");
    std::fs::write(&path, "id,name").unwrap();

    let err = FileSeedSource::new(&path).fetch().await.unwrap_err();
    assert!(matches!(err, SeedError::UnsupportedFormat(ref ext) if ext == "csv"));
}

#[tokio::test(start_paused = true)]
async fn test_demo_source_waits_before_delivering() {
    let source = DemoSeedSource::new();
    let started = tokio::time::Instant::now();
    let seed = source.fetch().await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(500));
    assert_eq!(seed.stops.len(), 4);
    assert_eq!(source.describe(), "demo");
}

use std::fs;
use std::time::{Duration, Instant};

use scatterscope::data::loader::{read_dataset, DatasetLoader, LoadOutcome};
use scatterscope::{Point, ScatterError};

fn poll_until_done(loader: &mut DatasetLoader) -> LoadOutcome {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(outcome) = loader.poll() {
            return outcome;
        }
        assert!(Instant::now() < deadline, "loader never finished");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn reads_a_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.json");
    fs::write(&path, r#"[{"X": 1.5, "Y": -2}, {"X": 3, "Y": 4, "note": "x"}]"#).unwrap();

    let ds = read_dataset(&path).unwrap();
    assert_eq!(ds.points(), &[Point::new(1.5, -2.0), Point::new(3.0, 4.0)]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    match read_dataset(&path) {
        Err(ScatterError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn newer_request_supersedes_older_one() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    fs::write(&first, r#"[{"X": 1, "Y": 1}]"#).unwrap();
    fs::write(&second, r#"[{"X": 2, "Y": 2}, {"X": 3, "Y": 3}]"#).unwrap();

    let mut loader = DatasetLoader::new();
    let g1 = loader.request(first);
    let g2 = loader.request(second.clone());
    assert!(g2 > g1);
    assert_eq!(loader.pending_path(), Some(second.as_path()));

    let outcome = poll_until_done(&mut loader);
    assert_eq!(outcome.generation, g2);
    assert_eq!(outcome.path, second);
    assert_eq!(outcome.result.unwrap().len(), 2);
    assert!(!loader.is_pending());
    assert_eq!(loader.pending_path(), None);
    assert!(loader.poll().is_none());
}

#[test]
fn poll_eventually_delivers_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "not json").unwrap();

    let mut loader = DatasetLoader::new();
    loader.request(path);
    let outcome = poll_until_done(&mut loader);
    assert!(matches!(
        outcome.result,
        Err(ScatterError::MalformedInput { .. })
    ));
}

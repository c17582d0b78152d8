use super::*;
use std::fs;
use tempfile::TempDir;

fn v(n: u64) -> Version {
    Version::new(n).unwrap()
}

fn setup(up: &[&str], down: &[&str]) -> (TempDir, Catalog) {
    let dir = tempfile::tempdir().unwrap();
    let up_dir = dir.path().join("up");
    let down_dir = dir.path().join("down");
    fs::create_dir_all(&up_dir).unwrap();
    fs::create_dir_all(&down_dir).unwrap();
    for name in up {
        fs::write(up_dir.join(name), "SELECT 1;").unwrap();
    }
    for name in down {
        fs::write(down_dir.join(name), "SELECT 1;").unwrap();
    }
    let catalog = Catalog::new(up_dir, down_dir);
    (dir, catalog)
}

#[test]
fn test_list_sorted_ascending() {
    let (_dir, catalog) = setup(&["3_c.sql", "1_a.sql", "2_b.sql"], &[]);
    let versions: Vec<u64> = catalog
        .list(Direction::Up)
        .unwrap()
        .iter()
        .map(|f| f.version.get())
        .collect();
    assert_eq!(versions, vec![1, 2, 3]);
}

#[test]
fn test_list_orders_numerically_not_lexically() {
    let (_dir, catalog) = setup(&["10_b.sql", "9_a.sql"], &[]);
    let labels: Vec<String> = catalog
        .list(Direction::Up)
        .unwrap()
        .into_iter()
        .map(|f| f.label)
        .collect();
    assert_eq!(labels, vec!["a", "b"]);
}

#[test]
fn test_list_ignores_non_sql_entries() {
    let (dir, catalog) = setup(&["1_a.sql"], &[]);
    fs::write(dir.path().join("up/README.md"), "notes").unwrap();
    fs::create_dir_all(dir.path().join("up/2_nested.sql")).unwrap();

    let files = catalog.list(Direction::Up).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].direction, Direction::Up);
}

#[test]
fn test_list_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new(dir.path().join("nope_up"), dir.path().join("nope_down"));
    assert!(catalog.list(Direction::Up).unwrap().is_empty());
    assert!(catalog.list(Direction::Down).unwrap().is_empty());
}

#[test]
fn test_list_rejects_malformed_name() {
    let (_dir, catalog) = setup(&["1_a.sql", "oops.sql"], &[]);
    let err = catalog.list(Direction::Up).unwrap_err();
    assert!(matches!(err, CoreError::InvalidMigrationName { .. }));
}

#[test]
fn test_list_rejects_duplicate_version() {
    let (_dir, catalog) = setup(&["5_a.sql", "0005_b.sql"], &[]);
    let err = catalog.list(Direction::Up).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateVersion { .. }), "{err}");
}

#[test]
fn test_pending_up_from_empty() {
    let (_dir, catalog) = setup(&["1_a.sql", "2_b.sql"], &[]);
    assert_eq!(catalog.pending_up(Marker::Empty).unwrap().len(), 2);
    assert_eq!(catalog.pending_up(Marker::Baseline).unwrap().len(), 2);
}

#[test]
fn test_pending_up_strictly_after() {
    let (_dir, catalog) = setup(&["1_a.sql", "2_b.sql", "3_c.sql"], &[]);
    let pending = catalog.pending_up(Marker::Applied(v(2))).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].version, v(3));

    assert!(catalog.pending_up(Marker::Applied(v(3))).unwrap().is_empty());
}

#[test]
fn test_pending_up_is_restartable() {
    let (dir, catalog) = setup(&["1_a.sql"], &[]);
    assert_eq!(catalog.pending_up(Marker::Empty).unwrap().len(), 1);
    fs::write(dir.path().join("up/2_b.sql"), "SELECT 1;").unwrap();
    assert_eq!(catalog.pending_up(Marker::Empty).unwrap().len(), 2);
}

#[test]
fn test_previous_version_fewer_than_two_downs_is_empty() {
    let (_dir, catalog) = setup(&[], &[]);
    assert_eq!(catalog.previous_version(Marker::Applied(v(1))).unwrap(), Marker::Empty);

    let (_dir, catalog) = setup(&[], &["1_a.sql"]);
    assert_eq!(catalog.previous_version(Marker::Applied(v(1))).unwrap(), Marker::Empty);
}

#[test]
fn test_previous_version_finds_next_older() {
    let (_dir, catalog) = setup(&[], &["1_a.sql", "2_b.sql", "3_c.sql"]);
    assert_eq!(
        catalog.previous_version(Marker::Applied(v(3))).unwrap(),
        Marker::Applied(v(2))
    );
    assert_eq!(
        catalog.previous_version(Marker::Applied(v(2))).unwrap(),
        Marker::Applied(v(1))
    );
}

#[test]
fn test_previous_version_at_earliest_is_baseline() {
    let (_dir, catalog) = setup(&[], &["1_a.sql", "2_b.sql"]);
    assert_eq!(catalog.previous_version(Marker::Applied(v(1))).unwrap(), Marker::Baseline);
    assert_eq!(catalog.previous_version(Marker::Baseline).unwrap(), Marker::Baseline);
    assert_eq!(catalog.previous_version(Marker::Empty).unwrap(), Marker::Baseline);
}

#[test]
fn test_previous_version_between_files() {
    let (_dir, catalog) = setup(&[], &["10_a.sql", "30_c.sql"]);
    assert_eq!(
        catalog.previous_version(Marker::Applied(v(20))).unwrap(),
        Marker::Applied(v(10))
    );
}

#[test]
fn test_find_by_version() {
    let (_dir, catalog) = setup(&["1_a.sql"], &["1_a.sql"]);
    let down = catalog.find(Direction::Down, v(1)).unwrap().unwrap();
    assert_eq!(down.direction, Direction::Down);
    assert_eq!(down.label, "a");
    assert!(catalog.find(Direction::Down, v(2)).unwrap().is_none());
}

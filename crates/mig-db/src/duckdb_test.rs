use super::*;

#[test]
fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert!(db.list_tables().unwrap().is_empty());
    assert!(DuckDbBackend::new(":memory:").is_ok());
}

#[test]
fn test_execute_and_relation_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE t1 (id INTEGER)").unwrap();

    assert!(db.relation_exists("t1").unwrap());
    assert!(!db.relation_exists("nonexistent").unwrap());
}

#[test]
fn test_execute_error_is_reported() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute("INSERT INTO missing VALUES (1)").unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(_)), "{err}");

    let err = db.execute("CREATE TABLE broken (").unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)), "{err}");
}

#[test]
fn test_rollback_discards_ddl() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.begin().unwrap();
    db.execute("CREATE TABLE scratch (id INTEGER)").unwrap();
    db.rollback().unwrap();

    assert!(!db.relation_exists("scratch").unwrap());
}

#[test]
fn test_commit_keeps_ddl() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.begin().unwrap();
    db.execute("CREATE TABLE kept (id INTEGER)").unwrap();
    db.commit().unwrap();

    assert!(db.relation_exists("kept").unwrap());
}

#[test]
fn test_commit_without_transaction_fails() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.commit().unwrap_err();
    assert!(matches!(err, DbError::TransactionError(_)));
}

#[test]
fn test_list_tables_ordered_and_qualified() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE zeta (id INTEGER)").unwrap();
    db.execute("CREATE TABLE alpha (id INTEGER)").unwrap();
    db.execute("CREATE SCHEMA staging").unwrap();
    db.execute("CREATE TABLE staging.orders (id INTEGER)").unwrap();
    db.execute("CREATE VIEW v_alpha AS SELECT * FROM alpha").unwrap();

    assert_eq!(
        db.list_tables().unwrap(),
        vec![
            TableRef::new("main", "alpha"),
            TableRef::new("main", "zeta"),
            TableRef::new("staging", "orders"),
        ]
    );
}

#[test]
fn test_dotted_table_name_round_trips() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute(r#"CREATE TABLE "a.b" (id INTEGER)"#).unwrap();

    let tables = db.list_tables().unwrap();
    assert_eq!(tables, vec![TableRef::new("main", "a.b")]);

    let definition = db.table_definition(&tables[0]).unwrap();
    assert!(definition.contains("a.b"), "{definition}");
}

#[test]
fn test_list_tables_empty() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert!(db.list_tables().unwrap().is_empty());
}

#[test]
fn test_table_definition() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE t (id INTEGER, name VARCHAR)").unwrap();

    let definition = db.table_definition(&TableRef::in_default_schema("t")).unwrap();
    assert!(definition.starts_with("CREATE TABLE t"), "{definition}");
    assert!(definition.contains("id INTEGER"), "{definition}");
    assert!(definition.contains("\"name\" VARCHAR") || definition.contains("name VARCHAR"));
}

#[test]
fn test_table_definition_schema_qualified() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE SCHEMA staging").unwrap();
    db.execute("CREATE TABLE staging.orders (id INTEGER)").unwrap();

    let definition = db
        .table_definition(&TableRef::new("staging", "orders"))
        .unwrap();
    assert!(definition.contains("orders"), "{definition}");
}

#[test]
fn test_table_definition_missing() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db
        .table_definition(&TableRef::in_default_schema("ghost"))
        .unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(_)));
}

#[test]
fn test_file_backed_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.duckdb");
    {
        let db = DuckDbBackend::from_path(&path).unwrap();
        db.execute("CREATE TABLE persisted (id INTEGER)").unwrap();
    }
    let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
    assert!(db.relation_exists("persisted").unwrap());
}

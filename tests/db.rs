use diesel::RunQueryDsl;
use diesel::sql_types::Integer;

mod common;

#[derive(diesel::QueryableByName)]
struct Pragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .expect("pragma should be readable");
    assert_eq!(pragma.foreign_keys, 1);

    let orphan = diesel::sql_query(
        "INSERT INTO products (title, description, price, category_id) VALUES ('x', '', 1.0, 999)",
    )
    .execute(&mut conn);
    assert!(orphan.is_err());
}

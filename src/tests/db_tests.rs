use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tempfile::NamedTempFile;

async fn setup_pool() -> (SqlitePool, NamedTempFile) {
    let temp_db = NamedTempFile::new().unwrap();
    let db_url = format!("sqlite:{}", temp_db.path().display());
    let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();
    (pool, temp_db)
}

#[tokio::test]
async fn init_db_creates_all_tables() {
    let (pool, _temp_db) = setup_pool().await;
    crate::db::init_db(&pool).await.unwrap();

    for table in ["sources", "directories", "admin_settings"] {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM sqlite_master WHERE type='table' AND name=?1")
            .bind(table)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>("cnt"), 1, "missing table {}", table);
    }
}

#[tokio::test]
async fn init_db_is_idempotent() {
    let (pool, _temp_db) = setup_pool().await;
    crate::db::init_db(&pool).await.unwrap();
    crate::db::init_db(&pool).await.unwrap();
}

#[tokio::test]
async fn duplicate_natural_key_is_rejected_by_plain_insert() {
    let (pool, _temp_db) = setup_pool().await;
    crate::db::init_db(&pool).await.unwrap();

    sqlx::query("INSERT INTO sources (label, url) VALUES ('m', 'http://x/')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO directories (source_id, name, path, original_link) VALUES (1, 'a', '/a/', 'http://x/a/')")
        .execute(&pool)
        .await
        .unwrap();
    let dup = sqlx::query("INSERT INTO directories (source_id, name, path, original_link) VALUES (1, 'a', '/a/', 'http://x/a/')")
        .execute(&pool)
        .await;
    assert!(dup.is_err());
}

#[tokio::test]
async fn deleting_a_source_cascades_to_its_directories() {
    let (pool, _temp_db) = setup_pool().await;
    crate::db::init_db(&pool).await.unwrap();

    sqlx::query("INSERT INTO sources (label, url) VALUES ('m', 'http://x/')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO directories (source_id, name, path, original_link) VALUES (1, 'a', '/a/', 'http://x/a/')")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::query("DELETE FROM sources WHERE id = 1").execute(&pool).await.unwrap();

    let count = sqlx::query("SELECT COUNT(*) AS cnt FROM directories")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get::<i64, _>("cnt");
    assert_eq!(count, 0);
}

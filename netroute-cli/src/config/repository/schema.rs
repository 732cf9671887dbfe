//! Table definitions and region seeding

use anyhow::{Context, Result};
use sqlx::SqliteConnection;

use super::regions::{SEED_REGIONS, create_region_if_absent};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS regions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE NOT NULL,
        target_range TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS source_files (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        filename TEXT NOT NULL,
        uploaded_at TEXT NOT NULL,
        region_id INTEGER NOT NULL,
        FOREIGN KEY (region_id) REFERENCES regions (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS network_routes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        region_id INTEGER NOT NULL,
        node TEXT NOT NULL DEFAULT '',
        ne_ip TEXT NOT NULL DEFAULT '',
        idu TEXT NOT NULL DEFAULT '',
        capacity TEXT NOT NULL DEFAULT '',
        location TEXT NOT NULL DEFAULT '',
        parallel TEXT NOT NULL DEFAULT '',
        main_stby TEXT NOT NULL DEFAULT '',
        site_id_a TEXT NOT NULL DEFAULT '',
        lrd_a TEXT NOT NULL DEFAULT '',
        site_id_b TEXT NOT NULL DEFAULT '',
        lrd_b TEXT NOT NULL DEFAULT '',
        uplink TEXT NOT NULL DEFAULT '',
        link_count TEXT NOT NULL DEFAULT '',
        protection TEXT NOT NULL DEFAULT '',
        remote_ip TEXT NOT NULL DEFAULT '',
        remote_slot TEXT NOT NULL DEFAULT '',
        l3_port TEXT NOT NULL DEFAULT '',
        ras TEXT NOT NULL DEFAULT '',
        hostname TEXT NOT NULL DEFAULT '',
        link TEXT NOT NULL DEFAULT '',
        qam TEXT NOT NULL DEFAULT '',
        source_file_id INTEGER,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (region_id) REFERENCES regions (id),
        FOREIGN KEY (source_file_id) REFERENCES source_files (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_network_routes_capacity ON network_routes (capacity)",
    "CREATE INDEX IF NOT EXISTS idx_network_routes_node_idu ON network_routes (node, idu)",
    r#"
    CREATE TABLE IF NOT EXISTS capacity_summary (
        capacity_type TEXT PRIMARY KEY,
        central_count INTEGER NOT NULL DEFAULT 0,
        northern_count INTEGER NOT NULL DEFAULT 0,
        eastern_count INTEGER NOT NULL DEFAULT 0,
        southern_count INTEGER NOT NULL DEFAULT 0,
        em_count INTEGER NOT NULL DEFAULT 0,
        grand_total INTEGER NOT NULL DEFAULT 0
    )
    "#,
];

/// Create all tables that do not exist yet
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .context("Failed to initialize schema")?;
    }
    Ok(())
}

/// Insert the fixed regions, leaving existing ones untouched
pub async fn seed_regions(conn: &mut SqliteConnection) -> Result<()> {
    for (name, target_range) in SEED_REGIONS {
        create_region_if_absent(conn, name, target_range).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::repository::memory_store;
    use crate::ingest::LogicalField;
    use sqlx::Row;

    #[tokio::test]
    async fn test_route_table_has_a_column_per_logical_field() {
        let mut conn = memory_store().await;

        let rows = sqlx::query("PRAGMA table_info(network_routes)")
            .fetch_all(&mut conn)
            .await
            .unwrap();
        let columns: Vec<String> = rows.iter().map(|r| r.get::<String, _>("name")).collect();

        for field in LogicalField::ALL {
            assert!(
                columns.iter().any(|c| c == field.column()),
                "missing column {}",
                field.column()
            );
        }
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let mut conn = memory_store().await;
        init_schema(&mut conn).await.unwrap();
        seed_regions(&mut conn).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM regions")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(count, 5);
    }
}

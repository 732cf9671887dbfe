//! Region repository

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::{Row, SqliteConnection};

/// The five fixed regions and their target-range tags, in pivot column order
pub const SEED_REGIONS: [(&str, &str); 5] = [
    ("Central", "B3"),
    ("Northern", "B4"),
    ("Eastern", "B5"),
    ("Southern", "B6"),
    ("EM", "B7"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub target_range: String,
}

fn region_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Region> {
    Ok(Region {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        target_range: row.try_get("target_range")?,
    })
}

/// Insert a region unless one with the same name exists
pub async fn create_region_if_absent(
    conn: &mut SqliteConnection,
    name: &str,
    target_range: &str,
) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO regions (name, target_range) VALUES (?, ?)")
        .bind(name)
        .bind(target_range)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("Failed to create region {}", name))?;

    Ok(())
}

pub async fn list_regions(conn: &mut SqliteConnection) -> Result<Vec<Region>> {
    let rows = sqlx::query("SELECT id, name, target_range FROM regions ORDER BY id")
        .fetch_all(&mut *conn)
        .await
        .context("Failed to list regions")?;

    rows.iter().map(region_from_row).collect()
}

pub async fn find_region(conn: &mut SqliteConnection, id: i64) -> Result<Option<Region>> {
    let row = sqlx::query("SELECT id, name, target_range FROM regions WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context("Failed to get region")?;

    row.as_ref().map(region_from_row).transpose()
}

/// Case-insensitive lookup by name
pub async fn find_region_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Region>> {
    let row = sqlx::query(
        "SELECT id, name, target_range FROM regions WHERE name = ? COLLATE NOCASE",
    )
    .bind(name.trim())
    .fetch_optional(&mut *conn)
    .await
    .context("Failed to get region by name")?;

    row.as_ref().map(region_from_row).transpose()
}

/// Look a region up by numeric id or, failing that, by name
pub async fn find_region_by_ref(
    conn: &mut SqliteConnection,
    region: &str,
) -> Result<Option<Region>> {
    if let Ok(id) = region.trim().parse::<i64>() {
        if let Some(found) = find_region(conn, id).await? {
            return Ok(Some(found));
        }
    }
    find_region_by_name(conn, region).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::repository::memory_store;

    #[tokio::test]
    async fn test_seeded_regions_in_order() {
        let mut conn = memory_store().await;
        let regions = list_regions(&mut conn).await.unwrap();

        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Central", "Northern", "Eastern", "Southern", "EM"]);
        assert_eq!(regions[4].target_range, "B7");
    }

    #[tokio::test]
    async fn test_create_if_absent_keeps_existing() {
        let mut conn = memory_store().await;
        create_region_if_absent(&mut conn, "Central", "Z9").await.unwrap();

        let central = find_region_by_name(&mut conn, "central").await.unwrap().unwrap();
        assert_eq!(central.target_range, "B3");
        assert_eq!(list_regions(&mut conn).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_find_by_ref() {
        let mut conn = memory_store().await;

        let by_id = find_region_by_ref(&mut conn, "2").await.unwrap().unwrap();
        assert_eq!(by_id.name, "Northern");

        let by_name = find_region_by_ref(&mut conn, " em ").await.unwrap().unwrap();
        assert_eq!(by_name.name, "EM");

        assert!(find_region_by_ref(&mut conn, "Western").await.unwrap().is_none());
        assert!(find_region(&mut conn, 99).await.unwrap().is_none());
    }
}

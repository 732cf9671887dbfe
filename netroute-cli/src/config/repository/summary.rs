//! Capacity summary (pivot) repository

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::{Row, SqliteConnection};

use super::regions::SEED_REGIONS;

/// Route counts for one capacity label, per fixed region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacitySummaryRow {
    pub capacity_type: String,
    pub central: i64,
    pub northern: i64,
    pub eastern: i64,
    pub southern: i64,
    pub em: i64,
    pub grand_total: i64,
}

impl CapacitySummaryRow {
    /// Build a row from counts in `SEED_REGIONS` order; the total is their sum
    pub fn new(capacity_type: impl Into<String>, counts: [i64; 5]) -> Self {
        let [central, northern, eastern, southern, em] = counts;
        Self {
            capacity_type: capacity_type.into(),
            central,
            northern,
            eastern,
            southern,
            em,
            grand_total: counts.iter().sum(),
        }
    }

    pub fn region_counts(&self) -> [i64; 5] {
        [self.central, self.northern, self.eastern, self.southern, self.em]
    }
}

pub async fn delete_all_summary_rows(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query("DELETE FROM capacity_summary")
        .execute(&mut *conn)
        .await
        .context("Failed to clear capacity summary")?;

    Ok(())
}

pub async fn insert_summary_row(conn: &mut SqliteConnection, row: &CapacitySummaryRow) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO capacity_summary (
            capacity_type, central_count, northern_count, eastern_count,
            southern_count, em_count, grand_total
        ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&row.capacity_type)
    .bind(row.central)
    .bind(row.northern)
    .bind(row.eastern)
    .bind(row.southern)
    .bind(row.em)
    .bind(row.grand_total)
    .execute(&mut *conn)
    .await
    .with_context(|| format!("Failed to insert summary row for {}", row.capacity_type))?;

    Ok(())
}

/// Count routes per non-empty capacity label and fixed region, ascending by label
pub async fn query_capacity_counts_by_region(
    conn: &mut SqliteConnection,
) -> Result<Vec<CapacitySummaryRow>> {
    let rows = sqlx::query(
        r#"
        SELECT
            nr.capacity AS capacity,
            SUM(CASE WHEN r.name = ? THEN 1 ELSE 0 END) AS central_count,
            SUM(CASE WHEN r.name = ? THEN 1 ELSE 0 END) AS northern_count,
            SUM(CASE WHEN r.name = ? THEN 1 ELSE 0 END) AS eastern_count,
            SUM(CASE WHEN r.name = ? THEN 1 ELSE 0 END) AS southern_count,
            SUM(CASE WHEN r.name = ? THEN 1 ELSE 0 END) AS em_count
        FROM network_routes nr
        JOIN regions r ON r.id = nr.region_id
        WHERE nr.capacity IS NOT NULL AND nr.capacity != ''
        GROUP BY nr.capacity
        ORDER BY nr.capacity
        "#,
    )
    .bind(SEED_REGIONS[0].0)
    .bind(SEED_REGIONS[1].0)
    .bind(SEED_REGIONS[2].0)
    .bind(SEED_REGIONS[3].0)
    .bind(SEED_REGIONS[4].0)
    .fetch_all(&mut *conn)
    .await
    .context("Failed to aggregate capacity counts")?;

    let mut summary = Vec::new();
    for row in rows {
        let counts = [
            row.try_get::<i64, _>("central_count")?,
            row.try_get::<i64, _>("northern_count")?,
            row.try_get::<i64, _>("eastern_count")?,
            row.try_get::<i64, _>("southern_count")?,
            row.try_get::<i64, _>("em_count")?,
        ];
        summary.push(CapacitySummaryRow::new(
            row.try_get::<String, _>("capacity")?,
            counts,
        ));
    }

    Ok(summary)
}

/// Stored summary, largest totals first
pub async fn list_summary_rows(conn: &mut SqliteConnection) -> Result<Vec<CapacitySummaryRow>> {
    let rows = sqlx::query(
        r#"
        SELECT capacity_type, central_count, northern_count, eastern_count,
               southern_count, em_count, grand_total
        FROM capacity_summary
        ORDER BY grand_total DESC, capacity_type
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to read capacity summary")?;

    let mut summary = Vec::new();
    for row in rows {
        summary.push(CapacitySummaryRow {
            capacity_type: row.try_get("capacity_type")?,
            central: row.try_get("central_count")?,
            northern: row.try_get("northern_count")?,
            eastern: row.try_get("eastern_count")?,
            southern: row.try_get("southern_count")?,
            em: row.try_get("em_count")?,
            grand_total: row.try_get("grand_total")?,
        });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::repository::memory_store;

    #[test]
    fn test_row_total_is_sum_of_regions() {
        let row = CapacitySummaryRow::new("10G", [1, 0, 4, 2, 3]);
        assert_eq!(row.grand_total, 10);
        assert_eq!(row.region_counts(), [1, 0, 4, 2, 3]);
        assert_eq!(row.eastern, 4);
    }

    #[tokio::test]
    async fn test_list_orders_by_total_then_label() {
        let mut conn = memory_store().await;
        insert_summary_row(&mut conn, &CapacitySummaryRow::new("1G", [1, 0, 0, 0, 0])).await.unwrap();
        insert_summary_row(&mut conn, &CapacitySummaryRow::new("10G", [2, 1, 0, 0, 0])).await.unwrap();
        insert_summary_row(&mut conn, &CapacitySummaryRow::new("100M", [0, 0, 0, 0, 1])).await.unwrap();

        let rows = list_summary_rows(&mut conn).await.unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.capacity_type.as_str()).collect();
        assert_eq!(labels, vec!["10G", "100M", "1G"]);

        delete_all_summary_rows(&mut conn).await.unwrap();
        assert!(list_summary_rows(&mut conn).await.unwrap().is_empty());
    }
}

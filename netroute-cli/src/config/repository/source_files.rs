//! Source file (ingestion event) repository

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqliteConnection};

/// One ingested file with the number of routes it contributed
#[derive(Debug, Clone, Serialize)]
pub struct SourceFileSummary {
    pub id: i64,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub region: String,
    pub route_count: usize,
}

/// Record an ingestion event and return its id
pub async fn create_source_file(
    conn: &mut SqliteConnection,
    filename: &str,
    region_id: i64,
) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO source_files (filename, uploaded_at, region_id) VALUES (?, ?, ?)",
    )
    .bind(filename)
    .bind(Utc::now())
    .bind(region_id)
    .execute(&mut *conn)
    .await
    .with_context(|| format!("Failed to record source file {}", filename))?;

    Ok(result.last_insert_rowid())
}

/// All ingested files, newest first
pub async fn list_source_files(conn: &mut SqliteConnection) -> Result<Vec<SourceFileSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT
            sf.id,
            sf.filename,
            sf.uploaded_at,
            r.name AS region,
            COUNT(nr.id) AS route_count
        FROM source_files sf
        JOIN regions r ON r.id = sf.region_id
        LEFT JOIN network_routes nr ON nr.source_file_id = sf.id
        GROUP BY sf.id
        ORDER BY sf.id DESC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to list source files")?;

    let mut files = Vec::new();
    for row in rows {
        files.push(SourceFileSummary {
            id: row.try_get("id")?,
            filename: row.try_get("filename")?,
            uploaded_at: row.try_get("uploaded_at")?,
            region: row.try_get("region")?,
            route_count: row.try_get::<i64, _>("route_count")? as usize,
        });
    }

    Ok(files)
}

pub async fn count_source_files(conn: &mut SqliteConnection) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM source_files")
        .fetch_one(&mut *conn)
        .await
        .context("Failed to count source files")?;

    Ok(count)
}

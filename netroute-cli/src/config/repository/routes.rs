//! Network route repository

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use sqlx::{Row, SqliteConnection};

use crate::ingest::{LogicalField, RouteRecord};

/// INSERT statement covering region, every logical field, and source file
static INSERT_ROUTE_SQL: Lazy<String> = Lazy::new(|| {
    let columns: Vec<&str> = LogicalField::ALL.iter().map(|f| f.column()).collect();
    let placeholders = vec!["?"; columns.len() + 2].join(", ");
    format!(
        "INSERT INTO network_routes (region_id, {}, source_file_id) VALUES ({})",
        columns.join(", "),
        placeholders
    )
});

/// Route listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub id: i64,
    pub node: String,
    pub ne_ip: String,
    pub idu: String,
    pub capacity: String,
    pub location: String,
    pub l3_port: String,
    pub hostname: String,
}

/// Insert one normalized route; fails on any constraint violation
pub async fn insert_route(
    conn: &mut SqliteConnection,
    region_id: i64,
    record: &RouteRecord,
    source_file_id: i64,
) -> Result<i64> {
    let mut query = sqlx::query(INSERT_ROUTE_SQL.as_str()).bind(region_id);
    for value in record.values() {
        query = query.bind(value.as_str());
    }

    let result = query
        .bind(source_file_id)
        .execute(&mut *conn)
        .await
        .context("Failed to insert network route")?;

    Ok(result.last_insert_rowid())
}

/// Routes ordered by node then IDU, optionally restricted to one region name
pub async fn list_routes(
    conn: &mut SqliteConnection,
    region: Option<&str>,
    limit: u32,
) -> Result<Vec<RouteSummary>> {
    let mut sql = String::from(
        r#"
        SELECT id, node, ne_ip, idu, capacity, location, l3_port, hostname
        FROM network_routes
        "#,
    );
    if region.is_some() {
        sql.push_str(
            " WHERE region_id = (SELECT id FROM regions WHERE name = ? COLLATE NOCASE)",
        );
    }
    sql.push_str(" ORDER BY node, idu, id LIMIT ?");

    let mut query = sqlx::query(&sql);
    if let Some(name) = region {
        query = query.bind(name.trim());
    }

    let rows = query
        .bind(limit as i64)
        .fetch_all(&mut *conn)
        .await
        .context("Failed to list network routes")?;

    let mut routes = Vec::new();
    for row in rows {
        routes.push(RouteSummary {
            id: row.try_get("id")?,
            node: row.try_get("node")?,
            ne_ip: row.try_get("ne_ip")?,
            idu: row.try_get("idu")?,
            capacity: row.try_get("capacity")?,
            location: row.try_get("location")?,
            l3_port: row.try_get("l3_port")?,
            hostname: row.try_get("hostname")?,
        });
    }

    Ok(routes)
}

pub async fn count_routes(conn: &mut SqliteConnection) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM network_routes")
        .fetch_one(&mut *conn)
        .await
        .context("Failed to count network routes")?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::repository::{memory_store, source_files};

    fn record(node: &str, idu: &str, capacity: &str) -> RouteRecord {
        let mut record = RouteRecord::default();
        record.set(LogicalField::Node, node);
        record.set(LogicalField::Idu, idu);
        record.set(LogicalField::Capacity, capacity);
        record.set(LogicalField::L3Port, "ge-0/0/1");
        record
    }

    #[test]
    fn test_insert_sql_shape() {
        assert!(INSERT_ROUTE_SQL.starts_with("INSERT INTO network_routes (region_id, node, ne_ip,"));
        assert!(INSERT_ROUTE_SQL.contains("qam, source_file_id)"));
        assert_eq!(INSERT_ROUTE_SQL.matches('?').count(), 23);
    }

    #[tokio::test]
    async fn test_insert_and_list_ordered() {
        let mut conn = memory_store().await;
        let file = source_files::create_source_file(&mut conn, "c.xlsx", 1).await.unwrap();

        insert_route(&mut conn, 1, &record("N2", "IDU1", "1G"), file).await.unwrap();
        insert_route(&mut conn, 1, &record("N1", "IDU9", "10G"), file).await.unwrap();
        insert_route(&mut conn, 1, &record("N1", "IDU2", "1G"), file).await.unwrap();

        let routes = list_routes(&mut conn, None, 100).await.unwrap();
        let keys: Vec<(&str, &str)> = routes
            .iter()
            .map(|r| (r.node.as_str(), r.idu.as_str()))
            .collect();
        assert_eq!(keys, vec![("N1", "IDU2"), ("N1", "IDU9"), ("N2", "IDU1")]);
        assert_eq!(routes[0].l3_port, "ge-0/0/1");
        assert_eq!(routes[0].hostname, "");
    }

    #[tokio::test]
    async fn test_list_filters_by_region_and_limits() {
        let mut conn = memory_store().await;
        let central = source_files::create_source_file(&mut conn, "c.xlsx", 1).await.unwrap();
        let eastern = source_files::create_source_file(&mut conn, "e.xlsx", 3).await.unwrap();

        insert_route(&mut conn, 1, &record("C1", "I1", "1G"), central).await.unwrap();
        insert_route(&mut conn, 3, &record("E1", "I1", "1G"), eastern).await.unwrap();
        insert_route(&mut conn, 3, &record("E2", "I1", "1G"), eastern).await.unwrap();

        let routes = list_routes(&mut conn, Some("eastern"), 100).await.unwrap();
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.node.starts_with('E')));

        assert_eq!(list_routes(&mut conn, None, 1).await.unwrap().len(), 1);
        assert!(list_routes(&mut conn, Some("Nowhere"), 100).await.unwrap().is_empty());
        assert_eq!(count_routes(&mut conn).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_source_file() {
        let mut conn = memory_store().await;
        assert!(insert_route(&mut conn, 1, &record("N1", "I1", "1G"), 999).await.is_err());
    }
}

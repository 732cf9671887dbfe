//! Pivot and recompute command handlers

use anyhow::{Context, Result};
use colored::*;

use super::PivotCommands;
use crate::cli::output::{OutputFormat, print_json, print_table};
use crate::config::Config;
use crate::config::repository::regions::SEED_REGIONS;
use crate::config::repository::{self, routes, source_files, summary as summary_repo};
use crate::services::summary::{self, CapacitySummaryRow};

/// Handle `netroute recompute`
pub async fn handle_recompute_command(config: &Config) -> Result<()> {
    let pool = repository::open_store(&config.database_path).await?;
    let mut conn = repository::acquire(&pool).await?;

    let rows = summary::recompute(&mut conn)
        .await
        .context("Failed to combine regional data")?;
    let route_count = routes::count_routes(&mut conn).await?;
    let file_count = source_files::count_source_files(&mut conn).await?;

    drop(conn);
    pool.close().await;

    println!(
        "{} All regional data combined: {} routes from {} files into {} capacity types",
        "✓".green().bold(),
        route_count.to_string().bold(),
        file_count,
        rows.len().to_string().bold()
    );
    Ok(())
}

/// Handle `netroute pivot`
pub async fn handle_pivot_command(args: PivotCommands, config: &Config) -> Result<()> {
    let pool = repository::open_store(&config.database_path).await?;
    let mut conn = repository::acquire(&pool).await?;

    let rows = summary_repo::list_summary_rows(&mut conn).await?;

    drop(conn);
    pool.close().await;

    if let Some(path) = &args.export {
        summary::export_pivot(&rows, path)?;
    }

    match args.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No capacity summary yet. Ingest a file or run 'netroute recompute'.".dimmed());
            } else {
                let mut headers: Vec<&str> = vec!["Capacity"];
                headers.extend(SEED_REGIONS.iter().map(|(name, _)| *name));
                headers.push("Grand Total");
                print_table(&headers, &pivot_table_rows(&rows));
            }
        }
    }

    if let Some(path) = &args.export {
        if args.format == OutputFormat::Table {
            println!("Pivot written to {}", path.display().to_string().cyan());
        }
    }

    Ok(())
}

fn pivot_table_rows(rows: &[CapacitySummaryRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            let mut cells = vec![row.capacity_type.clone()];
            cells.extend(row.region_counts().iter().map(|c| c.to_string()));
            cells.push(row.grand_total.to_string());
            cells
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_table_rows() {
        let rows = vec![CapacitySummaryRow::new("1G", [1, 0, 2, 0, 0])];
        assert_eq!(
            pivot_table_rows(&rows),
            vec![vec!["1G", "1", "0", "2", "0", "0", "3"]]
        );
    }
}

//! Route, region and source file listing handlers

use anyhow::Result;
use colored::*;

use super::{ListCommands, RoutesCommands};
use crate::cli::output::{OutputFormat, print_json, print_table};
use crate::config::Config;
use crate::config::repository::{self, regions, routes, source_files};
use crate::ingest::IngestError;

/// Handle `netroute routes`
pub async fn handle_routes_command(args: RoutesCommands, config: &Config) -> Result<()> {
    let pool = repository::open_store(&config.database_path).await?;
    let mut conn = repository::acquire(&pool).await?;

    if let Some(name) = &args.region {
        if regions::find_region_by_name(&mut conn, name).await?.is_none() {
            return Err(IngestError::UnknownRegion {
                region: name.clone(),
            }
            .into());
        }
    }

    let limit = args.limit.unwrap_or(config.route_list_limit);
    let routes = routes::list_routes(&mut conn, args.region.as_deref(), limit).await?;

    drop(conn);
    pool.close().await;

    match args.format {
        OutputFormat::Json => print_json(&routes)?,
        OutputFormat::Table => {
            if routes.is_empty() {
                println!("{}", "No routes found.".dimmed());
                return Ok(());
            }
            let rows: Vec<Vec<String>> = routes
                .into_iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.node,
                        r.ne_ip,
                        r.idu,
                        r.capacity,
                        r.location,
                        r.l3_port,
                        r.hostname,
                    ]
                })
                .collect();
            print_table(
                &["ID", "Node", "NE IP", "IDU", "Capacity", "Location", "L3 Port", "Hostname"],
                &rows,
            );
        }
    }

    Ok(())
}

/// Handle `netroute regions`
pub async fn handle_regions_command(args: ListCommands, config: &Config) -> Result<()> {
    let pool = repository::open_store(&config.database_path).await?;
    let mut conn = repository::acquire(&pool).await?;
    let regions = regions::list_regions(&mut conn).await?;
    drop(conn);
    pool.close().await;

    match args.format {
        OutputFormat::Json => print_json(&regions)?,
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = regions
                .into_iter()
                .map(|r| vec![r.id.to_string(), r.name, r.target_range])
                .collect();
            print_table(&["ID", "Name", "Target Range"], &rows);
        }
    }

    Ok(())
}

/// Handle `netroute files`
pub async fn handle_files_command(args: ListCommands, config: &Config) -> Result<()> {
    let pool = repository::open_store(&config.database_path).await?;
    let mut conn = repository::acquire(&pool).await?;
    let files = source_files::list_source_files(&mut conn).await?;
    drop(conn);
    pool.close().await;

    match args.format {
        OutputFormat::Json => print_json(&files)?,
        OutputFormat::Table => {
            if files.is_empty() {
                println!("{}", "No files ingested yet.".dimmed());
                return Ok(());
            }
            let rows: Vec<Vec<String>> = files
                .into_iter()
                .map(|f| {
                    vec![
                        f.id.to_string(),
                        f.filename,
                        f.region,
                        f.uploaded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                        f.route_count.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "File", "Region", "Uploaded (UTC)", "Routes"], &rows);
        }
    }

    Ok(())
}

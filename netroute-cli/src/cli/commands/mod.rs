//! Subcommand arguments and handlers

pub mod ingest;
pub mod routes;
pub mod summary;

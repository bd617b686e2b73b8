//! todoctl-server: HTTP service for a PostgreSQL-backed todo list
//!
//! Exposes a health probe and CRUD routes for tasks. All task state lives in
//! the relational store; the service only holds the connection pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig};
pub use db::{MemoryTaskStore, PgTaskStore, StoreError, TaskStore};
pub use http::{build_router, run_server, ApiError, AppState};
pub use models::{Task, TaskTitle, ValidationError};

//! Database layer - connection pool, schema, and task stores
//!
//! # Design Principles
//!
//! - One pooled statement per operation - no multi-statement transactions
//! - `RETURNING` instead of insert-then-select
//! - Missing rows surface as `StoreError::NotFound`, never as a generic failure

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryTaskStore;
pub use pool::create_pool;
pub use postgres::PgTaskStore;
pub use schema::ensure_schema;
pub use store::{StoreError, TaskStore};

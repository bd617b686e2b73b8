//! Route handlers
//!
//! - health: store liveness probe
//! - todos: task CRUD under /api/todos

pub mod health;
pub mod todos;

//! Domain models with validation at construction
//!
//! Request input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod task;
pub mod validation;

pub use task::{CreateTaskRequest, Task, TaskTitle, UpdateTaskRequest, ValidatedUpdate};
pub use validation::ValidationError;

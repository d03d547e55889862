// Library entry so integration tests and external tools can reference
// internal modules. The binary (`main.rs`) uses the same set.
pub mod commands;
pub mod constants;
pub mod database;
pub mod handler;
pub mod model;
pub mod services;
pub mod ui;

// Convenient re-exports for frequently used types.
pub use model::{AppState, ShardManagerContainer};

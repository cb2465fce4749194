//! Gradebook Store - SQLite persistence layer
//!
//! Provides:
//! - SQLite connection management and embedded migrations
//! - Store Gateway with typed constraint-violation vs connection-failure
//!   outcomes
//! - Per-entity DAO operations resolving every loaded row through the
//!   session identity map
//! - Relationship resolver with an optional per-session cached accessor
//! - Grade report aggregation

pub mod dao;
pub mod db;
pub mod errors;
pub mod gateway;
pub mod migrations;
pub mod relations;
pub mod report;

// Re-export key types
pub use errors::Result;

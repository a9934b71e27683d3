//! SQLite storage implementation for the MycoKey engine.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the read-side repository traits defined in
//! `mycokey-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the catalog read interfaces
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place where Diesel dependencies exist. The core
//! crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (engine)
//!                │
//!                ▼
//!        storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod characters;
pub mod states;
pub mod taxa;
pub mod trait_sets;

// Re-export database utilities
pub use db::{create_pool, get_connection, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from mycokey-core for convenience
pub use mycokey_core::errors::{DatabaseError, Error, Result};

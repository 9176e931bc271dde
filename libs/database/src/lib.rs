//! Database connectivity for PostgreSQL-backed services.
//!
//! Provides connection management with retry/backoff, pool configuration
//! from environment variables (with the `config` feature), and health
//! checks for readiness probes.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{PostgresConfig, connect_from_config_with_retry};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};

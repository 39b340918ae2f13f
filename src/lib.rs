//! PostgreSQL helpers for the Runar ecosystem.
//!
//! # Intention
//!
//! - Build `postgresql://` connection strings from discrete settings.
//! - Check whether a table or a stored procedure exists, using bound
//!   parameters against the system catalogs.
//! - Keep hand-written SQL safe: whitelist identifiers and screen single
//!   quotes in literals.
//!
//! # Architectural Boundaries
//!
//! - Only PostgreSQL helper code belongs here.
//! - No pooling, retries, migrations or ORM. The caller owns the connection;
//!   every operation is a single synchronous call on a session it supplies.

pub mod catalog;
pub mod config;
pub mod dsn;
pub mod error;
pub mod identifier;
pub mod literal;

pub use catalog::{procedure_exists, table_exists, CatalogSession};
pub use config::ConnectionDescriptor;
pub use dsn::make_postgresql_dsn;
pub use error::{Error, Result};
pub use identifier::{check_identifier, check_procedure_name, check_table_name};
pub use literal::escape_single_quotes;

//! Table and procedure existence checks against the system catalogs.
//!
//! Both checks bind the schema and object name as query parameters; nothing
//! is interpolated into the SQL text. Each call prepares one statement on the
//! caller's session, runs it once and releases it again before returning.

use postgres::{Client, Statement, Transaction};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Binds `$1 = schema`, `$2 = table`.
pub const QUERY_TABLE_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = $1 AND table_name = $2);";

/// Binds `$1 = procedure`, `$2 = schema`.
pub const QUERY_PROCEDURE_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM pg_catalog.pg_proc JOIN pg_namespace ON pg_catalog.pg_proc.pronamespace = pg_namespace.oid WHERE pg_proc.proname = $1 AND pg_namespace.nspname = $2);";

/// An open database session able to run a two-parameter `SELECT EXISTS` query.
///
/// The session is owned by the caller; this crate never opens or closes it.
pub trait CatalogSession {
    /// Prepared statement handle, scoped to a single check.
    type Statement;
    type Error: std::error::Error + Send + Sync + 'static;

    fn prepare(&mut self, query: &str) -> std::result::Result<Self::Statement, Self::Error>;

    /// Run `statement` with two text parameters and read the single boolean it returns.
    fn query_exists(
        &mut self,
        statement: &Self::Statement,
        first: &str,
        second: &str,
    ) -> std::result::Result<bool, Self::Error>;

    /// Release `statement`.
    fn close(&mut self, statement: Self::Statement) -> std::result::Result<(), Self::Error>;
}

// The `postgres` crate deallocates a statement on the server when its last
// handle is dropped and offers no fallible close, so release cannot fail here.
impl CatalogSession for Client {
    type Statement = Statement;
    type Error = postgres::Error;

    fn prepare(&mut self, query: &str) -> std::result::Result<Statement, postgres::Error> {
        Client::prepare(self, query)
    }

    fn query_exists(
        &mut self,
        statement: &Statement,
        first: &str,
        second: &str,
    ) -> std::result::Result<bool, postgres::Error> {
        Client::query_one(self, statement, &[&first, &second])?.try_get(0)
    }

    fn close(&mut self, statement: Statement) -> std::result::Result<(), postgres::Error> {
        drop(statement);
        Ok(())
    }
}

impl CatalogSession for Transaction<'_> {
    type Statement = Statement;
    type Error = postgres::Error;

    fn prepare(&mut self, query: &str) -> std::result::Result<Statement, postgres::Error> {
        Transaction::prepare(self, query)
    }

    fn query_exists(
        &mut self,
        statement: &Statement,
        first: &str,
        second: &str,
    ) -> std::result::Result<bool, postgres::Error> {
        Transaction::query_one(self, statement, &[&first, &second])?.try_get(0)
    }

    fn close(&mut self, statement: Statement) -> std::result::Result<(), postgres::Error> {
        drop(statement);
        Ok(())
    }
}

/// Check whether `schema.table` exists.
pub fn table_exists<S: CatalogSession>(session: &mut S, schema: &str, table: &str) -> Result<bool> {
    debug!(schema, table, "checking table existence");
    exists(session, QUERY_TABLE_EXISTS, schema, table)
}

/// Check whether a procedure or function named `procedure` exists in `schema`.
pub fn procedure_exists<S: CatalogSession>(
    session: &mut S,
    schema: &str,
    procedure: &str,
) -> Result<bool> {
    debug!(schema, procedure, "checking procedure existence");
    exists(session, QUERY_PROCEDURE_EXISTS, procedure, schema)
}

fn exists<S: CatalogSession>(
    session: &mut S,
    query: &str,
    first: &str,
    second: &str,
) -> Result<bool> {
    let statement = session.prepare(query).map_err(Error::driver)?;

    let outcome = session
        .query_exists(&statement, first, second)
        .map_err(Error::driver);
    let cleanup = session.close(statement).map_err(|e| {
        warn!(error = %e, "failed to release prepared statement");
        Error::cleanup(e)
    });

    Error::combine(outcome, cleanup)
}

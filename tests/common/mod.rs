// Shared fixtures for tests that talk to a real PostgreSQL server.
//
// Connection settings come from TEST_POSTGRES_HOST, TEST_POSTGRES_PORT,
// TEST_POSTGRES_DATABASE, TEST_POSTGRES_USER, TEST_POSTGRES_PASSWORD and
// TEST_POSTGRES_PARAMETERS. Without them the local `test` database is used.

#![allow(dead_code)]

use anyhow::Result;
use postgres::{Client, NoTls};
use rust_postgresql::{check_procedure_name, check_table_name, ConnectionDescriptor};

pub const SCHEMA_COMMON: &str = "public";

pub const TABLE_NAME_EXISTENT: &str = "TableA";
pub const TABLE_NAME_NOT_EXISTENT: &str = "xxxxxxxxx";

pub const PROCEDURE_NAME_EXISTENT: &str = "procedure_simulator";
pub const PROCEDURE_NAME_NOT_EXISTENT: &str = "xxxxxxxxx";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_descriptor() -> ConnectionDescriptor {
    ConnectionDescriptor::from_env("TEST_POSTGRES_").unwrap_or_else(|_| {
        ConnectionDescriptor::new("localhost", "5432")
            .with_database("test")
            .with_username("test")
            .with_password("test")
            .with_parameters("sslmode=disable")
    })
}

pub fn connect_to_test_database() -> Result<Client> {
    init_tracing();
    let client = Client::connect(&test_descriptor().to_dsn(), NoTls)?;
    Ok(client)
}

pub fn create_test_table() -> Result<()> {
    check_table_name(TABLE_NAME_EXISTENT)?;
    let mut client = connect_to_test_database()?;
    client.batch_execute(&format!(
        r#"CREATE TABLE IF NOT EXISTS {SCHEMA_COMMON}."{TABLE_NAME_EXISTENT}" ("Id" serial);"#
    ))?;
    client.close()?;
    Ok(())
}

pub fn create_test_procedure() -> Result<()> {
    check_procedure_name(PROCEDURE_NAME_EXISTENT)?;
    let mut client = connect_to_test_database()?;
    client.batch_execute(&format!(
        "CREATE OR REPLACE PROCEDURE {PROCEDURE_NAME_EXISTENT}()\n\
         LANGUAGE SQL\n\
         AS $$ SELECT 123 $$;"
    ))?;
    client.close()?;
    Ok(())
}
